//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::configure_pages;
use super::state::HttpState;
use crate::domain::ports::{MockGuestbooksApi, MockUsersApi};
use crate::middleware::Trace;

/// Build the page app over mocked ports, wrapped in the trace middleware.
pub fn test_app(
    users: MockUsersApi,
    guestbooks: MockGuestbooksApi,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(users), Arc::new(guestbooks));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_pages)
}

/// Read a response body as UTF-8 text.
pub async fn body_text(response: ServiceResponse) -> String {
    let bytes = actix_web::test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
