//! Page route table.
//!
//! actix matches services in registration order, so the literal `/new`
//! routes are registered ahead of their `{id}` siblings.

use actix_web::{HttpResponse, get, web};

use super::cache_control::see_other;
use super::{guestbooks, users};

/// The landing page is the user list.
#[get("/")]
pub async fn index() -> HttpResponse {
    see_other("/users")
}

/// Register every page handler on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use frontend::inbound::http::configure_pages;
///
/// let _app = App::new().configure(configure_pages);
/// ```
pub fn configure_pages(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(users::list_users)
        .service(users::new_user_form)
        .service(users::create_user)
        .service(users::edit_user_form)
        .service(users::update_user)
        .service(users::user_guestbooks)
        .service(users::user_detail)
        .service(users::delete_user)
        .service(guestbooks::list_guestbooks)
        .service(guestbooks::new_guestbook_form)
        .service(guestbooks::create_guestbook)
        .service(guestbooks::edit_guestbook_form)
        .service(guestbooks::update_guestbook)
        .service(guestbooks::guestbook_detail)
        .service(guestbooks::delete_guestbook);
}
