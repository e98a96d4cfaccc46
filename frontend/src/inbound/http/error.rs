//! Error boundary for page controllers.
//!
//! Read and delete handlers return [`PageResult`]; a failed Resource Client
//! call bubbles up as a [`PageError`] and actix renders it through
//! [`ResponseError`] as an HTML page. The page carries the request's trace id
//! and whether retrying may help.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use minijinja::context;
use tracing::warn;

use super::views;
use crate::domain::TraceId;
use crate::domain::ports::{Operation, ResourceError};

/// Convenient result alias for page handlers.
pub type PageResult<T> = Result<T, PageError>;

/// Status a page should answer with when a client call fails.
pub(crate) fn status_for(error: &ResourceError) -> StatusCode {
    match error {
        ResourceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ResourceError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        ResourceError::Rejected { .. } | ResourceError::Decode { .. } => StatusCode::BAD_GATEWAY,
    }
}

const fn missing_subject(operation: Operation) -> &'static str {
    match operation {
        Operation::ListUsers
        | Operation::TopUser
        | Operation::GetUser
        | Operation::CreateUser
        | Operation::UpdateUser
        | Operation::DeleteUser
        | Operation::ListGuestbooksForUser => "User not found",
        Operation::ListGuestbooks
        | Operation::GetGuestbook
        | Operation::CreateGuestbookEntry
        | Operation::UpdateGuestbookEntry
        | Operation::DeleteGuestbookEntry => "Guestbook not found",
    }
}

/// "Not found" page, used both for unparseable path ids and backend 404s.
pub fn not_found_page(message: &str) -> HttpResponse {
    views::page(
        StatusCode::NOT_FOUND,
        "not_found.html",
        context! { message },
    )
}

/// Failure raised from a read or delete handler.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] ResourceError);

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        if let ResourceError::NotFound { operation } = &self.0 {
            return not_found_page(missing_subject(*operation));
        }

        let trace_id = TraceId::current().map(|id| id.to_string());
        warn!(
            error = %self.0,
            trace_id = trace_id.as_deref().unwrap_or_default(),
            "page request failed"
        );
        views::page(
            self.status_code(),
            "error.html",
            context! {
                message => self.0.user_message(),
                retryable => self.0.is_retryable(),
                trace_id,
            },
        )
    }
}
