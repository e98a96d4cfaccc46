//! Form bodies submitted by the browser and the inline errors shown on them.
//!
//! Missing text fields deserialize to an empty string so presence checks live
//! in the domain payload constructors. `user_id` stays raw text: a missing or
//! unparseable value is a validation failure, never a 400 from the extractor.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::ports::ResourceError;
use crate::domain::{GuestbookPayloadValidationError, UserId, UserPayloadValidationError};

/// `username` / `email` form fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// `message` / `user_id` form fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GuestbookForm {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: String,
}

impl GuestbookForm {
    /// Selected author, when the field holds a positive integer.
    pub fn author(&self) -> Option<UserId> {
        self.user_id.parse().ok()
    }
}

/// Red inline error rendered on a form, with the status of the re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    status: StatusCode,
    message: String,
}

impl FormError {
    /// Missing or malformed input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    /// Path identifier of an update route did not parse.
    pub fn invalid_id(resource: &str) -> Self {
        Self::validation(format!("Invalid {resource} ID"))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<UserPayloadValidationError> for FormError {
    fn from(err: UserPayloadValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<GuestbookPayloadValidationError> for FormError {
    fn from(err: GuestbookPayloadValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<&ResourceError> for FormError {
    fn from(err: &ResourceError) -> Self {
        Self {
            status: super::error::status_for(err),
            message: err.user_message().to_owned(),
        }
    }
}
