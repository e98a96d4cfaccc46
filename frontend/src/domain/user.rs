//! User records and write payloads.
//!
//! Field names match the backend's JSON (snake_case). Read projections are
//! decoded as-is; write payloads are only constructed through
//! [`UserPayload::try_from_parts`] so a blank username or email never leaves
//! the process.

use serde::{Deserialize, Serialize};

use super::{GuestbookEntry, UserId};

/// A user as returned by create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// User row on the list page, with the number of guestbook entries the
/// backend counted for it.
///
/// The backend's aggregate query does not project `email`; it decodes as an
/// empty string in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithGuestbookCount {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub guestbook_count: i64,
}

/// User detail with its guestbook entries in backend order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithGuestbooks {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub guestbooks: Vec<GuestbookEntry>,
}

/// Validation errors returned by [`UserPayload::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserPayloadValidationError {
    /// Username or email was blank.
    #[error("Username and email are required")]
    MissingFields,
}

/// Body of `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    username: String,
    email: String,
}

/// Payload for creating a user.
pub type NewUser = UserPayload;
/// Payload for updating a user.
pub type UpdateUser = UserPayload;

impl UserPayload {
    /// Build a payload, requiring both fields to contain something other
    /// than whitespace. Values are sent exactly as submitted.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::{UserPayload, UserPayloadValidationError};
    ///
    /// let payload = UserPayload::try_from_parts("ada", "ada@example.com").expect("valid");
    /// assert_eq!(payload.username(), "ada");
    /// assert_eq!(
    ///     UserPayload::try_from_parts("ada", " "),
    ///     Err(UserPayloadValidationError::MissingFields)
    /// );
    /// ```
    pub fn try_from_parts(username: &str, email: &str) -> Result<Self, UserPayloadValidationError> {
        if username.trim().is_empty() || email.trim().is_empty() {
            return Err(UserPayloadValidationError::MissingFields);
        }
        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
