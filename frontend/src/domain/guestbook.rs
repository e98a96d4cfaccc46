//! Guestbook entries and write payloads.

use serde::{Deserialize, Serialize};

use super::{GuestbookId, UserId};

/// A guestbook entry with its author's username denormalised onto it.
///
/// The per-user endpoints omit `username`; it decodes as an empty string
/// there because the owning user is already known to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub id: GuestbookId,
    pub message: String,
    #[serde(default)]
    pub username: String,
    pub user_id: UserId,
}

/// Backend acknowledgement of a guestbook write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookRecord {
    pub id: GuestbookId,
    pub message: String,
    pub user_id: UserId,
}

/// Validation errors returned by [`GuestbookPayload::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuestbookPayloadValidationError {
    #[error("Message is required")]
    EmptyMessage,
    #[error("A valid user is required")]
    MissingUser,
}

/// Body of `POST /guestbooks` and `PUT /guestbooks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestbookPayload {
    message: String,
    user_id: UserId,
}

/// Payload for creating a guestbook entry.
pub type NewGuestbookEntry = GuestbookPayload;
/// Payload for updating a guestbook entry.
pub type UpdateGuestbookEntry = GuestbookPayload;

impl GuestbookPayload {
    /// Build a payload from a submitted message and an already-resolved
    /// author id. A missing author is checked first.
    pub fn try_from_parts(
        message: &str,
        user_id: Option<UserId>,
    ) -> Result<Self, GuestbookPayloadValidationError> {
        let user_id = user_id.ok_or(GuestbookPayloadValidationError::MissingUser)?;
        if message.trim().is_empty() {
            return Err(GuestbookPayloadValidationError::EmptyMessage);
        }
        Ok(Self {
            message: message.to_owned(),
            user_id,
        })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}
