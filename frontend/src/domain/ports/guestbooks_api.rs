//! Driven port for the backend's `/guestbooks` resource.

use async_trait::async_trait;

use super::ResourceError;
use crate::domain::{
    GuestbookEntry, GuestbookId, GuestbookRecord, NewGuestbookEntry, UpdateGuestbookEntry, UserId,
};

/// Guestbook entry operations offered by the guestbook API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestbooksApi: Send + Sync {
    /// `GET /guestbooks`: every entry with its author's username.
    async fn list_guestbooks(&self) -> Result<Vec<GuestbookEntry>, ResourceError>;

    /// `GET /guestbooks/{id}`.
    async fn get_guestbook(&self, id: GuestbookId) -> Result<GuestbookEntry, ResourceError>;

    /// `GET /users/{id}/guestbooks`: entries owned by one user, in backend
    /// order.
    async fn list_guestbooks_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<GuestbookEntry>, ResourceError>;

    /// `POST /guestbooks`.
    async fn create_guestbook_entry(
        &self,
        payload: &NewGuestbookEntry,
    ) -> Result<GuestbookRecord, ResourceError>;

    /// `PUT /guestbooks/{id}`.
    async fn update_guestbook_entry(
        &self,
        id: GuestbookId,
        payload: &UpdateGuestbookEntry,
    ) -> Result<GuestbookRecord, ResourceError>;

    /// `DELETE /guestbooks/{id}`.
    async fn delete_guestbook_entry(&self, id: GuestbookId) -> Result<(), ResourceError>;
}
