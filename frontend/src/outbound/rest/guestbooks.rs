//! `GuestbooksApi` over HTTP.

use async_trait::async_trait;
use reqwest::Method;

use super::RestResourceClient;
use crate::domain::ports::{GuestbooksApi, Operation, ResourceError};
use crate::domain::{
    GuestbookEntry, GuestbookId, GuestbookRecord, NewGuestbookEntry, UpdateGuestbookEntry, UserId,
};

const GUESTBOOKS: &str = "guestbooks";

#[async_trait]
impl GuestbooksApi for RestResourceClient {
    async fn list_guestbooks(&self) -> Result<Vec<GuestbookEntry>, ResourceError> {
        self.get_json(Operation::ListGuestbooks, self.endpoint(&[GUESTBOOKS]))
            .await
    }

    async fn get_guestbook(&self, id: GuestbookId) -> Result<GuestbookEntry, ResourceError> {
        let id = id.to_string();
        self.get_json(Operation::GetGuestbook, self.endpoint(&[GUESTBOOKS, id.as_str()]))
            .await
    }

    async fn list_guestbooks_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<GuestbookEntry>, ResourceError> {
        let user_id = user_id.to_string();
        self.get_json(
            Operation::ListGuestbooksForUser,
            self.endpoint(&["users", user_id.as_str(), GUESTBOOKS]),
        )
        .await
    }

    async fn create_guestbook_entry(
        &self,
        payload: &NewGuestbookEntry,
    ) -> Result<GuestbookRecord, ResourceError> {
        self.send_json(
            Operation::CreateGuestbookEntry,
            Method::POST,
            self.endpoint(&[GUESTBOOKS]),
            payload,
        )
        .await
    }

    async fn update_guestbook_entry(
        &self,
        id: GuestbookId,
        payload: &UpdateGuestbookEntry,
    ) -> Result<GuestbookRecord, ResourceError> {
        let id = id.to_string();
        self.send_json(
            Operation::UpdateGuestbookEntry,
            Method::PUT,
            self.endpoint(&[GUESTBOOKS, id.as_str()]),
            payload,
        )
        .await
    }

    async fn delete_guestbook_entry(&self, id: GuestbookId) -> Result<(), ResourceError> {
        let id = id.to_string();
        self.delete(Operation::DeleteGuestbookEntry, self.endpoint(&[GUESTBOOKS, id.as_str()]))
            .await
    }
}
