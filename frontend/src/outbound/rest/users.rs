//! `UsersApi` over HTTP.

use async_trait::async_trait;
use reqwest::Method;

use super::RestResourceClient;
use crate::domain::ports::{Operation, ResourceError, UsersApi};
use crate::domain::{NewUser, UpdateUser, User, UserId, UserWithGuestbookCount, UserWithGuestbooks};

const USERS: &str = "users";

#[async_trait]
impl UsersApi for RestResourceClient {
    async fn list_users(&self) -> Result<Vec<UserWithGuestbookCount>, ResourceError> {
        self.get_json(Operation::ListUsers, self.endpoint(&[USERS]))
            .await
    }

    async fn top_user(&self) -> Result<Option<UserWithGuestbookCount>, ResourceError> {
        // The backend answers with a list of at most one row.
        let rows: Vec<UserWithGuestbookCount> = self
            .get_json(Operation::TopUser, self.endpoint(&[USERS, "most"]))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn get_user(&self, id: UserId) -> Result<UserWithGuestbooks, ResourceError> {
        let id = id.to_string();
        self.get_json(Operation::GetUser, self.endpoint(&[USERS, id.as_str()]))
            .await
    }

    async fn create_user(&self, payload: &NewUser) -> Result<User, ResourceError> {
        self.send_json(
            Operation::CreateUser,
            Method::POST,
            self.endpoint(&[USERS]),
            payload,
        )
        .await
    }

    async fn update_user(&self, id: UserId, payload: &UpdateUser) -> Result<User, ResourceError> {
        let id = id.to_string();
        self.send_json(
            Operation::UpdateUser,
            Method::PUT,
            self.endpoint(&[USERS, id.as_str()]),
            payload,
        )
        .await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ResourceError> {
        let id = id.to_string();
        self.delete(Operation::DeleteUser, self.endpoint(&[USERS, id.as_str()]))
            .await
    }
}
