//! Driven port for the backend's `/users` resource.
//!
//! Page controllers depend on this trait only; production wires the
//! reqwest adapter in `outbound::rest`, tests use the mockall double.

use async_trait::async_trait;

use super::ResourceError;
use crate::domain::{NewUser, UpdateUser, User, UserId, UserWithGuestbookCount, UserWithGuestbooks};

/// User operations offered by the guestbook API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /users`: every user with its guestbook entry count.
    async fn list_users(&self) -> Result<Vec<UserWithGuestbookCount>, ResourceError>;

    /// `GET /users/most`: the user with the most entries, if any user exists.
    async fn top_user(&self) -> Result<Option<UserWithGuestbookCount>, ResourceError>;

    /// `GET /users/{id}`: one user with its entries embedded.
    async fn get_user(&self, id: UserId) -> Result<UserWithGuestbooks, ResourceError>;

    /// `POST /users`.
    async fn create_user(&self, payload: &NewUser) -> Result<User, ResourceError>;

    /// `PUT /users/{id}`.
    async fn update_user(&self, id: UserId, payload: &UpdateUser) -> Result<User, ResourceError>;

    /// `DELETE /users/{id}`. The backend cascades the delete to the user's
    /// guestbook entries; a partial cascade surfaces as an opaque rejection.
    async fn delete_user(&self, id: UserId) -> Result<(), ResourceError>;
}
