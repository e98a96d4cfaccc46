//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod guestbooks_api;
mod resource_error;
mod users_api;

#[cfg(test)]
pub use guestbooks_api::MockGuestbooksApi;
pub use guestbooks_api::GuestbooksApi;
pub use resource_error::{Operation, ResourceError};
#[cfg(test)]
pub use users_api::MockUsersApi;
pub use users_api::UsersApi;
