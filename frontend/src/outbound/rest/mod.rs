//! REST outbound adapter.
//!
//! One reqwest-backed client implements both the `UsersApi` and the
//! `GuestbooksApi` ports against the configured guestbook API.

mod client;
mod guestbooks;
mod users;

pub use client::{RestClientBuildError, RestResourceClient};
