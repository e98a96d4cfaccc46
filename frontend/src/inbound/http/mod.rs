//! HTTP inbound adapter serving the guestbook pages.

pub mod cache_control;
pub mod error;
pub mod forms;
pub mod guestbooks;
pub mod health;
pub mod notice;
pub mod routes;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;

pub use error::{PageError, PageResult};
pub use routes::configure_pages;
