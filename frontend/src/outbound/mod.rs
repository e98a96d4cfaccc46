//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **rest**: reqwest client for the guestbook REST API.
//!
//! Adapters are thin translators between domain types and wire formats. They
//! contain no page logic.

pub mod rest;
