//! Request middleware.
//!
//! Purpose: lifecycle concerns shared by every page, currently request
//! tracing.

pub mod trace;

pub use trace::Trace;
