//! Domain primitives shared by the page controllers and the Resource Client.
//!
//! Purpose: define the typed records exchanged with the guestbook API and the
//! ports (traits) the inbound HTTP adapter calls. Nothing in here knows about
//! actix or reqwest.
//!
//! Public surface:
//! - `User`, `UserWithGuestbookCount`, `UserWithGuestbooks`, `UserPayload`.
//! - `GuestbookEntry`, `GuestbookRecord`, `GuestbookPayload`.
//! - `UserId`, `GuestbookId`: positive integer identifiers.
//! - `TraceId`: request correlation id in task-local storage.

pub mod guestbook;
pub mod ids;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::guestbook::{
    GuestbookEntry, GuestbookPayload, GuestbookPayloadValidationError, GuestbookRecord,
    NewGuestbookEntry, UpdateGuestbookEntry,
};
pub use self::ids::{GuestbookId, IdValidationError, UserId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    NewUser, UpdateUser, User, UserPayload, UserPayloadValidationError, UserWithGuestbookCount,
    UserWithGuestbooks,
};
