//! Error channel shared by every Resource Client operation.
//!
//! Reads, writes and deletes all return `Result<_, ResourceError>`. Each
//! variant carries the [`Operation`] that failed so pages can show the fixed
//! per-operation message ("Failed to fetch users") whatever went wrong
//! underneath.

use std::fmt;

use super::define_port_error;

/// Resource Client operation, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListUsers,
    TopUser,
    GetUser,
    CreateUser,
    UpdateUser,
    DeleteUser,
    ListGuestbooks,
    GetGuestbook,
    ListGuestbooksForUser,
    CreateGuestbookEntry,
    UpdateGuestbookEntry,
    DeleteGuestbookEntry,
}

impl Operation {
    /// Human-readable failure message shown to the browser.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::ListUsers => "Failed to fetch users",
            Self::TopUser => "Failed to fetch the most active user",
            Self::GetUser => "Failed to fetch user details",
            Self::CreateUser => "Failed to create user",
            Self::UpdateUser => "Failed to update user",
            Self::DeleteUser => "Failed to delete user",
            Self::ListGuestbooks | Self::ListGuestbooksForUser => "Failed to fetch guestbooks",
            Self::GetGuestbook => "Failed to fetch guestbook",
            Self::CreateGuestbookEntry => "Failed to create guestbook",
            Self::UpdateGuestbookEntry => "Failed to update guestbook",
            Self::DeleteGuestbookEntry => "Failed to delete guestbook entry",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

define_port_error! {
    /// Errors surfaced by the Resource Client.
    pub enum ResourceError {
        /// The backend answered 404 for the addressed resource.
        NotFound { operation: Operation } =>
            "{operation}: not found",
        /// The backend answered with any other non-success status.
        Rejected { operation: Operation, status: u16, detail: String } =>
            "{operation}: backend responded with status {status}",
        /// No response was received (connect failure, timeout, broken body).
        Unavailable { operation: Operation, message: String } =>
            "{operation}: backend unavailable: {message}",
        /// A success response carried a body that did not decode.
        Decode { operation: Operation, message: String } =>
            "{operation}: invalid response body: {message}",
    }
}

impl ResourceError {
    /// Operation that produced this error.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::NotFound { operation }
            | Self::Rejected { operation, .. }
            | Self::Unavailable { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// Message suitable for an inline form error or an error page heading.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.operation().failure_message()
    }

    /// Whether the backend reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Return whether retrying this error is expected to help.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable { .. } => true,
            Self::Rejected { status, .. } => *status >= 500 || matches!(*status, 408 | 429),
            Self::NotFound { .. } | Self::Decode { .. } => false,
        }
    }
}
