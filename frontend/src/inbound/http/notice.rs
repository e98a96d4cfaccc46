//! Confirmation notices carried across post/redirect/get.
//!
//! A successful write redirects to `<page>?notice=<kind>`; the follow-up page
//! looks the kind up here and shows the matching green message. Unknown
//! kinds are ignored rather than rejected so a hand-edited URL still renders.

use serde::Deserialize;

/// Outcome of a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    UserCreated,
    UserUpdated,
    UserDeleted,
    GuestbookCreated,
    GuestbookUpdated,
    GuestbookDeleted,
}

impl Notice {
    const ALL: [Self; 6] = [
        Self::UserCreated,
        Self::UserUpdated,
        Self::UserDeleted,
        Self::GuestbookCreated,
        Self::GuestbookUpdated,
        Self::GuestbookDeleted,
    ];

    /// Query-string value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserCreated => "user_created",
            Self::UserUpdated => "user_updated",
            Self::UserDeleted => "user_deleted",
            Self::GuestbookCreated => "guestbook_created",
            Self::GuestbookUpdated => "guestbook_updated",
            Self::GuestbookDeleted => "guestbook_deleted",
        }
    }

    /// Confirmation shown to the browser.
    pub const fn message(self) -> &'static str {
        match self {
            Self::UserCreated => "User created",
            Self::UserUpdated => "User updated",
            Self::UserDeleted => "User deleted",
            Self::GuestbookCreated => "Guestbook entry created",
            Self::GuestbookUpdated => "Guestbook entry updated",
            Self::GuestbookDeleted => "Guestbook entry deleted",
        }
    }

    /// Append this notice to a page path.
    pub fn location(self, path: &str) -> String {
        format!("{path}?notice={}", self.as_str())
    }

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|notice| notice.as_str() == raw)
    }
}

/// `?notice=` query accepted by every read page.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    #[serde(default)]
    notice: Option<String>,
}

impl NoticeQuery {
    /// Confirmation message for the carried notice, if it is a known kind.
    pub fn message(&self) -> Option<&'static str> {
        self.notice
            .as_deref()
            .and_then(Notice::parse)
            .map(Notice::message)
    }
}
