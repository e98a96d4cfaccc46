//! Typed record identifiers.
//!
//! The backend keys users and guestbook entries with positive 32-bit
//! integers. Path segments and form fields are parsed once at the edge;
//! anything that does not parse is treated as an absent identifier.

use serde::{Deserialize, Serialize};

/// Validation errors returned when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    /// Input was empty once trimmed.
    #[error("identifier must not be empty")]
    Empty,
    /// Input was not a positive base-10 integer.
    #[error("identifier must be a positive integer")]
    NotPositive,
}

fn parse_positive(raw: &str) -> Result<i32, IdValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdValidationError::Empty);
    }
    match trimmed.parse::<i32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(IdValidationError::NotPositive),
    }
}

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw identifier, rejecting zero and negative values.
            pub fn new(raw: i32) -> Result<Self, IdValidationError> {
                if raw > 0 {
                    Ok(Self(raw))
                } else {
                    Err(IdValidationError::NotPositive)
                }
            }

            /// Raw integer value as used on the wire.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_positive(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_record_id! {
    /// Identifier of a user record.
    UserId
}

define_record_id! {
    /// Identifier of a guestbook entry.
    GuestbookId
}
