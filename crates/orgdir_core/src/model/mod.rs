//! Domain model for the organization/user directory.
//!
//! # Responsibility
//! - Define canonical read records and write drafts for both entities.
//! - Enforce the required-field contract before anything reaches SQL.
//!
//! # Invariants
//! - `id`, `created_at` and `updated_at` exist only on read records; they are
//!   generated by the store, never supplied by callers.
//! - Draft `validate()` must pass before a repository mutates a row.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod organization;
pub mod user;

/// Required-field violation detected on a write draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The named field is absent, empty, or zero.
    MissingField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "required field `{field}` is missing or empty")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
