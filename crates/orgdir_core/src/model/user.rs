//! User domain model.
//!
//! # Responsibility
//! - Define the user read record (annotated with its organization name) and
//!   its write draft.
//! - Own the `status` defaulting rule.
//!
//! # Invariants
//! - `email` is globally unique across users (enforced by storage).
//! - `organization_id` must reference an existing organization at write time.
//! - `status` is a free-form label; only the default is prescribed.

use super::{require_text, ValidationError};
use crate::model::organization::OrganizationId;
use serde::{Deserialize, Serialize};

/// Stable row identifier for users.
pub type UserId = i64;

/// Default status label applied when a draft omits `status`.
pub const DEFAULT_STATUS: &str = "active";

/// Canonical user read record, joined with the owning organization's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub organization_id: OrganizationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: String,
    /// Unix epoch milliseconds, set once at insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed by every update.
    pub updated_at: i64,
    /// Display name of the referenced organization, resolved by a join.
    pub organization_name: Option<String>,
}

/// Caller-supplied field set for creating or fully updating a user.
///
/// Defaults ensure absent JSON keys deserialize to empty/zero values that are
/// then rejected by `validate()` when required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDraft {
    pub organization_id: OrganizationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl UserDraft {
    /// Checks the required-field contract: a positive `organization_id` plus
    /// non-empty `first_name`, `last_name` and `email`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.organization_id <= 0 {
            return Err(ValidationError::MissingField("organization_id"));
        }
        require_text(&self.first_name, "first_name")?;
        require_text(&self.last_name, "last_name")?;
        require_text(&self.email, "email")?;
        Ok(())
    }

    /// Status label to persist: the draft's label, or `active` when the draft
    /// omits it or supplies a blank string.
    pub fn resolved_status(&self) -> &str {
        match self.status.as_deref() {
            Some(value) if !value.trim().is_empty() => value,
            _ => DEFAULT_STATUS,
        }
    }
}
