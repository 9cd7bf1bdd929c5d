//! Organization domain model.
//!
//! # Responsibility
//! - Define the organization read record and its write draft.
//!
//! # Invariants
//! - `email` is globally unique across organizations (enforced by storage).
//! - `name` and `email` must be non-empty on every write.

use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Stable row identifier for organizations.
pub type OrganizationId = i64;

/// Canonical organization read record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    /// Unix epoch milliseconds, set once at insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed by every update.
    pub updated_at: i64,
}

/// Caller-supplied field set for creating or fully updating an organization.
///
/// Every field defaults so a JSON body with absent keys deserializes into a
/// draft that then fails `validate()` on the missing required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

impl OrganizationDraft {
    /// Checks the required-field contract: `name` and `email` non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.name, "name")?;
        require_text(&self.email, "email")?;
        Ok(())
    }
}
