//! Core domain logic for the organization/user directory.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::organization::{Organization, OrganizationDraft, OrganizationId};
pub use model::user::{User, UserDraft, UserId, DEFAULT_STATUS};
pub use model::ValidationError;
pub use repo::organization_repo::{OrganizationRepository, SqliteOrganizationRepository};
pub use repo::user_repo::{SqliteUserRepository, UserListQuery, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::organization_service::OrganizationService;
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
