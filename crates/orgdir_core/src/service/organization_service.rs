//! Organization use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::organization::{Organization, OrganizationDraft, OrganizationId};
use crate::repo::organization_repo::OrganizationRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for organization CRUD operations.
pub struct OrganizationService<R: OrganizationRepository> {
    repo: R,
}

impl<R: OrganizationRepository> OrganizationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all organizations, newest first.
    pub fn list(&self) -> RepoResult<Vec<Organization>> {
        self.repo.list_organizations()
    }

    /// Gets one organization by id. `Ok(None)` when absent.
    pub fn get(&self, id: OrganizationId) -> RepoResult<Option<Organization>> {
        self.repo.get_organization(id)
    }

    /// Creates a new organization and returns its generated id.
    pub fn create(&self, draft: &OrganizationDraft) -> RepoResult<OrganizationId> {
        self.repo.create_organization(draft)
    }

    /// Overwrites all mutable fields of an existing organization.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update(&self, id: OrganizationId, draft: &OrganizationDraft) -> RepoResult<()> {
        self.repo.update_organization(id, draft)
    }

    /// Deletes an organization; its users are removed by cascade.
    pub fn delete(&self, id: OrganizationId) -> RepoResult<()> {
        self.repo.delete_organization(id)
    }
}
