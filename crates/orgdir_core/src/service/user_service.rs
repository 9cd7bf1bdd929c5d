//! User use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::user::{User, UserDraft, UserId};
use crate::repo::user_repo::{UserListQuery, UserRepository};
use crate::repo::RepoResult;

/// Use-case service wrapper for user CRUD operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists users with optional organization filter, newest first.
    pub fn list(&self, query: &UserListQuery) -> RepoResult<Vec<User>> {
        self.repo.list_users(query)
    }

    /// Gets one user by id. `Ok(None)` when absent.
    pub fn get(&self, id: UserId) -> RepoResult<Option<User>> {
        self.repo.get_user(id)
    }

    /// Creates a new user and returns its generated id.
    ///
    /// The stored status label falls back to `active` when the draft omits it.
    pub fn create(&self, draft: &UserDraft) -> RepoResult<UserId> {
        self.repo.create_user(draft)
    }

    /// Overwrites all mutable fields of an existing user.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update(&self, id: UserId, draft: &UserDraft) -> RepoResult<()> {
        self.repo.update_user(id, draft)
    }

    /// Deletes a user by id.
    pub fn delete(&self, id: UserId) -> RepoResult<()> {
        self.repo.delete_user(id)
    }
}
