//! Shared request state for the API boundary.
//!
//! # Responsibility
//! - Own the single store connection injected at startup.
//!
//! # Invariants
//! - Handlers hold the connection lock only for the duration of one
//!   statement; no operation spans multiple requests.

use super::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// Application state constructed in `main` and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps an opened, migrated connection for router injection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquires the store connection for one operation.
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.conn
            .lock()
            .map_err(|_| ApiError::Internal("store connection mutex poisoned".to_string()))
    }
}
