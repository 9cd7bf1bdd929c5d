//! HTTP API boundary for the organization/user directory.
//! Maps routes to `orgdir_core` services and tagged outcomes to status codes.

pub mod api;

pub use api::router;
pub use api::state::AppState;
