//! Router assembly for the directory API.
//!
//! # Responsibility
//! - Mount all resource routes under `/api`.
//! - Apply the CORS layer so a separate-origin frontend can consume the API.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

pub mod error;
pub mod organizations;
pub mod state;
pub mod users;

use state::AppState;

/// Builds the application router over the injected state.
pub fn router(state: AppState) -> Router {
    let organization_routes = Router::new()
        .route(
            "/",
            get(organizations::list_organizations).post(organizations::create_organization),
        )
        .route(
            "/{id}",
            get(organizations::get_organization)
                .put(organizations::update_organization)
                .delete(organizations::delete_organization),
        );

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/organizations", organization_routes)
        .nest("/api/users", user_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": orgdir_core::core_version(),
    }))
}
