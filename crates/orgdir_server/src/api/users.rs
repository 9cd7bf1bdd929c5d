//! User route handlers.
//!
//! Same shape as the organization handlers, plus the optional
//! `organization_id` list filter.

use super::error::ApiError;
use super::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use log::info;
use orgdir_core::{RepoError, SqliteUserRepository, UserDraft, UserListQuery, UserService};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub organization_id: Option<i64>,
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = user_service(&conn)?;
    let users = service
        .list(&UserListQuery {
            organization_id: params.organization_id,
        })
        .map_err(map_error)?;
    Ok(Json(json!({ "users": users })))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = user_service(&conn)?;
    let user = service
        .get(id)
        .map_err(map_error)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(json!({ "user": user })))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let conn = state.conn()?;
    let service = user_service(&conn)?;
    let id = service.create(&draft).map_err(map_error)?;

    info!("event=user_create module=api status=ok id={id}");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "id": id,
        })),
    ))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = user_service(&conn)?;
    service.update(id, &draft).map_err(map_error)?;

    info!("event=user_update module=api status=ok id={id}");
    Ok(Json(json!({ "message": "User updated successfully" })))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = user_service(&conn)?;
    service.delete(id).map_err(map_error)?;

    info!("event=user_delete module=api status=ok id={id}");
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

fn user_service(
    conn: &rusqlite::Connection,
) -> Result<UserService<SqliteUserRepository<'_>>, ApiError> {
    let repo = SqliteUserRepository::try_new(conn).map_err(map_error)?;
    Ok(UserService::new(repo))
}

fn map_error(err: RepoError) -> ApiError {
    match err {
        RepoError::Validation(_) => ApiError::Validation(
            "Organization ID, first name, last name, and email are required".to_string(),
        ),
        RepoError::EmailTaken(_) => ApiError::Conflict("Email already exists".to_string()),
        RepoError::UserNotFound(_) => ApiError::NotFound("User not found".to_string()),
        RepoError::OrganizationMissing(_) => {
            ApiError::Reference("Invalid organization ID".to_string())
        }
        other => ApiError::Internal(other.to_string()),
    }
}
