//! Organization route handlers.
//!
//! Each handler acquires the store connection, builds a service over it,
//! runs one operation and serializes the outcome.

use super::error::ApiError;
use super::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::info;
use orgdir_core::{
    OrganizationDraft, OrganizationService, RepoError, SqliteOrganizationRepository,
};
use serde_json::{json, Value};

pub async fn list_organizations(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = organization_service(&conn)?;
    let organizations = service.list().map_err(map_error)?;
    Ok(Json(json!({ "organizations": organizations })))
}

pub async fn get_organization(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = organization_service(&conn)?;
    let organization = service
        .get(id)
        .map_err(map_error)?
        .ok_or_else(|| ApiError::NotFound("Organization not found".to_string()))?;
    Ok(Json(json!({ "organization": organization })))
}

pub async fn create_organization(
    State(state): State<AppState>,
    Json(draft): Json<OrganizationDraft>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let conn = state.conn()?;
    let service = organization_service(&conn)?;
    let id = service.create(&draft).map_err(map_error)?;

    info!("event=organization_create module=api status=ok id={id}");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Organization created successfully",
            "id": id,
        })),
    ))
}

pub async fn update_organization(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<OrganizationDraft>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = organization_service(&conn)?;
    service.update(id, &draft).map_err(map_error)?;

    info!("event=organization_update module=api status=ok id={id}");
    Ok(Json(json!({ "message": "Organization updated successfully" })))
}

pub async fn delete_organization(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn()?;
    let service = organization_service(&conn)?;
    service.delete(id).map_err(map_error)?;

    info!("event=organization_delete module=api status=ok id={id}");
    Ok(Json(json!({ "message": "Organization deleted successfully" })))
}

fn organization_service(
    conn: &rusqlite::Connection,
) -> Result<OrganizationService<SqliteOrganizationRepository<'_>>, ApiError> {
    let repo = SqliteOrganizationRepository::try_new(conn).map_err(map_error)?;
    Ok(OrganizationService::new(repo))
}

fn map_error(err: RepoError) -> ApiError {
    match err {
        RepoError::Validation(_) => {
            ApiError::Validation("Name and email are required".to_string())
        }
        RepoError::EmailTaken(_) => ApiError::Conflict("Email already exists".to_string()),
        RepoError::OrganizationNotFound(_) => {
            ApiError::NotFound("Organization not found".to_string())
        }
        other => ApiError::Internal(other.to_string()),
    }
}
