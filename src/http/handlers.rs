//! Project route handlers.
//!
//! Each handler translates one HTTP operation into a `ProjectStore` call and
//! lets `ApiError` pick the status for failures.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::store::{Project, StoreError};

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
    pub projects: usize,
}

/// `GET /projects`
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.store.get_all()?;
    Ok(Json(projects))
}

/// `GET /projects/{title}`
pub async fn get_project(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
) -> Result<Json<Project>, ApiError> {
    let Path(title) = title?;
    if title.is_empty() {
        return Err(ApiError::blank_title());
    }

    let project = state.store.get(&title)?;
    Ok(Json(project))
}

/// `POST /projects`
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<Project>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let Json(project) = payload?;

    let created = state.store.create(project)?;
    tracing::info!(
        title = %created.title,
        cost = created.cost,
        duration_days = created.duration_days,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /projects/{title}`
///
/// The path names the record. A body without a title is applied to it;
/// a body naming a different title is rejected since titles never change.
/// An unknown title is a client error on this route.
pub async fn update_project(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
    payload: Result<Json<Project>, JsonRejection>,
) -> Result<Json<Project>, ApiError> {
    let Path(title) = title?;
    let Json(mut project) = payload?;

    if title.is_empty() {
        return Err(ApiError::blank_title());
    }
    if project.has_blank_title() {
        project.title.clone_from(&title);
    } else if project.title != title {
        return Err(ApiError::BadRequest("project title cannot be changed".to_string()));
    }

    let updated = state.store.update(project).map_err(|err| match err {
        StoreError::NotFound(_) => ApiError::BadRequest(err.to_string()),
        other => other.into(),
    })?;
    tracing::info!(title = %updated.title, "Project updated");

    Ok(Json(updated))
}

/// `DELETE /projects/{title}`
pub async fn delete_project(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(title) = title?;
    state
        .store
        .delete(&title)
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    tracing::info!(title = %title, "Project deleted");

    Ok(StatusCode::OK)
}

/// `GET|PUT /projects/` with an empty title segment.
pub async fn blank_title() -> ApiError {
    ApiError::blank_title()
}

/// `DELETE /projects/` with an empty title segment. Nothing can match.
pub async fn delete_blank_title() -> StatusCode {
    StatusCode::OK
}

/// `GET /status`
pub async fn get_status(State(state): State<AppState>) -> Result<Json<SystemStatus>, ApiError> {
    let projects = state.store.count()?;
    Ok(Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        projects,
    }))
}

pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("method not allowed".to_string())
}
