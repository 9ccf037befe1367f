//! Department endpoints
//!
//! Create failures on a taken name answer 500, unlike the 400 that person
//! creation gives for a taken email.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{DbError, Department, DepartmentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::server::AppState;
use crate::models::{DepartmentName, Pagination, PaginationParams, ValidationError};

/// Create department request
#[derive(Debug, Deserialize)]
pub struct NewDepartment {
    pub name: String,
}

/// Partial department update
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentPatch {
    pub name: Option<String>,
}

impl DepartmentPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            DepartmentName::new(name)?;
        }
        Ok(())
    }

    pub fn apply_to(self, department: &mut Department) {
        if let Some(name) = self.name {
            department.name = name;
        }
    }
}

fn create_error(e: DbError) -> ApiError {
    match e {
        DbError::Duplicate { .. } => ApiError::integrity("Department already exists."),
        DbError::InvalidReference { .. } => ApiError::integrity("Invalid Department supplied."),
        other => other.into(),
    }
}

/// POST /department - create a department
async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewDepartment>,
) -> Result<Json<Department>, ApiError> {
    let name = DepartmentName::new(&req.name)?;
    let department = DepartmentRepo::new(&state.pool)
        .create(name)
        .await
        .map_err(create_error)?;

    Ok(Json(department))
}

/// GET /department/{id} - get a single department
async fn get_department(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Department>, ApiError> {
    let department = DepartmentRepo::new(&state.pool).get(id).await?;
    Ok(Json(department))
}

/// PUT /department/{id} - merge the supplied fields onto a department
async fn update_department(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    Json(patch): Json<DepartmentPatch>,
) -> Result<Json<Department>, ApiError> {
    patch.validate()?;

    let department = DepartmentRepo::new(&state.pool)
        .update(id, |department| patch.apply_to(department))
        .await
        .map_err(super::update_error)?;

    Ok(Json(department))
}

/// GET /departments - list departments with skip/limit
///
/// An empty page is a 404, including a skip past the last row.
async fn list_departments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let page = Pagination::from(params);
    let departments = DepartmentRepo::new(&state.pool).list(page).await?;

    if departments.is_empty() {
        return Err(ApiError::not_found("No Department exists."));
    }

    Ok(Json(departments))
}

/// Department routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/department", post(create_department))
        .route("/department/{id}", get(get_department).put(update_department))
        .route("/departments", get(list_departments))
}
