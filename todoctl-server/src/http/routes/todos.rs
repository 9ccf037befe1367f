//! Todo endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::db::repos::{Todo, TodoDraft, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::patch::nullable;
use crate::http::server::AppState;
use crate::models::{TodoDescription, TodoTitle, ValidationError};

/// Create todo request
#[derive(Debug, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_on: Option<DateTime<Utc>>,
}

impl NewTodo {
    fn into_draft(self) -> Result<TodoDraft, ValidationError> {
        let mut draft = TodoDraft::new(
            TodoTitle::new(&self.title)?,
            TodoDescription::new(&self.description)?,
        );
        draft.completed = self.completed;
        draft.completed_on = self.completed_on;
        if let Some(created_at) = self.created_at {
            draft.created_at = created_at;
        }
        Ok(draft)
    }
}

/// Partial todo update; absent fields are left untouched
#[derive(Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub completed_on: Option<Option<DateTime<Utc>>>,
}

impl TodoPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            TodoTitle::new(title)?;
        }
        if let Some(description) = &self.description {
            TodoDescription::new(description)?;
        }
        Ok(())
    }

    /// Overwrite the fields present in this patch.
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(created_at) = self.created_at {
            todo.created_at = created_at;
        }
        if let Some(completed_on) = self.completed_on {
            todo.completed_on = completed_on;
        }
    }
}

/// POST /todo - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTodo>,
) -> Result<Json<Todo>, ApiError> {
    let draft = req.into_draft()?;
    let todo = TodoRepo::new(&state.pool).create(draft).await?;
    Ok(Json(todo))
}

/// GET /todo/{id} - get a single todo
async fn get_todo(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).get(id).await?;
    Ok(Json(todo))
}

/// PUT /todo/{id} - merge the supplied fields onto a todo
async fn update_todo(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    patch.validate()?;

    let todo = TodoRepo::new(&state.pool)
        .update(id, |todo| patch.apply_to(todo))
        .await
        .map_err(super::update_error)?;

    Ok(Json(todo))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todo", post(create_todo))
        .route("/todo/{id}", get(get_todo).put(update_todo))
}
