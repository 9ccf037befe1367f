//! Route handlers organized by resource

pub mod health;
pub mod todos;
pub mod departments;
pub mod persons;

use crate::db::repos::DbError;
use crate::http::error::ApiError;

/// Error mapping shared by the update handlers.
///
/// Phrases a missing row differently from a read; everything else takes
/// the default mapping.
pub(crate) fn update_error(e: DbError) -> ApiError {
    match e {
        DbError::NotFound { resource, id } => {
            ApiError::not_found(format!("No {} found with id={}", resource, id))
        }
        other => other.into(),
    }
}
