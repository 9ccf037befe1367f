//! Person endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{DbError, Person, PersonRepo};
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::patch::nullable;
use crate::http::server::AppState;
use crate::models::{Email, PersonName, ValidationError};

/// Create person request
#[derive(Debug, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub department_id: Option<i64>,
}

/// Partial person update
///
/// `department_id: null` detaches the person from their department.
#[derive(Debug, Default, Deserialize)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub department_id: Option<Option<i64>>,
}

impl PersonPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            PersonName::new(name)?;
        }
        if let Some(email) = &self.email {
            Email::new(email)?;
        }
        Ok(())
    }

    pub fn apply_to(self, person: &mut Person) {
        if let Some(name) = self.name {
            person.name = name;
        }
        if let Some(email) = self.email {
            person.email = email;
        }
        if let Some(department_id) = self.department_id {
            person.department_id = department_id;
        }
    }
}

fn missing_department(id: impl std::fmt::Display) -> ApiError {
    ApiError::bad_request(format!(
        "No Such department with department_id={} exists.",
        id
    ))
}

fn create_error(e: DbError, department_id: Option<i64>) -> ApiError {
    match e {
        DbError::MissingReference { id, .. } => missing_department(id),
        DbError::InvalidReference { .. } => match department_id {
            Some(id) => missing_department(id),
            None => ApiError::bad_request("Invalid reference supplied."),
        },
        DbError::Duplicate { value, .. } => {
            ApiError::bad_request(format!("Email id {} is already taken.", value))
        }
        other => other.into(),
    }
}

/// POST /person - create a person in an existing department
async fn create_person(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewPerson>,
) -> Result<Json<Person>, ApiError> {
    let name = PersonName::new(&req.name)?;
    let email = Email::new(&req.email)?;

    let person = PersonRepo::new(&state.pool)
        .create(name, email, req.department_id)
        .await
        .map_err(|e| create_error(e, req.department_id))?;

    Ok(Json(person))
}

/// GET /person/{id} - get a single person
async fn get_person(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Person>, ApiError> {
    let person = PersonRepo::new(&state.pool).get(id).await?;
    Ok(Json(person))
}

/// PUT /person/{id} - merge the supplied fields onto a person
///
/// The department is not re-checked.
async fn update_person(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    Json(patch): Json<PersonPatch>,
) -> Result<Json<Person>, ApiError> {
    patch.validate()?;

    let person = PersonRepo::new(&state.pool)
        .update(id, |person| patch.apply_to(person))
        .await
        .map_err(super::update_error)?;

    Ok(Json(person))
}

/// Person routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/person", post(create_person))
        .route("/person/{id}", get(get_person).put(update_person))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn stored() -> Person {
        Person {
            id: 5,
            name: "Barbara".into(),
            email: "barbara@example.com".into(),
            department_id: Some(2),
        }
    }

    #[test]
    fn duplicate_email_is_400() {
        let err = create_error(
            DbError::Duplicate {
                resource: "Person",
                value: "barbara@example.com".into(),
            },
            None,
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            err,
            ApiError::BadRequest { ref message } if message == "Email id barbara@example.com is already taken."
        ));
    }

    #[test]
    fn missing_department_is_400() {
        let err = create_error(
            DbError::MissingReference {
                resource: "Department",
                id: "12".into(),
            },
            Some(12),
        );
        assert!(matches!(
            err,
            ApiError::BadRequest { ref message } if message == "No Such department with department_id=12 exists."
        ));
    }

    #[test]
    fn absent_department_is_untouched_null_clears() {
        let mut person = stored();
        let patch: PersonPatch = serde_json::from_str(r#"{"name": "Barbara L."}"#).unwrap();
        patch.apply_to(&mut person);
        assert_eq!(person.name, "Barbara L.");
        assert_eq!(person.department_id, Some(2));

        let patch: PersonPatch = serde_json::from_str(r#"{"department_id": null}"#).unwrap();
        patch.apply_to(&mut person);
        assert_eq!(person.department_id, None);
    }

    #[test]
    fn patch_rejects_bad_email() {
        let patch = PersonPatch {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(ValidationError::InvalidFormat { field: "email", .. })
        ));
    }
}
