use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::envelope::{ErrorBody, ListEnvelope, MutationEnvelope};
use contracts::shared::validation::Validate;
use serde::Serialize;

/// Error answer of a collection handler, always a `{message}` body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    #[error("{0} tidak ditemukan")]
    NotFound(&'static str),
    #[error("Validation failed")]
    Invalid(Vec<&'static str>),
    /// Body that is not JSON or does not match the payload shape
    #[error("Validation failed")]
    Malformed(String),
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        ApiFailure::Malformed(rejection.body_text())
    }
}

/// JSON request body whose rejection answers with the `{message}` error body
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiFailure))]
pub struct Payload<T>(pub T);

impl ApiFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiFailure::NotFound(_) => StatusCode::NOT_FOUND,
            ApiFailure::Invalid(_) | ApiFailure::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match &self {
            ApiFailure::Invalid(fields) => {
                tracing::debug!("Rejected payload, missing: {}", fields.join(", "))
            }
            ApiFailure::Malformed(reason) => tracing::debug!("Rejected payload: {}", reason),
            ApiFailure::NotFound(_) => {}
        }
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type Listed<T> = Json<ListEnvelope<T>>;
pub type Mutated<T> = (StatusCode, Json<MutationEnvelope<T>>);

pub fn listed<T>(rows: Vec<T>) -> Listed<T> {
    Json(ListEnvelope::new(rows))
}

pub fn created<T: Serialize>(label: &str, row: T) -> Mutated<T> {
    (
        StatusCode::CREATED,
        Json(MutationEnvelope::new(format!("{label} berhasil ditambahkan"), Some(row))),
    )
}

pub fn updated<T: Serialize>(label: &str, row: T) -> Mutated<T> {
    (
        StatusCode::OK,
        Json(MutationEnvelope::new(format!("{label} berhasil diupdate"), Some(row))),
    )
}

pub fn deleted<T: Serialize>(label: &str) -> Mutated<T> {
    (
        StatusCode::OK,
        Json(MutationEnvelope::new(format!("{label} berhasil dihapus"), None)),
    )
}

/// 422 when the payload misses required fields
pub fn validate(payload: &impl Validate) -> Result<(), ApiFailure> {
    let missing = payload.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiFailure::Invalid(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_status_and_message() {
        let not_found = ApiFailure::NotFound("Room");
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Room tidak ditemukan");

        let invalid = ApiFailure::Invalid(vec!["name"]);
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(invalid.to_string(), "Validation failed");

        let malformed = ApiFailure::Malformed("missing field `name`".into());
        assert_eq!(malformed.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(malformed.to_string(), "Validation failed");
    }
}
