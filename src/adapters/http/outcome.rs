//! Transport-agnostic handler outcomes and their HTTP mapping.
//!
//! Handlers return an [`Outcome`] instead of a raw response so tests can
//! assert on the variant and its payload directly. The `IntoResponse` impl
//! is the single place where outcomes become status codes and headers.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{SessionId, ValidationErrors};
use crate::domain::session::SessionError;

use super::error::ErrorResponse;

/// Body message for 500s when verbose errors are off.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Result of a controller action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 200 with a JSON body.
    Ok(T),
    /// 400 with the field → messages map.
    BadRequest(ValidationErrors),
    /// 404 with the requested id as the body.
    NotFound(SessionId),
    /// 201 with a `Location` header and a JSON body.
    Created { location: String, body: T },
    /// 302 to another page.
    Redirect(String),
    /// 200 with a plain-text body.
    Content(String),
    /// 500 for failures outside the caller's control.
    Internal(ErrorResponse),
}

impl<T> Outcome<T> {
    /// Maps success bodies, leaving every other variant untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(body) => Outcome::Ok(f(body)),
            Outcome::Created { location, body } => Outcome::Created {
                location,
                body: f(body),
            },
            Outcome::BadRequest(errors) => Outcome::BadRequest(errors),
            Outcome::NotFound(id) => Outcome::NotFound(id),
            Outcome::Redirect(target) => Outcome::Redirect(target),
            Outcome::Content(text) => Outcome::Content(text),
            Outcome::Internal(error) => Outcome::Internal(error),
        }
    }

    /// Wraps a handler result, turning errors into their outcome.
    pub fn from_result(result: Result<T, SessionError>) -> Self {
        match result {
            Ok(body) => Outcome::Ok(body),
            Err(e) => e.into(),
        }
    }

    /// Replaces the 500 message with a generic one unless `verbose` is set.
    pub fn redact(self, verbose: bool) -> Self {
        match self {
            Outcome::Internal(_) if !verbose => {
                Outcome::Internal(ErrorResponse::internal(INTERNAL_ERROR_MESSAGE))
            }
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Ok(_) | Outcome::Content(_) => StatusCode::OK,
            Outcome::BadRequest(_) => StatusCode::BAD_REQUEST,
            Outcome::NotFound(_) => StatusCode::NOT_FOUND,
            Outcome::Created { .. } => StatusCode::CREATED,
            Outcome::Redirect(_) => StatusCode::FOUND,
            Outcome::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T> From<SessionError> for Outcome<T> {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::NotFound(id) => {
                tracing::warn!(session_id = %id, "Session not found");
                Outcome::NotFound(id)
            }
            SessionError::ValidationFailed { field, message } => {
                let mut errors = ValidationErrors::new();
                errors.add(field, message);
                Outcome::BadRequest(errors)
            }
            SessionError::Infrastructure(msg) => {
                tracing::error!("Internal error: {}", msg);
                Outcome::Internal(ErrorResponse::internal(msg))
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Outcome::Ok(body) => (status, Json(body)).into_response(),
            Outcome::BadRequest(errors) => (status, Json(errors)).into_response(),
            Outcome::NotFound(id) => (status, Json(id)).into_response(),
            Outcome::Created { location, body } => {
                (status, [(header::LOCATION, location)], Json(body)).into_response()
            }
            Outcome::Redirect(target) => (status, [(header::LOCATION, target)]).into_response(),
            Outcome::Content(text) => (status, text).into_response(),
            Outcome::Internal(error) => (status, Json(error)).into_response(),
        }
    }
}
