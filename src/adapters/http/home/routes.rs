//! Routes for the session overview page.

use axum::{routing::get, Router};

use super::super::sessions::SessionHandlers;
use super::handlers::{create_session, index};

/// Creates the home router mounted at `/`.
///
/// # Routes
/// - `GET /` - Session summaries
/// - `POST /` - Create a session (form field `session_name`)
pub fn home_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", get(index).post(create_session))
        .with_state(handlers)
}
