//! HTTP routes for the sessions API.

use axum::{routing::get, Router};

use super::handlers::{get_session, SessionHandlers};

/// Creates the sessions API router, intended to be nested at `/api/sessions`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/:id", get(get_session))
        .with_state(handlers)
}
