//! Browser-facing single session page.

mod handlers;

use axum::{routing::get, Router};

use super::sessions::SessionHandlers;

pub use handlers::{show, SESSION_NOT_FOUND};

/// Creates the session page router, nested at `/session`.
pub fn session_page_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", get(show))
        .route("/:id", get(show))
        .with_state(handlers)
}
