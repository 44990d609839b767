//! HTTP routes for the ideas API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create, create_at_location, for_session, IdeaHandlers};

/// Creates the ideas router, intended to be nested at `/api/ideas`.
///
/// # Routes
/// - `GET /forsession/:session_id` - Ideas of a session
/// - `POST /create` - Append idea, 200 with the session
/// - `POST /` - Append idea, 201 with the session location
pub fn idea_routes(handlers: IdeaHandlers) -> Router {
    Router::new()
        .route("/", post(create_at_location))
        .route("/create", post(create))
        .route("/forsession/:session_id", get(for_session))
        .with_state(handlers)
}
