//! HTTP adapters - REST API and browser-facing endpoints.
//!
//! Each area has its own adapter for endpoint exposure:
//! - `home` - session overview and create-session form (`/`)
//! - `session_page` - single session page (`/session`)
//! - `sessions` - session API (`/api/sessions`)
//! - `ideas` - ideas API (`/api/ideas`)

pub mod error;
pub mod home;
pub mod ideas;
pub mod outcome;
pub mod session_page;
pub mod sessions;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    AddIdeaHandler, CreateSessionHandler, GetSessionHandler, ListIdeasHandler,
    ListSessionsHandler,
};
use crate::config::{FeatureFlags, ServerConfig};
use crate::domain::foundation::{SessionId, ValidationError, ValidationErrors};
use crate::ports::SessionRepository;

// Re-export key types for convenience
pub use error::ErrorResponse;
pub use home::home_routes;
pub use ideas::{idea_routes, IdeaHandlers};
pub use outcome::{Outcome, INTERNAL_ERROR_MESSAGE};
pub use session_page::session_page_routes;
pub use sessions::{session_routes, SessionHandlers};

/// Builds every route over one repository, without middleware.
pub fn app_router(repository: Arc<dyn SessionRepository>, features: &FeatureFlags) -> Router {
    let session_handlers = SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(repository.clone())),
        Arc::new(GetSessionHandler::new(repository.clone())),
        Arc::new(ListSessionsHandler::new(repository.clone())),
    )
    .with_verbose_errors(features.verbose_errors);
    let idea_handlers = IdeaHandlers::new(
        Arc::new(AddIdeaHandler::new(repository.clone())),
        Arc::new(ListIdeasHandler::new(repository)),
    )
    .with_verbose_errors(features.verbose_errors);

    Router::new()
        .merge(home_routes(session_handlers.clone()))
        .nest("/session", session_page_routes(session_handlers.clone()))
        .nest("/api/sessions", session_routes(session_handlers))
        .nest("/api/ideas", idea_routes(idea_handlers))
        .route("/health", get(health))
}

/// Wraps a router with tracing, request ids, timeout and CORS.
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(server.request_timeout()))
            .layer(cors_layer(server)),
    )
}

/// Configured origins win; otherwise permissive outside production.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    } else if server.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Parses a path segment as a session id.
pub(crate) fn parse_session_id(raw: &str) -> Result<SessionId, ValidationErrors> {
    raw.parse::<SessionId>().map_err(|_| {
        ValidationErrors::from(ValidationError::invalid_format(
            "session_id",
            format!("'{}' is not a valid session id", raw),
        ))
    })
}
