//! HTTP handlers for the ideas API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::application::handlers::idea::{AddIdeaHandler, ListIdeasHandler, ListIdeasQuery};
use crate::domain::session::{BrainstormSession, IdeaSummary};

use super::super::outcome::Outcome;
use super::super::parse_session_id;
use super::dto::{rejection_errors, NewIdeaRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct IdeaHandlers {
    add_handler: Arc<AddIdeaHandler>,
    list_handler: Arc<ListIdeasHandler>,
    verbose_errors: bool,
}

impl IdeaHandlers {
    pub fn new(add_handler: Arc<AddIdeaHandler>, list_handler: Arc<ListIdeasHandler>) -> Self {
        Self {
            add_handler,
            list_handler,
            verbose_errors: false,
        }
    }

    /// Show repository failure detail in 500 bodies.
    pub fn with_verbose_errors(mut self, verbose_errors: bool) -> Self {
        self.verbose_errors = verbose_errors;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ideas/forsession/:session_id - List the ideas of a session
pub async fn for_session(
    State(handlers): State<IdeaHandlers>,
    Path(session_id): Path<String>,
) -> Outcome<Vec<IdeaSummary>> {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(errors) => return Outcome::BadRequest(errors),
    };

    Outcome::from_result(
        handlers
            .list_handler
            .handle(ListIdeasQuery { session_id })
            .await,
    )
    .redact(handlers.verbose_errors)
}

/// POST /api/ideas/create - Append an idea, answering with the updated session
pub async fn create(
    State(handlers): State<IdeaHandlers>,
    payload: Result<Json<NewIdeaRequest>, JsonRejection>,
) -> Outcome<BrainstormSession> {
    let cmd = match payload {
        Ok(Json(req)) => match req.validate() {
            Ok(cmd) => cmd,
            Err(errors) => return Outcome::BadRequest(errors),
        },
        Err(rejection) => return Outcome::BadRequest(rejection_errors(&rejection)),
    };

    Outcome::from_result(handlers.add_handler.handle(cmd).await).redact(handlers.verbose_errors)
}

/// POST /api/ideas - Append an idea, answering 201 with the session location
pub async fn create_at_location(
    state: State<IdeaHandlers>,
    payload: Result<Json<NewIdeaRequest>, JsonRejection>,
) -> Outcome<BrainstormSession> {
    match create(state, payload).await {
        Outcome::Ok(session) => Outcome::Created {
            location: format!("/api/sessions/{}", session.id()),
            body: session,
        },
        other => other,
    }
}
