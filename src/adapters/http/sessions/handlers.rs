//! HTTP handlers for the sessions API.

use std::sync::Arc;

use axum::extract::{Path, State};

use crate::application::handlers::session::{
    CreateSessionHandler, GetSessionHandler, GetSessionQuery, ListSessionsHandler,
};
use crate::domain::session::BrainstormSession;

use super::super::outcome::Outcome;
use super::super::parse_session_id;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Session handlers shared by the API, home page and session page routers.
#[derive(Clone)]
pub struct SessionHandlers {
    pub(crate) create_handler: Arc<CreateSessionHandler>,
    pub(crate) get_handler: Arc<GetSessionHandler>,
    pub(crate) list_handler: Arc<ListSessionsHandler>,
    pub(crate) verbose_errors: bool,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
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

/// GET /api/sessions/:id - Full session with its ideas
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Outcome<BrainstormSession> {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(errors) => return Outcome::BadRequest(errors),
    };

    Outcome::from_result(handlers.get_handler.handle(GetSessionQuery { session_id }).await)
        .redact(handlers.verbose_errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::error::ErrorResponse;
    use crate::adapters::http::outcome::INTERNAL_ERROR_MESSAGE;
    use crate::domain::foundation::SessionId;
    use crate::testing::{session_handlers, test_session, MockSessionRepository};

    #[tokio::test]
    async fn get_session_returns_full_aggregate() {
        let repo = Arc::new(MockSessionRepository::with_sessions(vec![test_session(3, 2)]));

        let result = get_session(State(session_handlers(repo)), Path("3".to_string())).await;

        assert_eq!(result, Outcome::Ok(test_session(3, 2)));
    }

    #[tokio::test]
    async fn get_session_returns_not_found_with_id() {
        let repo = Arc::new(MockSessionRepository::new());

        let result = get_session(State(session_handlers(repo)), Path("999".to_string())).await;

        assert_eq!(result, Outcome::NotFound(SessionId::new(999)));
    }

    #[tokio::test]
    async fn repository_failure_hides_detail_by_default() {
        let repo = Arc::new(MockSessionRepository::failing());

        let result = get_session(State(session_handlers(repo)), Path("1".to_string())).await;

        assert_eq!(
            result,
            Outcome::Internal(ErrorResponse::internal(INTERNAL_ERROR_MESSAGE))
        );
    }

    #[tokio::test]
    async fn repository_failure_shows_detail_when_verbose() {
        let repo = Arc::new(MockSessionRepository::failing());
        let handlers = session_handlers(repo).with_verbose_errors(true);

        let result = get_session(State(handlers), Path("1".to_string())).await;

        match result {
            Outcome::Internal(error) => {
                assert!(error.message.contains("Simulated repository failure"))
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }
}
