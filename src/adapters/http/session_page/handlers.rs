//! Browser-facing handler for a single session page.

use axum::extract::{Path, State};

use crate::application::handlers::session::GetSessionQuery;
use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, SessionSummary};

use super::super::outcome::Outcome;
use super::super::sessions::SessionHandlers;

pub const SESSION_NOT_FOUND: &str = "Session not found.";

/// GET /session and GET /session/:id
///
/// Without a usable id the browser is sent back to the overview. An unknown
/// id answers with a plain message rather than a 404 page.
pub async fn show(
    State(handlers): State<SessionHandlers>,
    id: Option<Path<String>>,
) -> Outcome<SessionSummary> {
    let Some(session_id) = id.and_then(|Path(raw)| raw.parse::<SessionId>().ok()) else {
        return Outcome::Redirect("/".to_string());
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => Outcome::Ok(SessionSummary::from(&session)),
        Err(SessionError::NotFound(_)) => Outcome::Content(SESSION_NOT_FOUND.to_string()),
        Err(e) => Outcome::from(e).redact(handlers.verbose_errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::session::BrainstormSession;
    use crate::testing::{session_handlers, test_sessions, MockSessionRepository};
    use chrono::Datelike;
    use std::sync::Arc;

    #[tokio::test]
    async fn redirects_to_home_when_id_is_missing() {
        let repo = Arc::new(MockSessionRepository::new());

        let result = show(State(session_handlers(repo.clone())), None).await;

        assert_eq!(result, Outcome::Redirect("/".to_string()));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn redirects_to_home_when_id_is_not_a_number() {
        let repo = Arc::new(MockSessionRepository::new());

        let result = show(State(session_handlers(repo)), Some(Path("abc".to_string()))).await;

        assert_eq!(result, Outcome::Redirect("/".to_string()));
    }

    #[tokio::test]
    async fn returns_content_when_session_not_found() {
        let repo = Arc::new(MockSessionRepository::new());

        let result = show(State(session_handlers(repo)), Some(Path("1".to_string()))).await;

        assert_eq!(result, Outcome::Content(SESSION_NOT_FOUND.to_string()));
    }

    #[tokio::test]
    async fn returns_view_with_session_summary() {
        let created = Timestamp::from_ymd(1981, 10, 28).unwrap();
        let mut sessions = test_sessions(3);
        sessions[0] = BrainstormSession::reconstitute(
            SessionId::new(1),
            "Test One".to_string(),
            created,
            Vec::new(),
        );
        let repo = Arc::new(MockSessionRepository::with_sessions(sessions));

        let result = show(State(session_handlers(repo)), Some(Path("1".to_string()))).await;

        match result {
            Outcome::Ok(model) => {
                assert_eq!(model.name, "Test One");
                assert_eq!(model.date_created.as_datetime().day(), 28);
                assert_eq!(model.id, SessionId::new(1));
            }
            other => panic!("expected Ok, got {:?}", other),
        }
    }
}
