//! ListSessionsHandler - Query handler for the session overview.

use std::sync::Arc;

use crate::domain::session::{SessionError, SessionSummary};
use crate::ports::SessionRepository;

/// Handler for listing every session as a summary.
///
/// No filtering or pagination: each call returns the full set.
pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<SessionSummary>, SessionError> {
        let sessions = self.repository.list().await?;
        tracing::debug!(count = sessions.len(), "Listed sessions");

        Ok(sessions.iter().map(SessionSummary::from).collect())
    }
}
