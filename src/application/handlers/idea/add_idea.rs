//! AddIdeaHandler - Command handler for appending an idea to a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{BrainstormSession, Idea, SessionError};
use crate::ports::SessionRepository;

/// Command to append an idea to an existing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddIdeaCommand {
    pub session_id: SessionId,
    pub name: String,
    pub description: String,
}

/// Handler for appending ideas.
///
/// Issues exactly one `update` per successful append, and none when
/// validation fails or the session does not exist.
pub struct AddIdeaHandler {
    repository: Arc<dyn SessionRepository>,
}

impl AddIdeaHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddIdeaCommand) -> Result<BrainstormSession, SessionError> {
        // 1. Build the idea first so invalid input never reaches the repository
        let idea = Idea::new(cmd.name, cmd.description)?;

        // 2. Load target session
        let mut session = self
            .repository
            .find_by_id(cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        // 3. Append and persist
        session.add_idea(idea);
        self.repository.update(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            idea_count = session.idea_count(),
            "Idea added to session"
        );
        Ok(session)
    }
}
