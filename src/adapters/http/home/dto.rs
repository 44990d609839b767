//! Form DTOs for the home page.

use serde::{Deserialize, Serialize};

use crate::application::handlers::session::CreateSessionCommand;
use crate::domain::foundation::ValidationErrors;
use crate::domain::session::{require_text, MAX_NAME_LENGTH};

/// Form posted to create a new session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSessionRequest {
    #[serde(default)]
    pub session_name: Option<String>,
}

impl NewSessionRequest {
    pub fn new(session_name: impl Into<String>) -> Self {
        Self {
            session_name: Some(session_name.into()),
        }
    }

    pub fn validate(self) -> Result<CreateSessionCommand, ValidationErrors> {
        let name = self.session_name.unwrap_or_default();
        require_text("session_name", &name, Some(MAX_NAME_LENGTH))?;
        Ok(CreateSessionCommand { name })
    }
}
