//! HTTP DTOs for idea endpoints.

use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::handlers::idea::AddIdeaCommand;
use crate::domain::foundation::{SessionId, ValidationError, ValidationErrors};
use crate::domain::session::require_text;

/// Request to append an idea to a session.
///
/// Every field is optional on the wire so that missing fields surface as
/// validation messages rather than deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIdeaRequest {
    #[serde(default)]
    pub session_id: Option<SessionId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewIdeaRequest {
    pub fn new(session_id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            session_id: Some(SessionId::new(session_id)),
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Checks every field and converts into a command.
    ///
    /// All failing fields are reported together.
    pub fn validate(self) -> Result<AddIdeaCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.session_id.is_none() {
            errors.push(ValidationError::required("session_id"));
        }
        for (field, value) in [("name", &self.name), ("description", &self.description)] {
            if let Err(e) = require_text(field, value.as_deref().unwrap_or_default(), None) {
                errors.push(e);
            }
        }

        match (self.session_id, self.name, self.description) {
            (Some(session_id), Some(name), Some(description)) if errors.is_empty() => {
                Ok(AddIdeaCommand {
                    session_id,
                    name,
                    description,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Turns an unreadable JSON body into validation messages.
pub fn rejection_errors(rejection: &JsonRejection) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add("body", rejection.body_text());
    errors
}
