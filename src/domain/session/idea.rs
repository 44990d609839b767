//! Idea entity.
//!
//! Ideas have no lifecycle of their own: they are created only when appended
//! to a session and are never edited or removed afterwards.

use crate::domain::foundation::{Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::validation::require_text;

/// A named, described contribution to a brainstorming session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    name: String,
    description: String,
    date_created: Timestamp,
}

impl Idea {
    /// Create an idea stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `Required` if name or description is blank
    pub fn new(name: String, description: String) -> Result<Self, ValidationError> {
        require_text("name", &name, None)?;
        require_text("description", &description, None)?;

        Ok(Self {
            name,
            description,
            date_created: Timestamp::now(),
        })
    }

    /// Reconstitute an idea from persistence (no validation).
    pub fn reconstitute(name: String, description: String, date_created: Timestamp) -> Self {
        Self {
            name,
            description,
            date_created,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date_created(&self) -> &Timestamp {
        &self.date_created
    }
}
