//! Brainstorm session aggregate.
//!
//! A session is the sole owner of its ideas. Ideas are kept in the order
//! they were added and can only be appended.

use crate::domain::foundation::{SessionId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::idea::Idea;
use super::validation::{require_text, MAX_NAME_LENGTH};

/// Session aggregate - a named collection of ideas.
///
/// # Invariants
///
/// - `id` is unique and never changes after creation
/// - `ideas` is in insertion order and never shrinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainstormSession {
    /// Repository-allocated identifier.
    id: SessionId,

    /// Session name.
    name: String,

    /// When the session was created.
    date_created: Timestamp,

    /// Ideas in insertion order.
    #[serde(default)]
    ideas: Vec<Idea>,
}

impl BrainstormSession {
    /// Create a new, empty session stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `Required` if name is blank
    /// - `TooLong` if name exceeds `MAX_NAME_LENGTH` characters
    pub fn new(id: SessionId, name: String) -> Result<Self, ValidationError> {
        require_text("name", &name, Some(MAX_NAME_LENGTH))?;

        Ok(Self {
            id,
            name,
            date_created: Timestamp::now(),
            ideas: Vec::new(),
        })
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        name: String,
        date_created: Timestamp,
        ideas: Vec<Idea>,
    ) -> Self {
        Self {
            id,
            name,
            date_created,
            ideas,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the session name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the session was created.
    pub fn date_created(&self) -> &Timestamp {
        &self.date_created
    }

    /// Returns the ideas in insertion order.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Returns the number of ideas.
    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    /// Returns the most recently added idea.
    pub fn last_idea(&self) -> Option<&Idea> {
        self.ideas.last()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an idea to the end of the session.
    pub fn add_idea(&mut self, idea: Idea) {
        self.ideas.push(idea);
    }
}
