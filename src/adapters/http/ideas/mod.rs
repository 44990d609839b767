//! HTTP adapter for the ideas API.

mod dto;
mod handlers;
mod routes;

pub use dto::NewIdeaRequest;
pub use handlers::{create, create_at_location, for_session, IdeaHandlers};
pub use routes::idea_routes;
