//! Browser-facing session overview.

mod dto;
mod handlers;
mod routes;

pub use dto::NewSessionRequest;
pub use handlers::{create_session, index};
pub use routes::home_routes;
