//! Browser-facing handlers for the session overview page.

use axum::{
    extract::{rejection::FormRejection, State},
    Form,
};

use crate::domain::foundation::ValidationErrors;
use crate::domain::session::SessionSummary;

use super::super::outcome::Outcome;
use super::super::sessions::SessionHandlers;
use super::dto::NewSessionRequest;

/// GET / - Every session as a summary view
pub async fn index(State(handlers): State<SessionHandlers>) -> Outcome<Vec<SessionSummary>> {
    Outcome::from_result(handlers.list_handler.handle().await).redact(handlers.verbose_errors)
}

/// POST / - Create a session from the form, then back to the overview
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    form: Result<Form<NewSessionRequest>, FormRejection>,
) -> Outcome<()> {
    let cmd = match form {
        Ok(Form(req)) => match req.validate() {
            Ok(cmd) => cmd,
            Err(errors) => return Outcome::BadRequest(errors),
        },
        Err(rejection) => {
            let mut errors = ValidationErrors::new();
            errors.add("body", rejection.body_text());
            return Outcome::BadRequest(errors);
        }
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(_) => Outcome::Redirect("/".to_string()),
        Err(e) => Outcome::from(e).redact(handlers.verbose_errors),
    }
}
