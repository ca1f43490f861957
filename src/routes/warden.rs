use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::email::templates;
use crate::error::AppError;
use crate::models::WardenAction;
use crate::state::SharedState;
use crate::submission::codec;

#[derive(Deserialize)]
pub struct WardenActionQuery {
    pub action: Option<String>,
    pub token: Option<String>,
    /// Legacy links carry the whole submission JSON here instead of a token.
    pub student: Option<String>,
}

/// `GET /warden-action` — the warden's click-through.
///
/// Resolves the submission (token store, or the legacy inline payload),
/// emails the student the decision, and answers with a static page.
pub async fn warden_action(
    State(state): State<SharedState>,
    Query(query): Query<WardenActionQuery>,
) -> Result<Html<String>, AppError> {
    let action = query
        .action
        .as_deref()
        .and_then(WardenAction::parse)
        .ok_or_else(|| AppError::BadRequest("Invalid action or student details.".to_string()))?;

    let submission = if let Some(token) = &query.token {
        let ttl = Duration::from_secs(state.config.token_ttl_secs);
        state.actions.consume(token, ttl).ok_or_else(|| {
            AppError::BadRequest("This action link has already been used or has expired.".to_string())
        })?
    } else if let Some(raw) = &query.student {
        codec::decode_student_param(raw).map_err(AppError::BadRequest)?
    } else {
        return Err(AppError::BadRequest(
            "Invalid action or student details.".to_string(),
        ));
    };

    let html = templates::render_decision(&submission, action.approved());

    state
        .mailer
        .send(
            &submission.student_email,
            "Late Entry Request Response",
            &html,
        )
        .await
        .map_err(AppError::MailTransport)?;

    tracing::info!(
        "Warden decision '{}' delivered to student {}",
        action.as_str(),
        submission.student_id
    );

    Ok(Html(templates::render_acknowledgment()))
}
