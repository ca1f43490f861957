use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::email::templates;
use crate::error::AppError;
use crate::models::{SubmissionRequest, WardenAction};
use crate::state::SharedState;
use crate::submission::{codec, metadata, validate};

/// `POST /` — the late-entry form submission.
///
/// The body is parsed from raw bytes so malformed JSON gets the same
/// `{error}` shape as every other rejection.
pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let submission: SubmissionRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid student data format: {e}")))?;

    let ip = metadata::client_ip(&headers, Some(addr.ip()), &state.config.trusted_proxies);
    if let Err(retry_after) = state.submission_limiter.check(
        ip,
        state.config.rate_limit,
        state.config.rate_limit_window_secs,
    ) {
        return Err(AppError::RateLimited(format!(
            "Too many requests. Retry after {retry_after}s"
        )));
    }

    validate::validate(&submission, &state.config.allowed_domain).map_err(AppError::BadRequest)?;

    let token = state.actions.issue(submission.clone());
    let allow_url = codec::action_link(&state.config.base_url, WardenAction::Allow, &token);
    let deny_url = codec::action_link(&state.config.base_url, WardenAction::NotAllow, &token);

    let html = templates::render_warden_request(&submission, &Utc::now(), &allow_url, &deny_url);

    state
        .mailer
        .send(&state.config.warden_email, "Late Entry Request", &html)
        .await
        .map_err(AppError::MailTransport)?;

    tracing::info!(
        "Late entry request from student {} ({ip}) forwarded to warden",
        submission.student_id
    );

    Ok(Json(json!({
        "message": "Email sent to warden successfully.",
        "success": true,
    })))
}
