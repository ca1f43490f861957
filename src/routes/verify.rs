use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::validate;

#[derive(Deserialize)]
pub struct VerifyEmailRequest {
    pub user: VerifyEmailUser,
}

#[derive(Deserialize)]
pub struct VerifyEmailUser {
    #[serde(default)]
    pub email: String,
}

/// `POST /verifyEmail` — gate a signed-in account on the institutional
/// domain before the form unlocks. Mismatch is reported inline in the
/// body; the caller treats `{error}` as the verdict.
pub async fn verify_email(
    State(state): State<SharedState>,
    Json(req): Json<VerifyEmailRequest>,
) -> Result<Json<Value>, AppError> {
    if req.user.email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }

    if validate::is_institutional(&req.user.email, &state.config.allowed_domain) {
        Ok(Json(json!({ "success": true })))
    } else {
        tracing::warn!("Sign-in rejected for non-institutional address");
        Ok(Json(json!({
            "error": format!(
                "Only {} accounts can submit late entry requests.",
                state.config.allowed_domain
            ),
        })))
    }
}
