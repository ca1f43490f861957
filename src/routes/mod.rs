pub mod submit;
pub mod verify;
pub mod warden;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(submit::submit))
        .route("/verifyEmail", post(verify::verify_email))
        .route("/warden-action", get(warden::warden_action))
}
