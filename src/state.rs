use std::sync::Arc;

use crate::config::Config;
use crate::email::MailTransport;
use crate::rate_limit::SubmissionRateLimiter;
use crate::tokens::ActionTokenStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn MailTransport>,
    pub actions: ActionTokenStore,
    pub submission_limiter: SubmissionRateLimiter,
}
