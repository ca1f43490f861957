use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::models::SubmissionRequest;

/// In-memory store of pending warden actions, keyed by the random
/// token embedded in the emailed links. Replaces flattening the whole
/// submission into the URL: the link holder gets an opaque handle, and
/// each handle works at most once.
pub struct ActionTokenStore {
    entries: DashMap<String, PendingAction>,
}

struct PendingAction {
    submission: SubmissionRequest,
    issued_at: Instant,
}

impl ActionTokenStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Store a submission and return the token for its action links.
    pub fn issue(&self, submission: SubmissionRequest) -> String {
        let bytes: [u8; 32] = rand::random();
        let token = hex::encode(bytes);

        self.entries.insert(
            token.clone(),
            PendingAction {
                submission,
                issued_at: Instant::now(),
            },
        );

        token
    }

    /// Take the submission for a token, removing the entry so a second
    /// click on the same link finds nothing. Expired entries are
    /// rejected here even if the sweeper has not caught them yet.
    pub fn consume(&self, token: &str, ttl: Duration) -> Option<SubmissionRequest> {
        let (_, pending) = self.entries.remove(token)?;

        if pending.issued_at.elapsed() > ttl {
            return None;
        }

        Some(pending.submission)
    }

    /// Drop entries older than the TTL.
    pub fn sweep(&self, ttl: Duration) {
        self.entries.retain(|_, pending| pending.issued_at.elapsed() <= ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
