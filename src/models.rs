use serde::{Deserialize, Serialize};

/// A late-entry request as submitted by the student form.
///
/// Field names match the form payload (`studentName`, `friends`, ...).
/// The struct is never persisted; it lives in the pending-action store
/// until the warden follows one of the emailed links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub student_name: String,
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub student_email: String,
    pub reason: String,
    pub exit_time: String,
    pub entry_time: String,
    /// Companions joining the late entry, in form order.
    pub friends: Vec<Companion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub name: String,
    pub roll_number: String,
}

/// The warden's decision, as carried by the action links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WardenAction {
    Allow,
    NotAllow,
}

impl WardenAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "allow" => Some(WardenAction::Allow),
            "not-allow" => Some(WardenAction::NotAllow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WardenAction::Allow => "allow",
            WardenAction::NotAllow => "not-allow",
        }
    }

    pub fn approved(&self) -> bool {
        matches!(self, WardenAction::Allow)
    }
}
