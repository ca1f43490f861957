use crate::models::{SubmissionRequest, WardenAction};

/// Build one warden action link: `{base}/warden-action?action=...&token=...`.
pub fn action_link(base_url: &str, action: WardenAction, token: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", action.as_str())
        .append_pair("token", token)
        .finish();

    format!("{}/warden-action?{query}", base_url.trim_end_matches('/'))
}

/// Decode the legacy `student` query value: the whole submission JSON
/// flattened into the URL by earlier deployments. The query layer has
/// already percent-decoded it.
pub fn decode_student_param(raw: &str) -> Result<SubmissionRequest, String> {
    serde_json::from_str(raw).map_err(|e| format!("Invalid student details: {e}"))
}
