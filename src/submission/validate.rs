use crate::models::SubmissionRequest;

/// Check every required field of an incoming submission. Returns the
/// first problem found as a caller-facing message.
pub fn validate(submission: &SubmissionRequest, allowed_domain: &str) -> Result<(), String> {
    for (value, name) in [
        (&submission.student_name, "studentName"),
        (&submission.student_id, "studentID"),
        (&submission.student_email, "studentEmail"),
        (&submission.reason, "reason"),
        (&submission.exit_time, "exitTime"),
        (&submission.entry_time, "entryTime"),
    ] {
        if value.trim().is_empty() {
            return Err(format!("{name} is required"));
        }
    }

    let email = submission.student_email.trim();
    match email.rsplit_once('@') {
        None | Some(("", _)) => {
            return Err("studentEmail is not a valid email address".to_string());
        }
        Some(_) => {}
    }

    if !is_institutional(email, allowed_domain) {
        return Err(format!("studentEmail must be a {allowed_domain} address"));
    }

    for (i, friend) in submission.friends.iter().enumerate() {
        if friend.name.trim().is_empty() {
            return Err(format!("friends[{i}].name is required"));
        }
        if friend.roll_number.trim().is_empty() {
            return Err(format!("friends[{i}].rollNumber is required"));
        }
    }

    Ok(())
}

/// Email domain gate: true when the address belongs to the configured
/// institutional domain (exact match or subdomain, never a lookalike
/// suffix like `evil-iiitg.ac.in`).
pub fn is_institutional(email: &str, domain: &str) -> bool {
    let Some((_, host)) = email.trim().rsplit_once('@') else {
        return false;
    };

    let host = host.to_ascii_lowercase();
    let domain = domain.to_ascii_lowercase();

    host == domain || host.ends_with(&format!(".{domain}"))
}
