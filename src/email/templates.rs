use chrono::{DateTime, Utc};

use crate::models::SubmissionRequest;

/// Escape user-supplied text before embedding it in an HTML body.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_warden_request(
    submission: &SubmissionRequest,
    submitted_at: &DateTime<Utc>,
    allow_url: &str,
    deny_url: &str,
) -> String {
    let friends: String = submission
        .friends
        .iter()
        .map(|f| {
            format!(
                "<li>{} (Roll Number: {})</li>",
                escape(&f.name),
                escape(&f.roll_number)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h3>Student Late Entry Request</h3>
    <p>Below are the details of the student requesting permission:</p>
    <ul>
        <li><strong>Student Name:</strong> {name}</li>
        <li><strong>Student ID:</strong> {id}</li>
        <li><strong>Student Email:</strong> {email}</li>
        <li><strong>Friends:</strong>
            <ul>{friends}</ul>
        </li>
        <li><strong>Reason:</strong> {reason}</li>
        <li><strong>Exit Time:</strong> {exit_time}</li>
        <li><strong>Entry Time:</strong> {entry_time}</li>
        <li><strong>Submitted:</strong> {submitted}</li>
    </ul>
    <p>Action links for the warden:</p>
    <p>
        <a href="{allow_url}" style="display: inline-block; padding: 10px 20px; background: green; color: white; text-decoration: none; border-radius: 4px;">Allow</a>
        <a href="{deny_url}" style="display: inline-block; padding: 10px 20px; background: red; color: white; text-decoration: none; border-radius: 4px;">Not Allow</a>
    </p>
    <p style="color: #666; font-size: 14px;">Each link works once and expires automatically.</p>
</body>
</html>"#,
        name = escape(&submission.student_name),
        id = escape(&submission.student_id),
        email = escape(&submission.student_email),
        friends = friends,
        reason = escape(&submission.reason),
        exit_time = escape(&submission.exit_time),
        entry_time = escape(&submission.entry_time),
        submitted = submitted_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

pub fn render_decision(submission: &SubmissionRequest, approved: bool) -> String {
    let outcome = if approved {
        "Your late entry request has been approved."
    } else {
        "Your late entry request has been denied."
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h3>Late Entry Request Response</h3>
    <p>Dear {name},</p>
    <p>{outcome}</p>
    <p>Reason: {reason}</p>
</body>
</html>"#,
        name = escape(&submission.student_name),
        outcome = outcome,
        reason = escape(&submission.reason),
    )
}

/// Acknowledgment page shown to the warden after a link is followed.
pub fn render_acknowledgment() -> String {
    r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Action Processed</title></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1>Action Processed</h1>
    <p>The student has been notified successfully.</p>
</body>
</html>"#
        .to_string()
}
