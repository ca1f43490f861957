use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use gatepass::config::{Config, SmtpConfig};
use gatepass::email::MailTransport;
use gatepass::state::SharedState;

/// A captured outbound email.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mail transport double: records every send, optionally fails.
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("SMTP connection refused (simulated)".to_string());
        }

        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html_body.to_string(),
        });
        Ok(())
    }
}

/// A running test server instance with a recording mailer.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub mailer: Arc<RecordingMailer>,
    #[allow(dead_code)]
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a submission payload, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST to /verifyEmail with the given address, return (body, status).
    pub async fn verify_email(&self, email: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/verifyEmail"))
            .json(&json!({ "user": { "email": email } }))
            .send()
            .await
            .expect("verifyEmail request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET an absolute action-link URL, return (text body, status).
    pub async fn follow_link(&self, url: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .expect("warden action request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// The warden email sent for the most recent submission.
    pub fn last_warden_mail(&self) -> SentMail {
        self.mailer
            .sent()
            .into_iter()
            .rev()
            .find(|m| m.subject == "Late Entry Request")
            .expect("no warden email recorded")
    }
}

/// Pull the allow / not-allow link out of a warden email body.
pub fn extract_action_link(html: &str, action: &str) -> String {
    html.split("href=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap_or_default())
        .find(|url| url.contains(&format!("action={action}")))
        .unwrap_or_else(|| panic!("no {action} link in warden email"))
        .to_string()
}

/// A well-formed submission payload, as the form sends it.
pub fn sample_submission() -> Value {
    json!({
        "studentName": "Asha Verma",
        "studentID": "2201234",
        "studentEmail": "asha.verma@iiitg.ac.in",
        "friends": [
            { "name": "Rohit Das", "rollNumber": "2201567" },
            { "name": "Meera Nair", "rollNumber": "2201890" }
        ],
        "reason": "Project demo ran late at the lab",
        "exitTime": "18:00",
        "entryTime": "22:00"
    })
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        base_url: "http://localhost:0".to_string(),
        warden_email: "warden@test.com".to_string(),
        allowed_domain: "iiitg.ac.in".to_string(),
        token_ttl_secs: 3600,
        rate_limit: 100,
        rate_limit_window_secs: 60,
        max_body_size: 65536,
        trusted_proxies: vec![],
        log_level: "warn".to_string(),
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            user: "unused".to_string(),
            pass: "unused".to_string(),
            from: "noreply@test.com".to_string(),
        },
    }
}

/// Spawn a test app with the default config.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Spawn a test app with a caller-tweaked config.
pub async fn spawn_app_with(mut config: Config) -> TestApp {
    let mailer = Arc::new(RecordingMailer::new());

    // Bind first so action links in emails point at the real port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();
    config.base_url = format!("http://{addr}");

    let (app, state) = gatepass::build_app(config, mailer.clone());

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        mailer,
        state,
    }
}
