use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub warden_email: String,
    pub allowed_domain: String,
    pub token_ttl_secs: u64,
    pub rate_limit: u32,
    pub rate_limit_window_secs: u64,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub log_level: String,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("GATEPASS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid GATEPASS_HOST: {e}"))?;

        let port: u16 = env_or("GATEPASS_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid GATEPASS_PORT: {e}"))?;

        // Public URL embedded in the warden's action links
        let base_url = env_or("GATEPASS_BASE_URL", &format!("http://{host}:{port}"));

        let warden_email = env_required("GATEPASS_WARDEN_EMAIL")?;

        let allowed_domain = env_or("GATEPASS_ALLOWED_DOMAIN", "iiitg.ac.in");

        let token_ttl_secs: u64 = env_or("GATEPASS_TOKEN_TTL_SECS", "172800")
            .parse()
            .map_err(|e| format!("Invalid GATEPASS_TOKEN_TTL_SECS: {e}"))?;

        let rate_limit: u32 = env_or("GATEPASS_RATE_LIMIT", "10")
            .parse()
            .map_err(|e| format!("Invalid GATEPASS_RATE_LIMIT: {e}"))?;

        let rate_limit_window_secs: u64 = env_or("GATEPASS_RATE_LIMIT_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid GATEPASS_RATE_LIMIT_WINDOW_SECS: {e}"))?;

        let max_body_size: usize = env_or("GATEPASS_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid GATEPASS_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("GATEPASS_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid GATEPASS_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = env_or("GATEPASS_LOG_LEVEL", "info");

        let smtp = SmtpConfig {
            host: env_required("GATEPASS_SMTP_HOST")?,
            port: env_or("GATEPASS_SMTP_PORT", "587")
                .parse()
                .map_err(|e| format!("Invalid GATEPASS_SMTP_PORT: {e}"))?,
            user: env_required("GATEPASS_SMTP_USER")?,
            pass: env_required("GATEPASS_SMTP_PASS")?,
            from: env_required("GATEPASS_SMTP_FROM")?,
        };

        Ok(Config {
            host,
            port,
            base_url,
            warden_email,
            allowed_domain,
            token_ttl_secs,
            rate_limit,
            rate_limit_window_secs,
            max_body_size,
            trusted_proxies,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
