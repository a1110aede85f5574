use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

/// Connection settings for the DPM server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server origin without a trailing slash, e.g. `https://dpm.example.com`
    pub base_url: String,
    /// Optional per-request timeout; requests wait indefinitely when unset
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

/// Credentials captured once per page
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Raw `Cookie` header value carrying the session and CSRF cookies
    pub cookie: Option<String>,
    /// CSRF token; scraped from the rendered page when absent
    pub csrf_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            server: ServerConfig::from_env()?,
            session: SessionConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("DPM_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let timeout = match env::var("DPM_HTTP_TIMEOUT_SECS").ok().filter(|s| !s.is_empty()) {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .map_err(|_| "DPM_HTTP_TIMEOUT_SECS must be a valid number".to_string())?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let user_agent = user_agent_or_default(env::var("DPM_USER_AGENT").ok());

        Ok(Self {
            base_url,
            timeout,
            user_agent,
        })
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use values if they are non-empty
        let cookie = env::var("DPM_SESSION_COOKIE").ok().filter(|s| !s.is_empty());
        let csrf_token = env::var("DPM_CSRF_TOKEN").ok().filter(|s| !s.is_empty());

        Ok(Self { cookie, csrf_token })
    }
}

fn user_agent_or_default(raw: Option<String>) -> String {
    raw.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("dpm-client/{}", env!("CARGO_PKG_VERSION")))
}

fn normalize_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(format!(
            "DPM_BASE_URL must start with http:// or https://, got '{}'",
            raw
        ));
    }
    Ok(trimmed.to_string())
}
