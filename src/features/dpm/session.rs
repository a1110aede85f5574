use lazy_static::lazy_static;
use regex::Regex;

use crate::core::config::SessionConfig;
use crate::core::error::{AppError, Result};
use crate::features::dpm::clients::DpmApi;
use crate::shared::html::decode_entities;

/// Page that renders the report form
pub const SUBMISSION_PAGE: &str = "/dpm";
/// Page that renders the approval queue
pub const APPROVAL_PAGE: &str = "/approve";

lazy_static! {
    static ref INPUT_TAG_REGEX: Regex = Regex::new(r"(?is)<input\b[^>]*>").unwrap();

    /// `value="..."` or `value='...'` inside a tag
    static ref VALUE_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)\svalue\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
}

/// Credentials captured once when a page controller starts.
///
/// Never refreshed; an expired token keeps being sent until the controller is
/// rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    csrf_token: String,
}

impl SessionContext {
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
        }
    }

    /// Use the configured token, or scrape it from the rendered page.
    pub async fn establish(api: &dyn DpmApi, config: &SessionConfig, page: &str) -> Result<Self> {
        if let Some(token) = &config.csrf_token {
            tracing::debug!("Using CSRF token from configuration");
            return Ok(Self::new(token.clone()));
        }

        let html = api.fetch_page(page).await?;
        match extract_csrf_token(&html) {
            Some(token) => {
                tracing::debug!("Scraped CSRF token from {}", page);
                Ok(Self::new(token))
            }
            None => Err(AppError::Config(format!(
                "no CSRF token configured and none found on {}",
                page
            ))),
        }
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }
}

/// Token held by the last `<input>` of a rendered page.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    let last_input = INPUT_TAG_REGEX.find_iter(html).last()?;
    let caps = VALUE_ATTR_REGEX.captures(last_input.as_str())?;
    let raw = caps.get(1).or_else(|| caps.get(2))?.as_str();
    if raw.is_empty() {
        return None;
    }
    Some(decode_entities(raw).into_owned())
}
