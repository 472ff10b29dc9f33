use reqwest::Url;
use tracing::warn;

use crate::error::{AdminError, Result};

/// Environment variable holding the dashboard API base URL.
pub const API_URL_ENV: &str = "TOEFL_ADMIN_API_URL";
/// Environment variable holding the managed store URL.
pub const STORE_URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the managed store anonymous key.
pub const STORE_ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Where the dashboard API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_base: Url,
}

impl AdminConfig {
    pub fn new(api_base: &str) -> Result<Self> {
        Ok(Self {
            api_base: parse_url(api_base)?,
        })
    }

    /// Read [`API_URL_ENV`], falling back to `http://localhost:3000`.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(API_URL_ENV).ok();
        Self::from_values(raw.as_deref())
    }

    fn from_values(api_base: Option<&str>) -> Result<Self> {
        Self::new(api_base.unwrap_or(DEFAULT_API_URL))
    }
}

/// Credentials for the managed relational store behind the dashboard API.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: Url,
    pub anon_key: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

impl StoreConfig {
    /// Read [`STORE_URL_ENV`] and [`STORE_ANON_KEY_ENV`].
    ///
    /// Missing values are logged and reported as [`AdminError::Config`].
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(STORE_URL_ENV).ok();
        let key = std::env::var(STORE_ANON_KEY_ENV).ok();
        Self::from_values(url.as_deref(), key.as_deref())
    }

    fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self> {
        let (Some(url), Some(anon_key)) = (
            url.filter(|v| !v.is_empty()),
            anon_key.filter(|v| !v.is_empty()),
        ) else {
            warn!("missing store environment variables");
            return Err(AdminError::Config(format!(
                "{STORE_URL_ENV} and {STORE_ANON_KEY_ENV} must both be set"
            )));
        };
        Ok(Self {
            url: parse_url(url)?,
            anon_key: anon_key.to_string(),
        })
    }
}

pub(crate) fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| AdminError::Url {
        url: raw.to_owned(),
        message: e.to_string(),
    })
}
