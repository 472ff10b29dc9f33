use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use tracing::debug;

use crate::config::{parse_url, StoreConfig};
use crate::error::{AdminError, Result};

/// HTTP client preconfigured for the managed store's REST interface.
///
/// This only carries credentials and endpoints; the dashboard API owns all
/// reads and writes.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    rest_base: Url,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let builder = reqwest::Client::builder().default_headers(auth_headers(&config.anon_key)?);
        let http = builder.build().map_err(|e| AdminError::Http {
            url: config.url.to_string(),
            source: e,
        })?;
        Self::with_client(http, config)
    }

    /// Use a caller-built client. The caller is responsible for sending
    /// the headers from [`auth_headers`].
    pub fn with_client(http: reqwest::Client, config: &StoreConfig) -> Result<Self> {
        let rest_base = parse_url(&format!(
            "{}/rest/v1/",
            config.url.as_str().trim_end_matches('/')
        ))?;
        debug!(rest_base = %rest_base, "configured store client");
        Ok(Self { http, rest_base })
    }

    /// Build the client from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(&StoreConfig::from_env()?)
    }

    /// REST endpoint for `table`.
    pub fn table_url(&self, table: &str) -> Result<Url> {
        self.rest_base.join(table).map_err(|e| AdminError::Url {
            url: format!("{}{table}", self.rest_base),
            message: e.to_string(),
        })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// `apikey` and bearer authorization headers for the anonymous role.
pub fn auth_headers(anon_key: &str) -> Result<HeaderMap> {
    let invalid = |_| AdminError::Config("store anon key is not a valid header value".into());
    let mut key = HeaderValue::from_str(anon_key).map_err(invalid)?;
    key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {anon_key}")).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", key);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}
