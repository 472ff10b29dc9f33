/// All errors that can occur while talking to the dashboard backend.
#[derive(thiserror::Error, Debug)]
pub enum AdminError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A request or response body was not valid JSON for the expected shape.
    #[error("invalid json for {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// Server answered with a non-success status and an error envelope.
    #[error("{} ({status})", api_message(.context, .error))]
    Api {
        context: &'static str,
        status: reqwest::StatusCode,
        error: Option<String>,
        details: Option<String>,
    },

    /// A create or update call succeeded but returned no rows.
    #[error("No data returned from {operation} operation")]
    EmptyResult { operation: &'static str },

    /// A base URL or endpoint could not be parsed.
    #[error("invalid url {url}: {message}")]
    Url { url: String, message: String },

    /// Required configuration is missing or malformed.
    #[error("missing configuration: {0}")]
    Config(String),
}

impl AdminError {
    /// Message to show the user for this failure.
    ///
    /// Server errors carry their own text (joined with `details` when
    /// present); everything else falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AdminError::Api {
                error,
                details: Some(details),
                ..
            } => format!("{}: {details}", error.as_deref().unwrap_or(fallback)),
            AdminError::Api {
                error: Some(error), ..
            } => error.clone(),
            _ => fallback.to_string(),
        }
    }

    /// The backend's own `error` text, without `details`.
    pub fn server_error(&self) -> Option<&str> {
        match self {
            AdminError::Api { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// True when the backend answered; false for transport and decoding failures.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AdminError::Api { .. })
    }
}

fn api_message(context: &str, error: &Option<String>) -> String {
    error.as_deref().unwrap_or(context).to_string()
}

pub type Result<T, E = AdminError> = std::result::Result<T, E>;
