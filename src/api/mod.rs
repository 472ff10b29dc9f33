pub(crate) mod link;
pub(crate) mod profile;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::error::{AdminError, Result};
use crate::model::ApiResponse;

/// Resolve `path` against the API base and append `query` pairs.
pub(crate) fn endpoint(base: &Url, path: &str, query: &[(&str, &str)]) -> Result<Url> {
    let mut url = base.join(path).map_err(|e| AdminError::Url {
        url: format!("{base}{path}"),
        message: e.to_string(),
    })?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Send a request and unwrap the `{data, error, details}` envelope.
///
/// Non-success statuses become [`AdminError::Api`]; `context` is the
/// message used when the server gives none.
pub(crate) async fn send<T, B>(
    client: &reqwest::Client,
    method: Method,
    url: Url,
    body: Option<&B>,
    context: &'static str,
) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    debug!(%method, url = %url, "sending request");

    let mut request = client.request(method, url.clone());
    if let Some(body) = body {
        let bytes = serde_json::to_vec(body).map_err(|e| AdminError::Decode {
            url: url.to_string(),
            source: e,
        })?;
        request = request.header(CONTENT_TYPE, "application/json").body(bytes);
    }

    let response = request.send().await.map_err(|e| {
        error!(url = %url, error = %e, "{context}");
        AdminError::Http {
            url: url.to_string(),
            source: e,
        }
    })?;

    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| AdminError::ResponseBody {
        url: url.to_string(),
        source: e,
    })?;

    if !status.is_success() {
        // Proxies and crashed handlers do not always answer with an envelope.
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_slice(&bytes).unwrap_or_default();
        error!(
            url = %url,
            %status,
            error = envelope.error.as_deref().unwrap_or(context),
            details = envelope.details.as_deref(),
            "request rejected"
        );
        return Err(AdminError::Api {
            context,
            status,
            error: envelope.error,
            details: envelope.details,
        });
    }

    if bytes.is_empty() {
        return Ok(ApiResponse::default());
    }
    serde_json::from_slice(&bytes).map_err(|e| {
        error!(url = %url, error = %e, "{context}");
        AdminError::Decode {
            url: url.to_string(),
            source: e,
        }
    })
}

/// Shorthand for requests without a body.
pub(crate) async fn fetch<T: DeserializeOwned>(
    client: &reqwest::Client,
    method: Method,
    url: Url,
    context: &'static str,
) -> Result<ApiResponse<T>> {
    send::<T, ()>(client, method, url, None, context).await
}
