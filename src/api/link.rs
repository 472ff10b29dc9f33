use reqwest::{Method, Url};
use tracing::{debug, instrument};

use crate::api::{endpoint, fetch, send};
use crate::error::Result;
use crate::model::{ApiResponse, LinkSet};

#[instrument(skip_all, fields(kind = %L::KIND))]
pub(crate) async fn get_link_set<L: LinkSet>(
    client: &reqwest::Client,
    base: &Url,
) -> Result<Option<L>> {
    let url = endpoint(base, &L::KIND.endpoint(), &[])?;
    let response: ApiResponse<L> =
        fetch(client, Method::GET, url, "Failed to fetch link set").await?;
    Ok(response.data)
}

/// Create the set when it has no id yet, update it otherwise. Returns the
/// rows the server wrote, which may differ from what was sent.
#[instrument(skip_all, fields(kind = %L::KIND, id = ?links.id()))]
pub(crate) async fn save_link_set<L: LinkSet>(
    client: &reqwest::Client,
    base: &Url,
    links: &L,
) -> Result<Vec<L>> {
    let method = if links.id().is_some() {
        Method::PUT
    } else {
        Method::POST
    };
    debug!(%method, "saving link set");

    let url = endpoint(base, &L::KIND.endpoint(), &[])?;
    let response: ApiResponse<Vec<L>> =
        send(client, method, url, Some(links), "Failed to save link set").await?;
    Ok(response.data.unwrap_or_default())
}
