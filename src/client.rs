use reqwest::Url;
use tracing::instrument;

use crate::api;
use crate::config::AdminConfig;
use crate::error::Result;
use crate::model::*;

/// The main entry point for talking to the dashboard API.
///
/// `AdminClient` wraps a [`reqwest::Client`] and exposes typed calls for
/// participant profiles and the outreach link sets, unwrapping the
/// backend's `{data, error, details}` envelope.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> toefl_admin::Result<()> {
/// use toefl_admin::{AdminClient, AdminConfig};
///
/// let client = AdminClient::new(AdminConfig::from_env()?);
/// let march = client.filter_profiles_by_date(Some("2025"), Some("Maret")).await?;
/// println!("{} participants enrolled in March", march.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base: Url,
}

impl AdminClient {
    /// Create a client with default HTTP settings.
    pub fn new(config: AdminConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: AdminConfig) -> Self {
        let mut base = config.api_base;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { http: client, base }
    }

    /// Build a client from `TOEFL_ADMIN_API_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AdminConfig::from_env()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetch every participant profile.
    #[instrument(skip(self))]
    pub async fn get_all_profiles(&self) -> Result<Vec<Profile>> {
        api::profile::get_all_profiles(&self.http, &self.base).await
    }

    /// Fetch one profile; `None` when the backend has no such id.
    #[instrument(skip(self))]
    pub async fn get_profile_by_id(&self, id: &ProfileId) -> Result<Option<Profile>> {
        api::profile::get_profile_by_id(&self.http, &self.base, id).await
    }

    /// Create a profile and return the stored row.
    #[instrument(skip_all)]
    pub async fn create_profile(&self, payload: &CreateProfilePayload) -> Result<Profile> {
        api::profile::create_profile(&self.http, &self.base, payload).await
    }

    /// Replace a profile's editable columns and return the stored row.
    #[instrument(skip_all, fields(id = %payload.id))]
    pub async fn update_profile(&self, payload: &UpdateProfilePayload) -> Result<Profile> {
        api::profile::update_profile(&self.http, &self.base, payload).await
    }

    #[instrument(skip(self))]
    pub async fn delete_profile(&self, id: &ProfileId) -> Result<()> {
        api::profile::delete_profile(&self.http, &self.base, id).await
    }

    /// Profiles whose name or email contains `query`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search_profiles(&self, query: &str) -> Result<Vec<Profile>> {
        api::profile::search_profiles(&self.http, &self.base, query).await
    }

    /// Profiles enrolled in `year` and/or `month`. The month may be a name
    /// (`"Maret"`) or a number.
    #[instrument(skip(self))]
    pub async fn filter_profiles_by_date(
        &self,
        year: Option<&str>,
        month: Option<&str>,
    ) -> Result<Vec<Profile>> {
        api::profile::filter_profiles_by_date(&self.http, &self.base, year, month).await
    }

    /// Years and months available for filtering.
    #[instrument(skip(self))]
    pub async fn get_filter_options(&self) -> Result<FilterOptions> {
        api::profile::get_filter_options(&self.http, &self.base).await
    }

    /// Fetch the stored link set of kind `L`, if one was ever saved.
    #[instrument(skip(self), fields(kind = %L::KIND))]
    pub async fn get_link_set<L: LinkSet>(&self) -> Result<Option<L>> {
        api::link::get_link_set(&self.http, &self.base).await
    }

    /// Create or update a link set depending on whether it has an id.
    #[instrument(skip_all, fields(kind = %L::KIND))]
    pub async fn save_link_set<L: LinkSet>(&self, links: &L) -> Result<Vec<L>> {
        api::link::save_link_set(&self.http, &self.base, links).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = AdminConfig::new("https://admin.example.com/panel").unwrap();
        let client = AdminClient::new(config);
        assert_eq!(client.base_url().as_str(), "https://admin.example.com/panel/");
    }
}
