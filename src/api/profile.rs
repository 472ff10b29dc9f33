use reqwest::{Method, Url};
use serde::de::IgnoredAny;
use tracing::{debug, instrument};

use crate::api::{endpoint, fetch, send};
use crate::error::{AdminError, Result};
use crate::model::{
    ApiResponse, CreateProfilePayload, FilterOptions, Profile, ProfileId, UpdateProfilePayload,
};
use crate::month::normalize_month_for_db;

const PROFILE_PATH: &str = "api/profile";
const FILTERS_PATH: &str = "api/profile/filters";

#[instrument(skip(client, base))]
pub(crate) async fn get_all_profiles(client: &reqwest::Client, base: &Url) -> Result<Vec<Profile>> {
    let url = endpoint(base, PROFILE_PATH, &[])?;
    let response: ApiResponse<Vec<Profile>> =
        fetch(client, Method::GET, url, "Failed to fetch profiles").await?;
    let profiles = response.data.unwrap_or_default();
    debug!(count = profiles.len(), "fetched profiles");
    Ok(profiles)
}

#[instrument(skip_all, fields(id = %id))]
pub(crate) async fn get_profile_by_id(
    client: &reqwest::Client,
    base: &Url,
    id: &ProfileId,
) -> Result<Option<Profile>> {
    let id = id.to_string();
    let url = endpoint(base, PROFILE_PATH, &[("id", id.as_str())])?;
    let response: ApiResponse<Profile> =
        fetch(client, Method::GET, url, "Failed to fetch profile").await?;
    Ok(response.data)
}

#[instrument(skip_all)]
pub(crate) async fn create_profile(
    client: &reqwest::Client,
    base: &Url,
    payload: &CreateProfilePayload,
) -> Result<Profile> {
    let url = endpoint(base, PROFILE_PATH, &[])?;
    let response: ApiResponse<Vec<Profile>> = send(
        client,
        Method::POST,
        url,
        Some(payload),
        "Failed to create profile",
    )
    .await?;
    first_row(response, "create")
}

#[instrument(skip_all, fields(id = %payload.id))]
pub(crate) async fn update_profile(
    client: &reqwest::Client,
    base: &Url,
    payload: &UpdateProfilePayload,
) -> Result<Profile> {
    let url = endpoint(base, PROFILE_PATH, &[])?;
    let response: ApiResponse<Vec<Profile>> = send(
        client,
        Method::PUT,
        url,
        Some(payload),
        "Failed to update profile",
    )
    .await?;
    first_row(response, "update")
}

#[instrument(skip_all, fields(id = %id))]
pub(crate) async fn delete_profile(
    client: &reqwest::Client,
    base: &Url,
    id: &ProfileId,
) -> Result<()> {
    let id = id.to_string();
    let url = endpoint(base, PROFILE_PATH, &[("id", id.as_str())])?;
    let _: ApiResponse<IgnoredAny> =
        fetch(client, Method::DELETE, url, "Failed to delete profile").await?;
    Ok(())
}

/// Case-insensitive substring match on name or email over every profile.
#[instrument(skip(client, base))]
pub(crate) async fn search_profiles(
    client: &reqwest::Client,
    base: &Url,
    query: &str,
) -> Result<Vec<Profile>> {
    let profiles = get_all_profiles(client, base).await?;
    Ok(filter_by_query(profiles, query))
}

/// Filter by enrollment year and month. Empty values are not sent; month
/// names are converted to the numeric form the backend stores.
#[instrument(skip(client, base))]
pub(crate) async fn filter_profiles_by_date(
    client: &reqwest::Client,
    base: &Url,
    year: Option<&str>,
    month: Option<&str>,
) -> Result<Vec<Profile>> {
    let month = month.filter(|m| !m.is_empty()).map(normalize_month_for_db);
    let mut query = Vec::with_capacity(2);
    if let Some(year) = year.filter(|y| !y.is_empty()) {
        query.push(("tahun", year));
    }
    if let Some(month) = month.as_deref() {
        query.push(("bulan", month));
    }

    let url = endpoint(base, PROFILE_PATH, &query)?;
    let response: ApiResponse<Vec<Profile>> =
        fetch(client, Method::GET, url, "Failed to filter profiles").await?;
    Ok(response.data.unwrap_or_default())
}

#[instrument(skip(client, base))]
pub(crate) async fn get_filter_options(
    client: &reqwest::Client,
    base: &Url,
) -> Result<FilterOptions> {
    let url = endpoint(base, FILTERS_PATH, &[])?;
    let response: ApiResponse<FilterOptions> =
        fetch(client, Method::GET, url, "Failed to fetch filter options").await?;
    Ok(response.data.unwrap_or_default().normalized())
}

fn first_row(response: ApiResponse<Vec<Profile>>, operation: &'static str) -> Result<Profile> {
    response
        .data
        .and_then(|rows| rows.into_iter().next())
        .ok_or(AdminError::EmptyResult { operation })
}

pub(crate) fn filter_by_query(profiles: Vec<Profile>, query: &str) -> Vec<Profile> {
    let query = query.to_lowercase();
    profiles
        .into_iter()
        .filter(|p| {
            p.display_name().to_lowercase().contains(&query)
                || p.display_email().to_lowercase().contains(&query)
        })
        .collect()
}
