//! Popup-side flow: resolve the latest official release for the active page.

use tracing::{info, warn};

use crate::release::api::ReleasesApi;
use crate::release::error::ResolveError;
use crate::release::selector::find_latest_official_release;
use crate::settings::store::SettingsStore;
use crate::settings::update::{SettingsUpdate, UpdateSender};

/// Outcome of one resolve pass, mirroring what the result field shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Highest version released for the official package.
    Latest(String),
    /// The project has releases, but none for the official package.
    NoOfficialRelease,
    /// The endpoint could not be reached or answered non-2xx.
    FetchFailed,
}

/// Extract the project identifier from a dashboard page URL.
///
/// The dashboard keeps the active project in the `project` query parameter.
pub fn project_id_from_url(page_url: &str) -> Option<String> {
    let url = reqwest::Url::parse(page_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key.as_ref() == "project")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Resolve the latest official release for the project on `page_url`.
///
/// Missing inputs surface as errors; a failed fetch degrades to
/// [`Resolution::FetchFailed`] and is never retried.
pub async fn resolve_latest(
    api: &dyn ReleasesApi,
    store: &SettingsStore,
    page_url: &str,
) -> Result<Resolution, ResolveError> {
    let project_id = project_id_from_url(page_url).ok_or(ResolveError::MissingProject)?;

    let settings = store.load()?;
    let Some(api_key) = settings.sentry_api_key else {
        warn!("API key is missing; skipping releases request");
        return Err(ResolveError::MissingApiKey);
    };

    let releases = match api.fetch_releases(&project_id, &api_key).await {
        Ok(releases) => releases,
        Err(e) => {
            warn!("Failed to fetch releases for project {}: {}", project_id, e);
            return Ok(Resolution::FetchFailed);
        }
    };

    match find_latest_official_release(&releases, &settings.official_package_name) {
        Some(version) => {
            info!(
                "Latest release of {} is {}",
                settings.official_package_name, version
            );
            Ok(Resolution::Latest(version))
        }
        None => Ok(Resolution::NoOfficialRelease),
    }
}

/// Persist the applied values and notify the filter side.
///
/// The write and the notification are not ordered with respect to any
/// concurrent filter pass; the filter picks the new values up on its next
/// board event.
pub fn apply_settings(
    store: &SettingsStore,
    updates: &UpdateSender,
    latest_release_value: Option<String>,
    filter_latest: bool,
) -> Result<(), ResolveError> {
    store.save_applied(latest_release_value.as_deref(), filter_latest)?;
    updates.send(SettingsUpdate::UpdateSettings {
        latest_release_value,
        filter_latest,
    });
    Ok(())
}
