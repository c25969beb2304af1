//! Releases endpoint client.

use tracing::warn;

use crate::config::{DEFAULT_API_BASE, DEFAULT_ORG, RELEASES_QUERY};
use crate::release::error::ApiError;
use crate::release::types::Release;

#[cfg(test)]
use mockall::automock;

/// Trait for fetching the open releases of a dashboard project.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleasesApi: Send + Sync {
    /// Fetches all open releases for a project.
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - the releases, in endpoint order
    /// * `Err(ApiError)` - if the request fails or answers non-2xx
    async fn fetch_releases(
        &self,
        project_id: &str,
        api_key: &str,
    ) -> Result<Vec<Release>, ApiError>;
}

/// Client for the hosted releases API.
pub struct SentryApi {
    client: reqwest::Client,
    base_url: String,
    org: String,
}

impl SentryApi {
    /// Creates a new client against a custom base URL and organization.
    pub fn new(base_url: &str, org: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("release-lens")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            org: org.to_string(),
        }
    }
}

impl Default for SentryApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_ORG)
    }
}

#[async_trait::async_trait]
impl ReleasesApi for SentryApi {
    async fn fetch_releases(
        &self,
        project_id: &str,
        api_key: &str,
    ) -> Result<Vec<Release>, ApiError> {
        let url = format!(
            "{}/api/0/projects/{}/{}/releases/?{}",
            self.base_url, self.org, project_id, RELEASES_QUERY
        );

        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(api_key)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(project_id.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Releases API returned status {}: {}", status, body);
            return Err(ApiError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse releases response: {}", e);
            ApiError::InvalidResponse(e.to_string())
        })?;

        Ok(releases)
    }
}
