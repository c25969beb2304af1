use thiserror::Error;

use crate::settings::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Could not find project ID in URL")]
    MissingProject,

    #[error("API key is missing")]
    MissingApiKey,

    #[error("Settings error: {0}")]
    Store(#[from] StoreError),
}
