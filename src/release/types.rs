use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

/// One published release as returned by the releases endpoint.
///
/// Selection only looks at `version` and the key set of `version_info`; the
/// per-package metadata values and the timestamps ride along unexamined.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub version: String,

    /// Package identifier to per-package metadata. Membership of a package
    /// name in this map is what marks a release as belonging to that package.
    #[serde(default)]
    pub version_info: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub date_released: Option<DateTime<Utc>>,
}
