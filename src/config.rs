use std::path::PathBuf;

// =============================================================================
// Dashboard constants
// =============================================================================

/// Package name used for filtering when the settings store has none.
pub const DEFAULT_OFFICIAL_PACKAGE: &str = "com.example.webviewapp";

/// Prefix shared by the bogus package names polluting the dashboard.
/// Kept for reference; filtering matches the full official name, not this.
pub const BOGUS_PACKAGE_PREFIX: &str = "cool.supper.app";

/// Base URL of the releases API instance.
pub const DEFAULT_API_BASE: &str = "https://team-se.sentry.io";

/// Organization slug in the releases endpoint path.
pub const DEFAULT_ORG: &str = "team-se";

/// Query string appended to the releases endpoint.
pub const RELEASES_QUERY: &str =
    "adoptionStages=1&flatten=0&per_page=100&status=open&summaryStatsPeriod=30d";

/// URL pattern of the dashboard pages where filtering applies.
pub const RELEASES_PAGE_PATTERN: &str = r"^https://[^/]*\.sentry\.io/explore/releases/.*$";

/// Returns the path to the data directory for release-lens.
/// Uses $XDG_DATA_HOME/release-lens if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/release-lens,
/// or ./release-lens if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the settings database file.
pub fn db_path() -> PathBuf {
    data_dir().join("settings.db")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("release-lens.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("release-lens")
}
