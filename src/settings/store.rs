//! SQLite-backed settings store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DEFAULT_OFFICIAL_PACKAGE;

/// Storage keys, matching the names the values have always been kept under.
pub const KEY_OFFICIAL_PACKAGE_NAME: &str = "officialPackageName";
pub const KEY_LATEST_RELEASE_VALUE: &str = "latestReleaseValue";
pub const KEY_FILTER_LATEST: &str = "filterLatest";
pub const KEY_SENTRY_API_KEY: &str = "sentryApiKey";

const KNOWN_KEYS: [&str; 4] = [
    KEY_OFFICIAL_PACKAGE_NAME,
    KEY_LATEST_RELEASE_VALUE,
    KEY_FILTER_LATEST,
    KEY_SENTRY_API_KEY,
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Lock poisoned")]
    LockPoisoned,

    #[error("Unknown settings key: {0}")]
    UnknownKey(String),
}

/// Snapshot of all settings, defaults filled in for anything unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The one package name releases are filtered against.
    pub official_package_name: String,
    /// Last resolved latest-release value.
    pub latest_release_value: Option<String>,
    /// User toggle; persisted and read, not consulted by the filter pass.
    pub filter_latest: bool,
    pub sentry_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            official_package_name: DEFAULT_OFFICIAL_PACKAGE.to_string(),
            latest_release_value: None,
            filter_latest: false,
            sentry_api_key: None,
        }
    }
}

/// Key-value store shared by the resolver and filter flows.
///
/// There is no transactional coupling between readers and writers; the last
/// write to a key wins, and readers see whatever is current on their next
/// load.
pub struct SettingsStore {
    conn: Mutex<Connection>,
}

impl SettingsStore {
    pub fn new(db_path: &Path) -> Result<Self, StoreError> {
        info!("Opening settings store at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.create_schema()?;

        Ok(store)
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )
            "#,
            [],
        )?;

        Ok(())
    }

    /// Read one raw value. `None` when the key was never written.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        ensure_known_key(key)?;

        let conn = self.lock_conn()?;
        let result = conn.query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
            row.get(0)
        });

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write one raw value. Last writer wins.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        ensure_known_key(key)?;

        let now = Utc::now().timestamp_millis();
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            (key, value, now),
        )?;

        debug!("Saved setting {}", key);
        Ok(())
    }

    /// Snapshot of all settings, with defaults for anything unset or blank.
    pub fn load(&self) -> Result<Settings, StoreError> {
        let mut settings = Settings::default();

        if let Some(name) = self.get_raw(KEY_OFFICIAL_PACKAGE_NAME)? {
            if !name.is_empty() {
                settings.official_package_name = name;
            }
        }
        if let Some(value) = self.get_raw(KEY_LATEST_RELEASE_VALUE)? {
            settings.latest_release_value = Some(value);
        }
        if let Some(flag) = self.get_raw(KEY_FILTER_LATEST)? {
            settings.filter_latest = flag == "true";
        }
        if let Some(key) = self.get_raw(KEY_SENTRY_API_KEY)? {
            if !key.is_empty() {
                settings.sentry_api_key = Some(key);
            }
        }

        Ok(settings)
    }

    /// Persist the pair of values applied from the popup side.
    pub fn save_applied(
        &self,
        latest_release_value: Option<&str>,
        filter_latest: bool,
    ) -> Result<(), StoreError> {
        if let Some(value) = latest_release_value {
            self.set_raw(KEY_LATEST_RELEASE_VALUE, value)?;
        }
        self.set_raw(KEY_FILTER_LATEST, if filter_latest { "true" } else { "false" })
    }
}

fn ensure_known_key(key: &str) -> Result<(), StoreError> {
    if KNOWN_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(StoreError::UnknownKey(key.to_string()))
    }
}
