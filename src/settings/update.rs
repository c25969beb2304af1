//! One-way settings-change notification, resolver side to filter side.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// Message sent after the popup-side flow saves new values.
///
/// The filter side only uses its arrival to drop the cached settings
/// snapshot; the carried values are not acted upon beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SettingsUpdate {
    #[serde(rename_all = "camelCase")]
    UpdateSettings {
        latest_release_value: Option<String>,
        filter_latest: bool,
    },
}

/// Sending half of the notification channel.
///
/// Sends become no-ops once every receiver is gone, so the resolver side can
/// run without a filter side listening.
#[derive(Clone)]
pub struct UpdateSender {
    tx: mpsc::UnboundedSender<SettingsUpdate>,
}

impl UpdateSender {
    pub fn send(&self, update: SettingsUpdate) {
        if self.tx.send(update).is_err() {
            debug!("No filter side is listening for settings updates");
        }
    }
}

/// Create the notification channel.
pub fn update_channel() -> (UpdateSender, mpsc::UnboundedReceiver<SettingsUpdate>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UpdateSender { tx }, rx)
}
