//! Event-driven re-filtering of the release board.

use regex::Regex;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::config::RELEASES_PAGE_PATTERN;
use crate::filter::board::ReleaseBoard;
use crate::filter::engine::{apply_filter, notice_message};
use crate::settings::store::{Settings, SettingsStore};
use crate::settings::update::SettingsUpdate;

/// Signals from the host rendering the dashboard.
///
/// `ChildListChanged` fires after the release-list container re-renders and
/// `Navigated` after a single-page navigation has settled, so panels are
/// readable the moment an event arrives and no additional delay is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Initial render is complete.
    Ready { page_url: String },
    /// The release-list container changed its direct children.
    ChildListChanged,
    /// The page moved to a new URL.
    Navigated { page_url: String },
}

/// Re-applies the filter whenever the board reports a change.
///
/// Settings are loaded once and then cached; an incoming [`SettingsUpdate`]
/// drops the cache so the next pass reads fresh values. Bursts of queued
/// events collapse into a single pass.
pub struct FilterWatcher<'a> {
    board: &'a mut dyn ReleaseBoard,
    store: &'a SettingsStore,
    releases_page: Regex,
    page_url: Option<String>,
    cached: Option<Settings>,
}

impl<'a> FilterWatcher<'a> {
    pub fn new(board: &'a mut dyn ReleaseBoard, store: &'a SettingsStore) -> Self {
        Self {
            board,
            store,
            releases_page: Regex::new(RELEASES_PAGE_PATTERN).unwrap(),
            page_url: None,
            cached: None,
        }
    }

    /// Process board events and settings updates until the event channel
    /// closes.
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<BoardEvent>,
        mut updates: mpsc::UnboundedReceiver<SettingsUpdate>,
    ) {
        let mut updates_open = true;

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    self.absorb(event);
                    // Drain whatever else is already queued before filtering once.
                    while let Ok(event) = events.try_recv() {
                        self.absorb(event);
                    }
                    self.refilter();
                }
                update = updates.recv(), if updates_open => {
                    match update {
                        Some(update) => self.invalidate(update),
                        None => updates_open = false,
                    }
                }
            }
        }
    }

    fn absorb(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::Ready { page_url } | BoardEvent::Navigated { page_url } => {
                debug!("Page is now {}", page_url);
                self.page_url = Some(page_url);
            }
            BoardEvent::ChildListChanged => {}
        }
    }

    /// A settings update only invalidates the cached snapshot; the carried
    /// values take effect on the next board event.
    fn invalidate(&mut self, update: SettingsUpdate) {
        debug!("Settings changed ({:?}); dropping cached snapshot", update);
        self.cached = None;
    }

    fn on_releases_page(&self) -> bool {
        self.page_url
            .as_deref()
            .is_some_and(|url| self.releases_page.is_match(url))
    }

    fn refilter(&mut self) {
        if !self.on_releases_page() {
            debug!("Not a releases page; skipping filter");
            self.board.hide_notice();
            return;
        }

        if self.cached.is_none() {
            match self.store.load() {
                Ok(settings) => self.cached = Some(settings),
                Err(e) => {
                    error!("Failed to load settings: {}", e);
                    return;
                }
            }
        }
        let Some(settings) = self.cached.as_ref() else {
            return;
        };

        apply_filter(self.board, &settings.official_package_name);
        self.board
            .show_notice(&notice_message(&settings.official_package_name));
    }
}
