//! The show/hide filter pass and its override controls.

use tracing::{info, warn};

use crate::filter::board::ReleaseBoard;

/// Counters from one filter pass, for logging and assertions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub shown: usize,
    pub hidden: usize,
    pub skipped: usize,
}

/// Warning text shown while panels are hidden.
pub fn notice_message(official_package: &str) -> String {
    format!(
        "Some releases have been hidden. Showing releases that match package name: {official_package}"
    )
}

/// Hide every panel whose package name differs from `official_package`.
///
/// The match is exact string equality on the trimmed panel text. Panels
/// without a readable package name are left untouched. Applying the same
/// settings twice yields the same visible set as applying them once.
pub fn apply_filter(board: &mut dyn ReleaseBoard, official_package: &str) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for id in board.panel_ids() {
        let Some(package_name) = board.package_name(id) else {
            warn!("Release panel {} has no package name; skipping", id);
            outcome.skipped += 1;
            continue;
        };

        let hidden = package_name.trim() != official_package;
        board.set_hidden(id, hidden);
        if hidden {
            outcome.hidden += 1;
        } else {
            outcome.shown += 1;
        }
    }

    info!(
        "Filtered release panels: {} shown, {} hidden, {} skipped",
        outcome.shown, outcome.hidden, outcome.skipped
    );
    outcome
}

/// Unhide every panel, regardless of package name.
pub fn show_all(board: &mut dyn ReleaseBoard) {
    for id in board.panel_ids() {
        board.set_hidden(id, false);
    }
}

/// The override control on the warning notice: drop the filter and dismiss
/// the warning.
pub fn remove_filter(board: &mut dyn ReleaseBoard) {
    show_all(board);
    board.hide_notice();
}
