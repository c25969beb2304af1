//! Adapter over the rendered release list.

#[cfg(test)]
use mockall::automock;

/// Index of a release panel within the board's current child list.
pub type PanelId = usize;

/// Trait for the rendered release list the filter operates on.
///
/// Implementations wrap whatever actually renders the dashboard. The filter
/// only needs readable package names and a hidden flag per panel, plus a
/// notice slot for the warning text.
#[cfg_attr(test, automock)]
pub trait ReleaseBoard {
    /// Ids of the currently rendered release panels.
    fn panel_ids(&self) -> Vec<PanelId>;

    /// Package name displayed on a panel, `None` when the text node is
    /// absent.
    fn package_name(&self, id: PanelId) -> Option<String>;

    /// Hide or show one panel.
    fn set_hidden(&mut self, id: PanelId, hidden: bool);

    /// Show the warning notice with the given text, replacing any previous
    /// one.
    fn show_notice(&mut self, message: &str);

    /// Hide the warning notice if present.
    fn hide_notice(&mut self);
}
