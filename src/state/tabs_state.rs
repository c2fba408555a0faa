//! TabsState - Dashboard Tab Strip Selection

use crate::app::navigation::DashboardTab;

/// Selection state for the dashboard tab strip
///
/// When `interactive` is false the strip is decorative and selection requests
/// are ignored, so the active tab stays on its initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsState {
    active: DashboardTab,
    interactive: bool,
}

impl Default for TabsState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TabsState {
    pub fn new(interactive: bool) -> Self {
        Self {
            active: DashboardTab::Overview,
            interactive,
        }
    }

    /// Currently highlighted tab
    pub fn active(&self) -> DashboardTab {
        self.active
    }

    /// Select a tab. Returns whether the selection changed.
    pub fn select(&mut self, tab: DashboardTab) -> bool {
        if !self.interactive || self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview() {
        assert_eq!(TabsState::new(true).active(), DashboardTab::Overview);
        assert_eq!(TabsState::default().active(), DashboardTab::Overview);
    }

    #[test]
    fn inert_strip_ignores_selection() {
        let mut tabs = TabsState::new(false);
        for tab in DashboardTab::all() {
            assert!(!tabs.select(*tab));
            assert_eq!(tabs.active(), DashboardTab::Overview);
        }
    }

    #[test]
    fn interactive_strip_moves_selection() {
        let mut tabs = TabsState::new(true);
        assert!(tabs.select(DashboardTab::Reports));
        assert_eq!(tabs.active(), DashboardTab::Reports);

        // Re-selecting the active tab is a no-op
        assert!(!tabs.select(DashboardTab::Reports));

        assert!(tabs.select(DashboardTab::Overview));
        assert_eq!(tabs.active(), DashboardTab::Overview);
    }
}
