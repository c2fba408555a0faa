//! SidebarState - Collapsible Sidebar State

use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_OPEN_WIDTH};

/// Visibility of the navigation sidebar
///
/// Owned by the workspace and passed by value to the sidebar when rendering.
/// Both states are stable; only [`SidebarState::toggle`] moves between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    /// Full width with logo and text labels
    #[default]
    Open,
    /// Icon-only rail
    Collapsed,
}

impl SidebarState {
    /// Initial state from the `sidebar_open` config flag
    pub fn from_open(open: bool) -> Self {
        if open {
            SidebarState::Open
        } else {
            SidebarState::Collapsed
        }
    }

    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Open,
        }
    }

    /// Flip the state in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SidebarState::Open)
    }

    /// Sidebar width in pixels
    pub fn width(&self) -> f32 {
        match self {
            SidebarState::Open => SIDEBAR_OPEN_WIDTH,
            SidebarState::Collapsed => SIDEBAR_COLLAPSED_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SidebarState; 2] = [SidebarState::Open, SidebarState::Collapsed];

    #[test]
    fn default_is_open() {
        assert_eq!(SidebarState::default(), SidebarState::Open);
        assert!(SidebarState::default().is_open());
    }

    #[test]
    fn every_toggle_flips() {
        for state in ALL {
            assert_ne!(state.toggled(), state);
        }
    }

    #[test]
    fn double_toggle_restores() {
        for state in ALL {
            let mut s = state;
            s.toggle();
            s.toggle();
            assert_eq!(s, state);
        }
        assert_eq!(SidebarState::Open.toggled().toggled(), SidebarState::Open);
    }

    #[test]
    fn width_follows_state() {
        assert_eq!(SidebarState::Open.width(), SIDEBAR_OPEN_WIDTH);
        assert_eq!(SidebarState::Collapsed.width(), SIDEBAR_COLLAPSED_WIDTH);
        assert!(SidebarState::Collapsed.width() < SidebarState::Open.width());
    }

    #[test]
    fn from_open_flag() {
        assert_eq!(SidebarState::from_open(true), SidebarState::Open);
        assert_eq!(SidebarState::from_open(false), SidebarState::Collapsed);
    }
}
