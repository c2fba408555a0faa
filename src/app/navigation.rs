//! Navigation - Sidebar Entries and Dashboard Tabs
//!
//! Neither enum routes anywhere: the sidebar links and the tab strip only
//! describe what is drawn.

use crate::assets::AppIcon;

/// Entries in the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Dashboard,
    Tunnels,
    Users,
    Settings,
    /// Pinned to the sidebar footer
    Logout,
}

impl NavItem {
    pub fn icon(&self) -> AppIcon {
        match self {
            NavItem::Dashboard => AppIcon::LayoutDashboard,
            NavItem::Tunnels => AppIcon::Network,
            NavItem::Users => AppIcon::Users,
            NavItem::Settings => AppIcon::Settings,
            NavItem::Logout => AppIcon::LogOut,
        }
    }

    /// Get the translation key for the entry label
    pub fn title_key(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "nav.dashboard",
            NavItem::Tunnels => "nav.tunnels",
            NavItem::Users => "nav.users",
            NavItem::Settings => "nav.settings",
            NavItem::Logout => "nav.logout",
        }
    }

    /// Entries in the main navigation list, top to bottom
    pub fn primary() -> &'static [NavItem] {
        &[
            NavItem::Dashboard,
            NavItem::Tunnels,
            NavItem::Users,
            NavItem::Settings,
        ]
    }

    /// Entries in the sidebar footer
    pub fn footer() -> &'static [NavItem] {
        &[NavItem::Logout]
    }
}

/// Tabs shown above the dashboard widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Analytics,
    Reports,
    Notifications,
}

impl DashboardTab {
    pub fn title_key(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "tab.overview",
            DashboardTab::Analytics => "tab.analytics",
            DashboardTab::Reports => "tab.reports",
            DashboardTab::Notifications => "tab.notifications",
        }
    }

    pub fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Overview,
            DashboardTab::Analytics,
            DashboardTab::Reports,
            DashboardTab::Notifications,
        ]
    }
}
