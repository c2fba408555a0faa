//! Embedded assets for Smite Dashboard
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Icons used by the dashboard, all shipped under `assets/icons`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppIcon {
    LayoutDashboard,
    Network,
    Users,
    Settings,
    LogOut,
    Menu,
    Bell,
    Moon,
    Search,
    Languages,
    DollarSign,
    Activity,
    TrendingUp,
    ArrowUp,
}

impl AppIcon {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            AppIcon::LayoutDashboard => "icons/layout-dashboard.svg",
            AppIcon::Network => "icons/network.svg",
            AppIcon::Users => "icons/users.svg",
            AppIcon::Settings => "icons/settings.svg",
            AppIcon::LogOut => "icons/log-out.svg",
            AppIcon::Menu => "icons/menu.svg",
            AppIcon::Bell => "icons/bell.svg",
            AppIcon::Moon => "icons/moon.svg",
            AppIcon::Search => "icons/search.svg",
            AppIcon::Languages => "icons/languages.svg",
            AppIcon::DollarSign => "icons/dollar-sign.svg",
            AppIcon::Activity => "icons/activity.svg",
            AppIcon::TrendingUp => "icons/trending-up.svg",
            AppIcon::ArrowUp => "icons/arrow-up.svg",
        }
        .into()
    }
}

impl From<AppIcon> for Icon {
    fn from(val: AppIcon) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppIcon; 14] = [
        AppIcon::LayoutDashboard,
        AppIcon::Network,
        AppIcon::Users,
        AppIcon::Settings,
        AppIcon::LogOut,
        AppIcon::Menu,
        AppIcon::Bell,
        AppIcon::Moon,
        AppIcon::Search,
        AppIcon::Languages,
        AppIcon::DollarSign,
        AppIcon::Activity,
        AppIcon::TrendingUp,
        AppIcon::ArrowUp,
    ];

    #[test]
    fn every_icon_is_embedded() {
        for icon in ALL {
            let path = icon.path();
            assert!(Assets::get(&path).is_some(), "missing asset {path}");
        }
    }

    #[test]
    fn unknown_asset_is_an_error() {
        assert!(Assets.load("icons/does-not-exist.svg").is_err());
        assert!(matches!(Assets.load(""), Ok(None)));
    }
}
