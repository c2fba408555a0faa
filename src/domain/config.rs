//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::i18n::Locale;

/// Main application configuration
///
/// Every field has a default so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Locale code ("en" or "zh-CN"); falls back to the system locale
    pub locale: Option<String>,
    /// Whether the sidebar starts open
    pub sidebar_open: bool,
    /// Tab strip behaviour
    pub tabs: TabsConfig,
    /// Main window size
    pub window: WindowConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: None,
            sidebar_open: true,
            tabs: TabsConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Resolve the configured locale, falling back to the system locale
    pub fn resolve_locale(&self) -> Locale {
        self.locale
            .as_deref()
            .filter(|code| !code.trim().is_empty())
            .and_then(Locale::from_code)
            .unwrap_or_else(Locale::system)
    }
}

/// Tab strip configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Whether clicking a tab moves the highlight
    pub interactive: bool,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_sidebar_and_inert_tabs() {
        let config = DashboardConfig::default();
        assert!(config.sidebar_open);
        assert!(!config.tabs.interactive);
        assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn explicit_locale_wins() {
        let config = DashboardConfig {
            locale: Some("zh-CN".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_locale(), Locale::ZhCN);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: DashboardConfig = toml::from_str("[tabs]\ninteractive = true\n")
            .expect("valid toml");
        assert!(config.tabs.interactive);
        assert!(config.sidebar_open);
        assert_eq!(config.window, WindowConfig::default());
    }
}
