//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar width in pixels while open
pub const SIDEBAR_OPEN_WIDTH: f32 = 256.0;

/// Sidebar width in pixels while collapsed to icons
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

/// Header height
pub const HEADER_HEIGHT: f32 = 72.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Number of columns in the dashboard grid
pub const GRID_COLUMNS: u16 = 7;

/// Height of the overview chart plot area
pub const CHART_HEIGHT: f32 = 350.0;

/// Shown in place of a missing record field
pub const PLACEHOLDER: &str = "—";

/// Application directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "smite-dashboard";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "smite-dashboard.toml";

/// Log file prefix for the daily rolling appender
pub const LOG_FILE_PREFIX: &str = "smite-dashboard.log";
