//! Colors - Smite Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Smite color palette (dark) - All colors are accessed via associated functions
pub struct SmiteColors;

impl SmiteColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0x09090b) }
    /// Cards, sidebar and header
    pub fn card() -> Rgba { rgb(0x111113) }
    /// Hover and active navigation background
    pub fn accent() -> Rgba { rgb(0x27272a) }

    // Text colors
    /// Primary text
    pub fn foreground() -> Rgba { rgb(0xfafafa) }
    /// Secondary text
    pub fn muted_foreground() -> Rgba { rgb(0xa1a1aa) }
    /// Text on primary backgrounds
    pub fn primary_foreground() -> Rgba { rgb(0x18181b) }

    // Brand
    /// Primary (active tab underline, signed-in avatar)
    pub fn primary() -> Rgba { rgb(0xfafafa) }
    /// Chart bars
    pub fn chart() -> Rgba { rgb(0x2a9d90) }

    // Status colors
    /// Success - Emerald
    pub fn success() -> Rgba { rgb(0x10b981) }
    /// Success badge background
    pub fn success_bg() -> Rgba { rgba(0x10b9811a) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Warning badge background
    pub fn warning_bg() -> Rgba { rgba(0xf59e0b1a) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0x27272a) }

    /// Fully transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }
}
