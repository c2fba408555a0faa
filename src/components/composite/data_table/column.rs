//! Column Definition
//!
//! Defines table columns with their header key and width.

use gpui::SharedString;

use crate::i18n::{Locale, t};

/// Column definition for the DataTable
#[derive(Debug, Clone)]
pub struct Column {
    /// Column identifier
    pub id: SharedString,
    /// Translation key of the header label
    pub label_key: &'static str,
    pub width: ColumnWidth,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space, with a minimum in pixels
    Flex { min: f32 },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: 100.0 }
    }
}

impl Column {
    /// Create a new flexible column
    pub fn new(id: impl Into<SharedString>, label_key: &'static str) -> Self {
        Self {
            id: id.into(),
            label_key,
            width: ColumnWidth::default(),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with a minimum
    pub fn flex_width(mut self, min: f32) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }

    /// Translated header label
    pub fn label(&self, locale: Locale) -> SharedString {
        t(locale, self.label_key)
    }
}
