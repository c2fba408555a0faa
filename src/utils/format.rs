//! Format - Formatting Utilities

use gpui::SharedString;

use crate::constants::PLACEHOLDER;

/// Display a record field, substituting the placeholder for missing values
pub fn field_or_placeholder(value: &str) -> SharedString {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        SharedString::from(PLACEHOLDER)
    } else {
        SharedString::from(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_for_missing_fields() {
        assert_eq!(field_or_placeholder("").as_ref(), PLACEHOLDER);
        assert_eq!(field_or_placeholder("   ").as_ref(), PLACEHOLDER);
        assert_eq!(field_or_placeholder(" 10.0.1.45 ").as_ref(), "10.0.1.45");
    }
}
