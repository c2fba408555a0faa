//! i18n - Internationalization Module
//!
//! Thin wrapper over `rust-i18n`; translations live in `locales/app.yml`.

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Locale code as used in the translation files
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Parse a locale tag such as `en`, `en-US`, `zh_CN` or `zh-Hans-CN`
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match lang.as_str() {
            "en" => Some(Locale::EnUS),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Best match for the operating system's user locale
    pub fn system() -> Self {
        let current = locale_config::Locale::current().to_string();
        current
            .split(',')
            .find_map(Self::from_code)
            .unwrap_or_default()
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    t!(key, locale = locale.code()).to_string().into()
}

/// Translate a key that carries a `%{count}` placeholder
pub fn t_count(locale: Locale, key: &str, count: u64) -> SharedString {
    t!(key, locale = locale.code(), count = count).to_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_region_variants() {
        assert_eq!(Locale::from_code("en"), Some(Locale::EnUS));
        assert_eq!(Locale::from_code("en-GB"), Some(Locale::EnUS));
        assert_eq!(Locale::from_code("zh_CN"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("zh-Hans-CN"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn toggled_switches_between_both_locales() {
        assert_eq!(Locale::EnUS.toggled(), Locale::ZhCN);
        assert_eq!(Locale::ZhCN.toggled(), Locale::EnUS);
    }

    #[test]
    fn translates_per_locale() {
        assert_eq!(t(Locale::EnUS, "nav.dashboard").as_ref(), "Dashboard");
        assert_eq!(t(Locale::ZhCN, "nav.dashboard").as_ref(), "仪表盘");
    }

    #[test]
    fn count_placeholder_is_interpolated() {
        let text = t_count(Locale::EnUS, "activity.description", 265);
        assert_eq!(text.as_ref(), "You have 265 active connections this month.");
    }
}
