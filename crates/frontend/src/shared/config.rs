//! Frontend configuration.
//!
//! Values are baked in at compile time through environment variables
//! (`CRM_API_BASE`, `CRM_MOBILE_BREAKPOINT`, `CRM_DEFAULT_LOCALE`) and fall
//! back to defaults that work for a local backend on port 3000.

use crate::shared::i18n::Locale;
use once_cell::sync::Lazy;

/// Viewport width (px) below which the sidebar is an overlay
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Explicit API base URL; `None` means "same host, port 3000"
    pub api_base: Option<String>,
    pub mobile_breakpoint_px: f64,
    pub default_locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT,
            default_locale: Locale::En,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CRM_API_BASE"),
            option_env!("CRM_MOBILE_BREAKPOINT"),
            option_env!("CRM_DEFAULT_LOCALE"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        mobile_breakpoint: Option<&str>,
        default_locale: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        let mobile_breakpoint_px = mobile_breakpoint
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| *v > 0.0)
            .unwrap_or(defaults.mobile_breakpoint_px);
        let default_locale = default_locale
            .and_then(Locale::from_code)
            .unwrap_or(defaults.default_locale);

        Self {
            api_base,
            mobile_breakpoint_px,
            default_locale,
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_values_are_normalized() {
        let config = AppConfig::from_values(Some("https://crm.example.com/ "), Some("1024"), Some("ar"));
        assert_eq!(config.api_base.as_deref(), Some("https://crm.example.com"));
        assert_eq!(config.mobile_breakpoint_px, 1024.0);
        assert_eq!(config.default_locale, Locale::Ar);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = AppConfig::from_values(Some(""), Some("wide"), Some("fr"));
        assert_eq!(config.api_base, None);
        assert_eq!(config.mobile_breakpoint_px, DEFAULT_MOBILE_BREAKPOINT);
        assert_eq!(config.default_locale, Locale::En);
    }
}
