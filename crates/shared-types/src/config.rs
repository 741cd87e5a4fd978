use serde::{Deserialize, Serialize};

use crate::label::{LabelConfig, DEFAULT_APP_URL};

/// Feature flags controlling optional header widgets.
///
/// Both default to `true`; a config file only needs to mention the ones it
/// turns off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeatureFlags {
    pub notifications: bool,
    pub theme_toggle: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            notifications: true,
            theme_toggle: true,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Public base URL of the app, used for tracking links.
    pub app_url: Option<String>,
    /// Base URL of the delivery API. Empty means same origin.
    pub api_url: Option<String>,
    pub features: FeatureFlags,
    /// Label options used when the preview page first opens.
    pub label: LabelConfig,
}

impl AppConfig {
    pub fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// Apply `APP_URL` / `API_URL` overrides. Blank values are ignored.
    pub fn with_overrides(mut self, app_url: Option<String>, api_url: Option<String>) -> Self {
        if let Some(url) = app_url.filter(|u| !u.trim().is_empty()) {
            self.app_url = Some(url);
        }
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = Some(url);
        }
        self
    }

    /// Base URL for tracking links, without a trailing slash.
    pub fn tracking_base_url(&self) -> &str {
        self.app_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEFAULT_APP_URL)
    }

    /// Base URL for API calls, without a trailing slash. Empty for same origin.
    pub fn api_base_url(&self) -> &str {
        self.api_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{FontSize, LabelSize};

    #[test]
    fn default_flags_all_true() {
        let flags = FeatureFlags::default();
        assert!(flags.notifications);
        assert!(flags.theme_toggle);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tracking_base_url(), "https://example.com");
        assert_eq!(config.api_base_url(), "");
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml(
            r#"
            app_url = "https://deliveryos.test/"

            [features]
            notifications = false

            [label]
            size = "small"
            fontSize = "large"
            "#,
        )
        .unwrap();
        assert!(!config.features.notifications);
        assert!(config.features.theme_toggle);
        assert_eq!(config.label.size, LabelSize::Small);
        assert_eq!(config.label.font_size, FontSize::Large);
        assert!(config.label.include_qr);
        assert_eq!(config.tracking_base_url(), "https://deliveryos.test");
    }

    #[test]
    fn blank_app_url_falls_back() {
        let config = AppConfig {
            app_url: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(config.tracking_base_url(), "https://example.com");
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = AppConfig::from_toml(r#"app_url = "https://file.test""#)
            .unwrap()
            .with_overrides(Some("https://env.test".into()), Some(String::new()));
        assert_eq!(config.tracking_base_url(), "https://env.test");
        assert_eq!(config.api_url, None);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("app_url = [").is_err());
    }
}
