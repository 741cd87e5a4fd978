use shared_types::AppConfig;

/// Workspace `config.toml`, embedded so web builds need no file access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Load the app config: embedded file first, then `APP_URL` / `API_URL`.
///
/// A malformed file is logged and replaced by defaults.
pub fn load_config() -> AppConfig {
    let config = AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid config.toml, using defaults");
        AppConfig::default()
    });

    let app_url = runtime_env("APP_URL").or_else(|| option_env!("APP_URL").map(str::to_string));
    let api_url = runtime_env("API_URL").or_else(|| option_env!("API_URL").map(str::to_string));

    config.with_overrides(app_url, api_url)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_env(_key: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        assert!(AppConfig::from_toml(CONFIG_TOML).is_ok());
    }
}
