use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3002";

/// Parse `config.toml` contents. Anything unparseable falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Apply `CASE_API_URL`, `MAX_UPLOAD_BYTES` and `COOKIE_SECURE` on top of the file.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("CASE_API_URL").filter(|v| !v.is_empty()) {
        config.case_api.base_url = url;
    }
    if let Some(max) = lookup("MAX_UPLOAD_BYTES") {
        match max.parse() {
            Ok(bytes) => config.uploads.max_bytes = bytes,
            Err(_) => tracing::warn!(value = %max, "ignoring invalid MAX_UPLOAD_BYTES"),
        }
    }
    if let Some(secure) = lookup("COOKIE_SECURE") {
        config.session.secure_cookie = matches!(secure.as_str(), "1" | "true" | "TRUE" | "yes");
    }
}

/// Read `config.toml` and the environment once and keep the result for the
/// life of the process. Later calls return the same config.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(error = %e, "{CONFIG_PATH} not found, using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        tracing::info!(
            case_api = %config.case_api.base_url,
            features = ?config.features,
            "configuration loaded"
        );
        config
    })
}

pub fn bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
}
