use serde::{Deserialize, Serialize};

/// Feature flags read from `config.toml`.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub welsh_language: bool,
    #[serde(default)]
    pub document_upload: bool,
    #[serde(default)]
    pub telemetry: bool,
}

impl FeatureFlags {
    /// Look a flag up by its config key. Unknown keys are off.
    pub fn is_enabled(&self, name: &str) -> bool {
        match name {
            "welsh_language" => self.welsh_language,
            "document_upload" => self.document_upload,
            "telemetry" => self.telemetry,
            _ => false,
        }
    }
}

/// Where the case-management API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseApiSettings {
    #[serde(default = "default_case_api_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CaseApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_case_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_case_api_url() -> String {
    "http://localhost:4550".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSettings {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default)]
    pub secure_cookie: bool,
    /// Idle time after which a session is forgotten.
    #[serde(default = "default_session_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure_cookie: false,
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

pub const DEFAULT_SESSION_TTL_SECS: u64 = 8 * 60 * 60;

fn default_session_ttl_secs() -> u64 {
    DEFAULT_SESSION_TTL_SECS
}

fn default_cookie_name() -> String {
    "et3-session".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadSettings {
    /// Largest accepted upload, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_max_upload_bytes() -> usize {
    80 * 1024 * 1024
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub case_api: CaseApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub uploads: UploadSettings,
}
