//! Application configuration
//!
//! The defaults are embedded as TOML and parsed once on first access.
//! `ADMIN_CONSOLE_API_BASE` set at compile time overrides `[api] base_url`.

use serde::Deserialize;
use std::sync::OnceLock;

use contracts::domain::common::ApprovalConvention;

const DEFAULT_CONFIG: &str = r#"
[api]
# Empty: derive <protocol>//<hostname>:<port> from the window location
base_url = ""
port = 3000
timeout_ms = 30000

[notifications]
success_close_ms = 2000

[submissions]
# Value written to `Approved` by the approve action
approved_value = 0
"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub notifications: NotificationConfig,
    pub submissions: SubmissionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
    pub timeout_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    pub success_close_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionConfig {
    pub approved_value: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: 3000,
                timeout_ms: 30_000,
            },
            notifications: NotificationConfig {
                success_close_ms: 2_000,
            },
            submissions: SubmissionConfig { approved_value: 0 },
        }
    }
}

impl AppConfig {
    pub fn approval(&self) -> ApprovalConvention {
        ApprovalConvention::new(self.submissions.approved_value)
    }

    fn with_api_base(mut self, base_url: Option<&str>) -> Self {
        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            self.api.base_url = base.trim_end_matches('/').to_string();
        }
        self
    }
}

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Embedded defaults plus the compile-time API base override
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    Ok(parse_config(DEFAULT_CONFIG)?.with_api_base(option_env!("ADMIN_CONSOLE_API_BASE")))
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        load_config().unwrap_or_else(|e| {
            log::error!("Failed to parse embedded config, using defaults: {}", e);
            AppConfig::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).expect("embedded config must parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_api_base_override() {
        let config = AppConfig::default().with_api_base(Some("https://api.example.org/"));
        assert_eq!(config.api.base_url, "https://api.example.org");

        let config = AppConfig::default().with_api_base(Some("  "));
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_partial_config_is_rejected() {
        assert!(parse_config("[api]\nport = 8080\n").is_err());
    }

    #[test]
    fn test_approval_uses_configured_value() {
        let mut config = AppConfig::default();
        config.submissions.approved_value = 1;
        assert_eq!(config.approval().is_approved("1"), Some(true));
        assert_eq!(config.approval().is_approved("0"), Some(false));
    }
}
