use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::notify::DuplicatePolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_fail_on_repeated_action() -> bool {
    true
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/synapse")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_fail_on_repeated_action")]
    pub fail_on_repeated_action: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fail_on_repeated_action: default_fail_on_repeated_action(),
        }
    }
}

impl RegistryConfig {
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.fail_on_repeated_action {
            DuplicatePolicy::Strict
        } else {
            DuplicatePolicy::Permissive
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            stderr_warn_enabled: true,
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Config = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, LoggingConfig, LoggingRotation, RegistryConfig};
    use crate::notify::DuplicatePolicy;

    #[test]
    fn registry_config_defaults_to_strict_policy() {
        let config = RegistryConfig::default();
        assert!(config.fail_on_repeated_action);
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::Strict);
    }

    #[test]
    fn permissive_policy_is_derived_from_disabled_flag() {
        let parsed: Config = serde_json::from_value(serde_json::json!({
            "registry": {
                "fail_on_repeated_action": false
            }
        }))
        .expect("config should deserialize");
        assert_eq!(
            parsed.registry.duplicate_policy(),
            DuplicatePolicy::Permissive
        );
    }

    #[test]
    fn logging_config_defaults_match_contract() {
        let config = LoggingConfig::default();
        assert_eq!(config.dir, std::path::PathBuf::from("./logs/synapse"));
        assert_eq!(config.filter, "info");
        assert_eq!(config.rotation, LoggingRotation::Daily);
        assert!(config.stderr_warn_enabled);
    }

    #[test]
    fn logging_rotation_hourly_is_deserialized() {
        let parsed: Config = serde_json::from_value(serde_json::json!({
            "logging": {
                "rotation": "hourly"
            }
        }))
        .expect("config should deserialize");
        assert_eq!(parsed.logging.rotation, LoggingRotation::Hourly);
    }
}
