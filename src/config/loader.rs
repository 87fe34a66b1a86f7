// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_LIST_KEY, DEFAULT_LOG_FILTER};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Application configuration.
///
/// # Fields
/// * `app_name` - Display name of the application
/// * `service_url` - Base URL that relative request paths are appended to
/// * `auth_token` - Bearer token attached to every request (optional)
/// * `list_key` - Payload key holding the items of list responses (optional, defaults to "list")
/// * `log_filter` - tracing filter used when RUST_LOG is unset (optional, defaults to "info")
///
/// # Example
/// ```yaml
/// app_name: "User Admin"
/// service_url: "http://localhost:8080/rs/"
/// auth_token: "eyJhbGciOi..."
/// list_key: users
/// log_filter: "the_bulletin=debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app_name: String,
    pub service_url: String,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_list_key")]
    pub list_key: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_list_key() -> String {
    DEFAULT_LIST_KEY.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Config {
    /// Minimal configuration for a service URL, with every optional value defaulted.
    pub fn for_service(app_name: impl Into<String>, service_url: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            service_url: service_url.into(),
            auth_token: None,
            list_key: default_list_key(),
            log_filter: default_log_filter(),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "app_name must not be blank".to_string(),
            });
        }
        if self.service_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "service_url must not be blank".to_string(),
            });
        }
        if self.list_key.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "list_key must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Config::from_yaml_str(&content)
}

/// Load a config from a YAML file and check that its values are usable
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}
