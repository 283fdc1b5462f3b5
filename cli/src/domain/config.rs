//! Domain types and validators for Castellan configuration.
//!
//! Pure functions only — no I/O, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["controller.address"];

/// Management endpoint dialed when neither an argument nor a configured
/// address is given.
pub const DEFAULT_CONTROLLER_ADDRESS: &str = "http://localhost:9990/management";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.castellan/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CastellanConfig {
    /// Controller settings.
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Controller connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Management endpoint URL used by `castellan connect`.
    #[serde(default = "default_controller_address")]
    pub address: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            address: default_controller_address(),
        }
    }
}

fn default_controller_address() -> String {
    DEFAULT_CONTROLLER_ADDRESS.to_string()
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    if key == "controller.address" && !is_management_url(value) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: "http:// or https:// URLs".to_string(),
        }
        .into());
    }
    Ok(())
}

fn is_management_url(value: &str) -> bool {
    value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
