//! Configuration loading and default template generation.
//!
//! The broadcast endpoints and API key are process-wide configuration
//! supplied at startup, not literals baked into the selector; the defaults
//! keep the historical behavior. The API key may be given as a `$VAR` /
//! `${VAR}` environment reference, resolved at load time.
//!
//! # Configuration File Format
//!
//! ```toml
//! [broadcast]
//! api_key = "$PUSHTX_API_KEY"
//! connect_timeout_secs = 10
//! read_timeout_secs = 30
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::broadcast::BroadcastConfig;
use crate::error::{Error, Result};

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Push-transaction endpoint configuration.
    #[serde(default)]
    pub broadcast: BroadcastConfig,
}

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
fn resolve_env(value: &str) -> Result<String> {
    // ${VAR} syntax
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        return std::env::var(var_name).map_err(|_| {
            Error::config(format!(
                "env var '{var_name}' not found (referenced as '{value}')"
            ))
        });
    }
    // $VAR syntax
    if value.starts_with('$') && value.len() > 1 {
        let var_name = &value[1..];
        if var_name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return std::env::var(var_name).map_err(|_| {
                Error::config(format!(
                    "env var '{var_name}' not found (referenced as '{value}')"
                ))
            });
        }
    }
    // Literal value
    Ok(value.to_owned())
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be resolved, read, or
/// parsed, or if an environment reference in it cannot be resolved.
pub fn load_config(path: &Path) -> Result<Config> {
    let config_path = path
        .canonicalize()
        .map_err(|e| Error::config_with(format!("failed to resolve '{}'", path.display()), e))?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(format!("failed to read '{}'", config_path.display()), e)
    })?;
    let mut config: Config = toml::from_str(&content).map_err(|e| {
        Error::config_with(format!("failed to parse '{}'", config_path.display()), e)
    })?;
    config.broadcast.api_key = resolve_env(&config.broadcast.api_key)?;
    Ok(config)
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    let defaults = BroadcastConfig::default();
    format!(
        r#"# pa-provider configuration

[broadcast]
# Push-transaction URL templates. "{{hex}}" is replaced with the raw
# transaction hex; the mainnet template additionally takes "{{key}}".
mainnet_template = "{mainnet}"
testnet_template = "{testnet}"

# API key for the mainnet endpoint.
# Values support environment variable references: "$VAR" or "${{VAR}}"
api_key = "{key}"

# HTTP transport timeouts, in seconds.
connect_timeout_secs = {connect}
read_timeout_secs = {read}
"#,
        mainnet = defaults.mainnet_template,
        testnet = defaults.testnet_template,
        key = defaults.api_key,
        connect = defaults.connect_timeout_secs,
        read = defaults.read_timeout_secs,
    )
}
