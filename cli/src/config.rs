// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use packsmart_core::{APP_NAME, Config as CoreConfig};

const PACKSMART_CONFIG_ENV: &str = "PACKSMART_CONFIG";
const PACKSMART_DEV_ENV: &str = "PACKSMART_DEV";

const PACKSMART_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const PACKSMART_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locate and parse the configuration.
///
/// Lookup order: the explicit path, then `PACKSMART_CONFIG`, then the default
/// location. A missing file at the default location yields the built-in
/// defaults, an explicit path must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(PACKSMART_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({PACKSMART_DEV_ENV} is set): config must be explicitly specified via --config or {PACKSMART_CONFIG_ENV} environment variable",
            ).into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| format!("Failed to parse config: {e}").into())
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(PACKSMART_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if PACKSMART_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if PACKSMART_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            PACKSMART_DEV_ENV,
            val,
            PACKSMART_DEV_VALID_TRUE.join(", "),
            PACKSMART_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
