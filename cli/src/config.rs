// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use tokio::fs;

use slotbook_core::{APP_NAME, Config as CoreConfig};

const SLOTBOOK_CONFIG_ENV: &str = "SLOTBOOK_CONFIG";

/// Locates and parses the configuration file.
///
/// Resolution order: `--config`, the `SLOTBOOK_CONFIG` environment
/// variable, then the user config directory. A missing default file is
/// not an error; the defaults apply.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(SLOTBOOK_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        config.exists().then_some(config)
    };

    let Some(path) = path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(CoreConfig::default());
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?;
    let raw: ConfigRaw =
        toml::from_str(&content).map_err(|e| format!("Failed to parse config: {e}"))?;
    Ok(raw.core)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
