// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::Error;
use crate::slots::DEFAULT_SLOT_INTERVAL_MINUTES;

/// The name of the Slotbook application.
pub const APP_NAME: &str = "slotbook";

/// Configuration for the Slotbook application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory for the SQLite database. Defaults to the user state
    /// directory; `None` after normalization keeps state in memory.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Spacing between bookable slot starts, in minutes.
    #[serde(default = "default_slot_interval")]
    pub slot_interval_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            slot_interval_minutes: default_slot_interval(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        match &self.state_dir {
            Some(dir) => self.state_dir = Some(expand_path(dir)?),

            None => match get_state_dir() {
                Ok(dir) => self.state_dir = Some(dir.join(APP_NAME)),
                Err(e) => tracing::warn!("failed to get state directory: {e}"),
            },
        };

        if self.slot_interval_minutes == 0 {
            tracing::warn!("slot interval is zero; every date will offer no slots");
        }

        Ok(())
    }
}

fn default_slot_interval() -> u32 {
    DEFAULT_SLOT_INTERVAL_MINUTES
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Config("invalid path encoding".into()))?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::Config("user-specific home directory not found".into()))
}

fn get_state_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| Error::Config("user-specific state directory not found".into()))
}
