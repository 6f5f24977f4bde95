// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Configuration record and its TOML persistence.
//!
//! The editor reads the record once at startup and writes the segment projection back into it
//! after every mutation; the file itself is only written on quit.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{non_break_count, LINE_BREAK_MARKER};

pub const DEFAULT_SEPARATOR: &str = " | ";

const CONFIG_DIR: &str = "cchline";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SEGMENT_ORDER: &[(&str, bool)] = &[
    ("model", true),
    ("directory", true),
    ("git", true),
    ("context_window", true),
    ("usage", false),
    ("cost", false),
    ("session", false),
    ("output_style", false),
    ("update", false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Default,
    NerdFont,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Default => Self::NerdFont,
            Self::NerdFont => Self::Default,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    pub separator: String,
    pub segment_order: Vec<String>,
    pub segment_enabled: Vec<bool>,
    pub cch_url: String,
    pub cch_api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::NerdFont,
            separator: DEFAULT_SEPARATOR.to_owned(),
            segment_order: default_order(),
            segment_enabled: DEFAULT_SEGMENT_ORDER.iter().map(|(_, enabled)| *enabled).collect(),
            cch_url: String::new(),
            cch_api_key: String::new(),
        }
    }
}

/// On-disk shape: the record plus the per-segment `[segments]` table older files carry.
#[derive(Deserialize)]
struct StoredConfig {
    #[serde(flatten)]
    config: Config,
    #[serde(default)]
    segments: Option<BTreeMap<String, bool>>,
}

impl StoredConfig {
    /// Fills an empty order with the default one and derives missing enabled flags from
    /// `[segments]`. Flags that came with an empty order are dropped.
    fn into_config(self) -> Config {
        let Self { mut config, segments } = self;
        let order_missing = config.segment_order.is_empty();
        if order_missing {
            config.segment_order = default_order();
        }

        let derive = order_missing || config.segment_enabled.is_empty();
        if let Some(toggles) = segments.filter(|_| derive) {
            tracing::debug!("Deriving segment flags from the [segments] table");
            config.segment_enabled = config
                .segment_order
                .iter()
                .filter(|name| name.as_str() != LINE_BREAK_MARKER)
                .map(|name| toggles.get(name).copied().unwrap_or_else(|| default_enabled(name)))
                .collect();
        } else if order_missing {
            config.segment_enabled = Config::default().segment_enabled;
        }
        config
    }
}

fn default_order() -> Vec<String> {
    DEFAULT_SEGMENT_ORDER.iter().map(|(name, _)| (*name).to_owned()).collect()
}

/// Default flag of a built-in segment; anything else starts enabled.
fn default_enabled(name: &str) -> bool {
    DEFAULT_SEGMENT_ORDER
        .iter()
        .find(|(default, _)| *default == name)
        .map_or(true, |(_, enabled)| *enabled)
}

// Keeps the API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.cch_api_key.is_empty() { "None" } else { "[REDACTED]" };
        f.debug_struct("Config")
            .field("theme", &self.theme)
            .field("separator", &self.separator)
            .field("segment_order", &self.segment_order)
            .field("segment_enabled", &self.segment_enabled)
            .field("cch_url", &self.cch_url)
            .field("cch_api_key", &api_key)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config at {path:?}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cannot parse config at {path:?}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("cannot serialize config for {path:?}: {source}")]
    Serialize { path: PathBuf, source: toml::ser::Error },
    #[error("cannot write config to {path:?}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("cannot determine home directory")]
    NoHomeDir,
}

impl ConfigError {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::NoHomeDir => None,
        }
    }
}

impl Config {
    /// Restores the invariants the editor relies on.
    ///
    /// The enabled flags are padded with `true` (or truncated) to one flag per non-marker
    /// segment, and an empty separator falls back to the default one.
    pub fn normalize(&mut self) {
        if self.separator.is_empty() {
            self.separator = DEFAULT_SEPARATOR.to_owned();
        }
        let expected = non_break_count(&self.segment_order);
        self.segment_enabled.resize(expected, true);
    }

    pub fn set_segments(&mut self, order: Vec<String>, enabled: Vec<bool>) {
        self.segment_order = order;
        self.segment_enabled = enabled;
    }

    /// Reads and normalizes the config at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };

        let stored: StoredConfig = toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        let mut config = stored.into_config();
        config.normalize();
        Ok(config)
    }

    /// Like [`Config::load_from`], but any failure falls back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    /// Writes the config through a temp file renamed into place.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let serialized = toml::to_string_pretty(self)
            .map_err(|source| ConfigError::Serialize { path: path.to_path_buf(), source })?;

        let write_err = |source| ConfigError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&tmp_path).map_err(write_err)?;
        file.write_all(serialized.as_bytes()).map_err(write_err)?;
        drop(file);
        fs::rename(&tmp_path, path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            write_err(source)
        })?;

        tracing::info!(path = %path.display(), "Config saved");
        Ok(())
    }
}

/// `~/.claude/cchline`, where the config and log files live.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().map(|home| home.join(".claude").join(CONFIG_DIR)).ok_or(ConfigError::NoHomeDir)
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir().map(|dir| dir.join(CONFIG_FILENAME))
}
