// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Registration of cchline as the Claude Code status line.
//!
//! The host reads `statusLine` from `~/.claude/settings.json`. Installing points it at this
//! executable, uninstalling removes the key, and the probe asks the registered command for its
//! version to tell whether it is current.

mod version;

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::{fmt, fs, io};

use serde_json::{json, Map, Value};

pub use version::{parse_version, parse_version_output, ReportedVersion, Version};

const SETTINGS_FILENAME: &str = "settings.json";
const STATUS_LINE_KEY: &str = "statusLine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    NotInstalled,
    InstalledCurrent { installed: Version, current: Version },
    InstalledOutdated { installed: Version, current: Version },
    InstalledUnknownVersion,
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled => f.write_str("not installed"),
            Self::InstalledCurrent { installed, .. } => write!(f, "installed (v{installed})"),
            Self::InstalledOutdated { installed, current } => {
                write!(f, "installed v{installed}, outdated (current v{current})")
            }
            Self::InstalledUnknownVersion => f.write_str("installed (unknown version)"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("cannot resolve the cchline executable: {0}")]
    Executable(#[source] io::Error),
    #[error("cannot read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse {path:?}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("cannot serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("cannot write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot determine home directory")]
    NoHomeDir,
}

/// `~/.claude/settings.json`.
pub fn settings_path() -> Result<PathBuf, InstallError> {
    dirs::home_dir()
        .map(|home| home.join(".claude").join(SETTINGS_FILENAME))
        .ok_or(InstallError::NoHomeDir)
}

/// Canonical path of the running binary, the command the host will invoke.
pub fn current_executable() -> Result<PathBuf, InstallError> {
    let exe = std::env::current_exe().map_err(InstallError::Executable)?;
    exe.canonicalize().map_err(InstallError::Executable)
}

/// Maps `<command> -v` output to a status relative to the running version.
pub fn classify(output: &str, current: Option<Version>) -> InstallStatus {
    match (parse_version_output(output), current) {
        (None, _) => InstallStatus::NotInstalled,
        (Some(ReportedVersion::Release(installed)), Some(current)) if installed >= current => {
            InstallStatus::InstalledCurrent { installed, current }
        }
        (Some(ReportedVersion::Release(installed)), Some(current)) => {
            InstallStatus::InstalledOutdated { installed, current }
        }
        (Some(_), _) => InstallStatus::InstalledUnknownVersion,
    }
}

fn registered_command(settings: &Map<String, Value>) -> Option<&str> {
    settings.get(STATUS_LINE_KEY)?.get("command")?.as_str().filter(|command| !command.is_empty())
}

/// Asks the registered status line command for its version.
///
/// Every failure along the way (no settings, no command, command not runnable) reads as
/// [`InstallStatus::NotInstalled`].
pub async fn probe_install_status(settings_path: &Path) -> InstallStatus {
    let content = match tokio::fs::read_to_string(settings_path).await {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(path = %settings_path.display(), "settings unreadable: {err}");
            return InstallStatus::NotInstalled;
        }
    };
    let Ok(settings) = serde_json::from_str::<Map<String, Value>>(&content) else {
        tracing::debug!(path = %settings_path.display(), "settings are not a JSON object");
        return InstallStatus::NotInstalled;
    };
    let Some(command) = registered_command(&settings) else {
        return InstallStatus::NotInstalled;
    };

    let output = tokio::process::Command::new(command)
        .arg("-v")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await;
    match output {
        Ok(output) if output.status.success() => {
            let status = classify(&String::from_utf8_lossy(&output.stdout), Version::current());
            tracing::info!(command, %status, "Install probe finished");
            status
        }
        Ok(output) => {
            tracing::debug!(command, status = %output.status, "status line command failed");
            InstallStatus::NotInstalled
        }
        Err(err) => {
            tracing::debug!(command, "status line command not runnable: {err}");
            InstallStatus::NotInstalled
        }
    }
}

fn read_settings(path: &Path) -> Result<Option<Map<String, Value>>, InstallError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(InstallError::Read { path: path.to_path_buf(), source }),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| InstallError::Parse { path: path.to_path_buf(), source })
}

fn write_settings(path: &Path, settings: &Map<String, Value>) -> Result<(), InstallError> {
    let serialized = serde_json::to_string_pretty(settings).map_err(InstallError::Serialize)?;
    let write_err = |source| InstallError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, serialized).map_err(write_err)
}

/// Points `statusLine` at `executable`, keeping every other setting.
pub fn install(settings_path: &Path, executable: &Path) -> Result<(), InstallError> {
    let mut settings = read_settings(settings_path)?.unwrap_or_default();
    settings.insert(
        STATUS_LINE_KEY.to_owned(),
        json!({
            "type": "command",
            "command": executable.to_string_lossy(),
            "padding": 0,
        }),
    );
    write_settings(settings_path, &settings)?;
    tracing::info!(
        path = %settings_path.display(),
        executable = %executable.display(),
        "Installed status line"
    );
    Ok(())
}

/// Removes `statusLine`. A missing settings file counts as already uninstalled.
pub fn uninstall(settings_path: &Path) -> Result<(), InstallError> {
    let Some(mut settings) = read_settings(settings_path)? else {
        return Ok(());
    };
    settings.remove(STATUS_LINE_KEY);
    write_settings(settings_path, &settings)?;
    tracing::info!(path = %settings_path.display(), "Uninstalled status line");
    Ok(())
}
