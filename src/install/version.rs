// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `major.minor.patch` versions as reported by `cchline -v`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

const PROGRAM_NAME: &str = "cchline";
const DEV_TOKEN: &str = "dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Version of the running binary.
    pub fn current() -> Option<Self> {
        parse_version(env!("CARGO_PKG_VERSION"))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)(?:[-+].*)?$").expect("version regex is valid")
    })
}

/// Parses `1.2.3`, `v1.2.3` or `1.2.3-beta.1`; pre-release and build suffixes are ignored.
pub fn parse_version(token: &str) -> Option<Version> {
    let caps = version_regex().captures(token.trim())?;
    let part = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u64>().ok());
    Some(Version::new(part(1)?, part(2)?, part(3)?))
}

/// What an installed binary said about its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportedVersion {
    Dev,
    Release(Version),
    Unparseable,
}

/// Interprets `<command> -v` output. `None` when the output does not come from cchline at all.
pub fn parse_version_output(output: &str) -> Option<ReportedVersion> {
    let mut tokens = output.split_whitespace();
    tokens.by_ref().find(|token| *token == PROGRAM_NAME)?;

    let reported = match tokens.next() {
        Some(DEV_TOKEN) => ReportedVersion::Dev,
        Some(token) => {
            parse_version(token).map_or(ReportedVersion::Unparseable, ReportedVersion::Release)
        }
        None => ReportedVersion::Unparseable,
    };
    Some(reported)
}
