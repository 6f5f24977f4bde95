// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The fixed list of known segment types.

/// All known segment type names, in cycling order.
pub const SEGMENT_CATALOG: &[&str] = &[
    "model",
    "directory",
    "git",
    "context_window",
    "usage",
    "cost",
    "session",
    "output_style",
    "update",
    "cch_model",
    "cch_provider",
    "cch_cost",
    "cch_requests",
    "cch_limits",
];

/// Name used when a segment has to be created without an explicit choice.
pub const DEFAULT_SEGMENT: &str = "model";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// Returns the human readable label for a segment type, falling back to the raw name.
pub fn segment_label(name: &str) -> &str {
    match name {
        "model" => "Model",
        "directory" => "Directory",
        "git" => "Git",
        "context_window" => "Context Window",
        "usage" => "Usage",
        "cost" => "Cost",
        "session" => "Session",
        "output_style" => "Output Style",
        "update" => "Update",
        "cch_model" => "CCH Model",
        "cch_provider" => "CCH Provider",
        "cch_cost" => "CCH Cost",
        "cch_requests" => "CCH Requests",
        "cch_limits" => "CCH Limits",
        other => other,
    }
}

pub fn catalog_position(catalog: &[&str], name: &str) -> Option<usize> {
    catalog.iter().position(|candidate| *candidate == name)
}

/// Next (or previous) catalog name relative to `current`, wrapping at both ends.
///
/// Unknown names restart from the first catalog entry regardless of direction.
/// An empty catalog yields `current` unchanged.
pub fn cycle_name(catalog: &[&str], current: &str, direction: CycleDirection) -> String {
    let Some(first) = catalog.first() else {
        return current.to_owned();
    };
    let Some(idx) = catalog_position(catalog, current) else {
        return (*first).to_owned();
    };

    let len = catalog.len();
    let next = match direction {
        CycleDirection::Forward => (idx + 1) % len,
        CycleDirection::Backward => (idx + len - 1) % len,
    };
    catalog[next].to_owned()
}

#[cfg(test)]
mod tests {
    use super::{cycle_name, segment_label, CycleDirection, SEGMENT_CATALOG};

    const SHORT: &[&str] = &["model", "directory", "cost", "session"];

    #[test]
    fn cycle_forward_moves_to_next_name() {
        assert_eq!(cycle_name(SHORT, "cost", CycleDirection::Forward), "session");
    }

    #[test]
    fn cycle_wraps_at_both_ends() {
        assert_eq!(cycle_name(SHORT, "session", CycleDirection::Forward), "model");
        assert_eq!(cycle_name(SHORT, "model", CycleDirection::Backward), "session");
    }

    #[test]
    fn unknown_name_restarts_from_first_entry() {
        assert_eq!(cycle_name(SHORT, "weather", CycleDirection::Forward), "model");
        assert_eq!(cycle_name(SHORT, "weather", CycleDirection::Backward), "model");
    }

    #[test]
    fn empty_catalog_keeps_current_name() {
        assert_eq!(cycle_name(&[], "git", CycleDirection::Forward), "git");
    }

    #[test]
    fn every_catalog_entry_has_a_label() {
        for name in SEGMENT_CATALOG {
            assert_ne!(segment_label(name), *name, "missing label for {name}");
        }
        assert_eq!(segment_label("custom"), "custom");
    }
}
