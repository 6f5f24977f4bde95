// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sample status line shown while editing.
//!
//! Every segment type renders a fixed mock value, so the preview reflects only the arrangement,
//! separator and icon theme.

use crate::config::{Config, ThemeMode};
use crate::model::LINE_BREAK_MARKER;
use crate::render::text::sanitize;

pub const EMPTY_PREVIEW: &str = "(no segments enabled)";

pub fn mock_value(name: &str) -> &str {
    match name {
        "model" => "Sonnet 4.5",
        "directory" => "cchline",
        "git" => "main ✓",
        "context_window" => "42% · 84k",
        "usage" => "5h 24%",
        "cost" => "$0.42",
        "session" => "1h 12m",
        "output_style" => "default",
        "update" => "v0.2.0",
        "cch_model" => "claude-sonnet-4-5",
        "cch_provider" => "anthropic",
        "cch_cost" => "$12.30",
        "cch_requests" => "128 req",
        "cch_limits" => "5h 40% · 7d 12%",
        other => other,
    }
}

pub fn segment_icon(name: &str, theme: ThemeMode) -> Option<&'static str> {
    let (emoji, nerd_font) = match name {
        "model" => ("🤖", "\u{e26d}"),
        "directory" => ("📁", "\u{f024b}"),
        "git" => ("🌿", "\u{f02a2}"),
        "context_window" => ("⚡", "\u{f49b}"),
        "usage" => ("📊", "\u{f0a9e}"),
        "cost" => ("💰", "\u{eec1}"),
        "session" => ("⏱", "\u{f19bb}"),
        "output_style" => ("🎯", "\u{f12f5}"),
        "update" => ("🔄", "\u{f021}"),
        _ => return None,
    };
    Some(match theme {
        ThemeMode::Default => emoji,
        ThemeMode::NerdFont => nerd_font,
    })
}

fn render_segment(name: &str, theme: ThemeMode) -> String {
    let value = mock_value(name);
    let value = sanitize(value);
    match segment_icon(name, theme) {
        Some(icon) => format!("{icon} {value}"),
        None => value.into_owned(),
    }
}

/// Renders the enabled segments row by row, joined with the configured separator.
///
/// Rows without an enabled segment produce no line.
pub fn render_preview(config: &Config) -> String {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut flags = config.segment_enabled.iter().copied();
    let separator = sanitize(&config.separator);

    for name in &config.segment_order {
        if name == LINE_BREAK_MARKER {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current).join(separator.as_ref()));
            }
            continue;
        }
        if flags.next().unwrap_or(true) {
            current.push(render_segment(name, config.theme));
        }
    }
    if !current.is_empty() {
        lines.push(current.join(separator.as_ref()));
    }

    if lines.is_empty() {
        return EMPTY_PREVIEW.to_owned();
    }
    lines.join("\n")
}
