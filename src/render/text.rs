// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display-width aware text helpers. Widths are terminal columns, not chars or bytes.

use std::borrow::Cow;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS: &str = "...";

const REPLACEMENT: char = '\u{fffd}';

/// Columns taken by `text`, summed per grapheme cluster.
///
/// `fit_line` cuts at the same grapheme boundaries, so a measured width is always the width
/// that gets kept.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}

pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|span| display_width(&span.content)).sum()
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Replaces control characters so config values cannot break lines or inject escapes.
///
/// Whitespace controls become a space, everything else the replacement character.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(sanitize_char).collect())
}

fn sanitize_char(ch: char) -> char {
    match ch {
        '\t' | '\n' | '\r' => ' ',
        ch if ch.is_control() => REPLACEMENT,
        ch => ch,
    }
}

/// Longest prefix of `text` that fits in `max_width` columns, never splitting a grapheme.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let width = UnicodeWidthStr::width(grapheme);
        if used + width > max_width {
            return &text[..idx];
        }
        used += width;
    }
    text
}

fn clean_span(span: Span<'static>) -> Span<'static> {
    if !span.content.chars().any(char::is_control) {
        return span;
    }
    let clean = sanitize(&span.content).into_owned();
    Span::styled(clean, span.style)
}

/// Cuts a styled line to `max_width` columns, reporting whether anything was dropped.
pub fn fit_line(line: Line<'static>, max_width: usize) -> (Line<'static>, bool) {
    let style = line.style;
    let mut remaining = max_width;
    let mut spans = Vec::with_capacity(line.spans.len());
    let mut cut = false;

    for span in line.spans {
        let span = clean_span(span);
        let width = display_width(&span.content);
        if width <= remaining {
            remaining -= width;
            spans.push(span);
            continue;
        }
        let kept = truncate_to_width(&span.content, remaining).to_owned();
        if !kept.is_empty() {
            spans.push(Span::styled(kept, span.style));
        }
        cut = true;
        break;
    }

    (Line::from(spans).style(style), cut)
}

/// Suffixes the ellipsis marker, dropping trailing content so the result fits `max_width`.
pub fn with_ellipsis(line: Line<'static>, max_width: usize, style: Style) -> Line<'static> {
    if max_width <= ELLIPSIS.len() {
        return Line::from(Span::styled(&ELLIPSIS[..max_width], style));
    }
    let (mut line, _) = fit_line(line, max_width - ELLIPSIS.len());
    line.spans.push(Span::styled(ELLIPSIS, style));
    line
}

/// Pads a line with spaces up to `width` columns.
pub fn pad_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let used = line_width(&line);
    if used < width {
        line.spans.push(Span::raw(" ".repeat(width - used)));
    }
    line
}
