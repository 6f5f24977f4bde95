// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Serializes styled lines to ANSI text for output outside the alternate screen.

use crossterm::style::{Attribute, Color as AnsiColor, ContentStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

fn ansi_color(color: Color) -> AnsiColor {
    match color {
        Color::Reset => AnsiColor::Reset,
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::DarkRed,
        Color::Green => AnsiColor::DarkGreen,
        Color::Yellow => AnsiColor::DarkYellow,
        Color::Blue => AnsiColor::DarkBlue,
        Color::Magenta => AnsiColor::DarkMagenta,
        Color::Cyan => AnsiColor::DarkCyan,
        Color::Gray => AnsiColor::Grey,
        Color::DarkGray => AnsiColor::DarkGrey,
        Color::LightRed => AnsiColor::Red,
        Color::LightGreen => AnsiColor::Green,
        Color::LightYellow => AnsiColor::Yellow,
        Color::LightBlue => AnsiColor::Blue,
        Color::LightMagenta => AnsiColor::Magenta,
        Color::LightCyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::Rgb(r, g, b) => AnsiColor::Rgb { r, g, b },
        Color::Indexed(idx) => AnsiColor::AnsiValue(idx),
    }
}

const MODIFIER_ATTRIBUTES: &[(Modifier, Attribute)] = &[
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.map(ansi_color);
    content.background_color = style.bg.map(ansi_color);
    for (modifier, attribute) in MODIFIER_ATTRIBUTES {
        if style.add_modifier.contains(*modifier) {
            content.attributes.set(*attribute);
        }
    }
    content
}

/// Joins `lines` with `\n`, wrapping every styled span in its own SGR sequence.
pub fn lines_to_ansi(lines: &[Line<'_>]) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        for span in &line.spans {
            let style = line.style.patch(span.style);
            if style == Style::default() {
                out.push_str(&span.content);
            } else {
                out.push_str(&content_style(style).apply(span.content.as_ref()).to_string());
            }
        }
    }
    out
}
