// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

pub const PALETTE_ENV: &str = "CCHLINE_TUI_PALETTE";

/// Styles for every element of the editor frame.
///
/// Without a palette override the terminal's own 16 colors are used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[color.idx()],
            None => color.into(),
        }
    }

    pub fn title_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi_color(Ansi16::Black))
            .bg(self.ansi_color(Ansi16::BrightCyan))
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightMagenta)).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightYellow)).add_modifier(Modifier::BOLD)
    }

    /// Focused segment cell inside the focused row.
    pub fn focused_cell_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub fn enabled_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightGreen))
    }

    pub fn disabled_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
    }

    pub fn value_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Cyan))
    }

    pub fn border_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
    }

    pub fn help_key_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightCyan)).add_modifier(Modifier::BOLD)
    }

    pub fn help_label_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::White))
    }

    pub fn status_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Green))
    }

    pub fn warning_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Yellow))
    }

    pub fn error_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Red)).add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg and the 16 ANSI colors), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;
        let mut ansi = [Color::Reset; 16];
        for (slot, part) in ansi.iter_mut().zip(parts.iter().skip(2)) {
            *slot = parse_palette_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let value = match env::var(PALETTE_ENV) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidPalette {
                value: "<non-unicode>".to_owned(),
                reason: format!("{PALETTE_ENV} is not valid unicode"),
            });
        }
    };
    palette_override(&value)
}

/// Parses an override value; blank means no override.
fn palette_override(value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    TuiPalette::parse_csv(trimmed)
        .map(Some)
        .map_err(|reason| ThemeError::InvalidPalette { value: trimmed.to_owned(), reason })
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Cyan,
    White,
    BrightBlack,
    BrightGreen,
    BrightYellow,
    BrightMagenta,
    BrightCyan,
}

impl Ansi16 {
    const fn idx(self) -> usize {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Cyan => 6,
            Self::White => 7,
            Self::BrightBlack => 8,
            Self::BrightGreen => 10,
            Self::BrightYellow => 11,
            Self::BrightMagenta => 13,
            Self::BrightCyan => 14,
        }
    }
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid CCHLINE_TUI_PALETTE={value}: {reason}")]
    InvalidPalette { value: String, reason: String },
}
