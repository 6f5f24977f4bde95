// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Styled display lines for every block of the editor frame.
//!
//! Everything here renders at natural size; fitting the blocks into the terminal is the layout
//! module's job.

pub mod ansi;
mod help;
pub mod text;
pub mod theme;

use ratatui::text::{Line, Span};

use crate::config::ThemeMode;
use crate::editor::{Editor, Picker, RenderItem, TextField, SEPARATOR_PRESETS};
use crate::install::InstallStatus;
use crate::model::segment_label;

pub use help::help_lines;
pub use theme::{ThemeError, TuiTheme, PALETTE_ENV};

pub const TITLE: &str = " CCHLine Configuration ";
pub const CHECKING: &str = "checking…";

const CURSOR_MARKER: &str = " ▸ ";
const NO_MARKER: &str = "   ";
const ENABLED_MARK: &str = "●";
const DISABLED_MARK: &str = "○";
const CELL_GAP: &str = "  ";
const EDIT_CARET: &str = "▏";

/// The full, unscrolled menu.
#[derive(Debug, Clone, Default)]
pub struct MenuRender {
    pub lines: Vec<Line<'static>>,
    /// Display line that has to stay visible.
    pub cursor_line: usize,
}

pub fn title_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(Span::styled(TITLE, theme.title_style()))
}

pub fn preview_lines(preview: &str, theme: &TuiTheme) -> Vec<Line<'static>> {
    preview
        .lines()
        .map(|line| Line::from(Span::styled(format!(" {line}"), theme.base_style())))
        .collect()
}

pub fn menu_lines(editor: &Editor, theme: &TuiTheme) -> MenuRender {
    if let Some(picker) = editor.picker() {
        return picker_lines(picker, theme);
    }

    let items = editor.items();
    let cursor = editor.cursor();
    let mut lines = Vec::with_capacity(items.len() + 4);
    let mut cursor_line = 0;

    for (idx, item) in items.iter().enumerate() {
        if idx == cursor.item {
            cursor_line = lines.len();
        }
        match item {
            RenderItem::Header(section) => {
                if idx > 0 {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    format!("  {}", section.title()),
                    theme.header_style(),
                )));
            }
            _ => lines.push(item_line(editor, *item, idx == cursor.item, theme)),
        }
    }

    MenuRender { lines, cursor_line }
}

fn marker(focused: bool) -> Span<'static> {
    Span::raw(if focused { CURSOR_MARKER } else { NO_MARKER })
}

fn label(text: impl Into<String>, focused: bool, theme: &TuiTheme) -> Span<'static> {
    let style = if focused { theme.selected_style() } else { theme.base_style() };
    Span::styled(text.into(), style)
}

fn enabled_mark(enabled: bool, theme: &TuiTheme) -> Span<'static> {
    if enabled {
        Span::styled(ENABLED_MARK, theme.enabled_style())
    } else {
        Span::styled(DISABLED_MARK, theme.disabled_style())
    }
}

fn item_line(editor: &Editor, item: RenderItem, focused: bool, theme: &TuiTheme) -> Line<'static> {
    let config = editor.config();
    let mut spans = vec![marker(focused)];
    match item {
        RenderItem::Header(_) => {}
        RenderItem::ThemeToggle => {
            let value = match config.theme {
                ThemeMode::Default => "default (emoji)",
                ThemeMode::NerdFont => "nerd_font",
            };
            spans.push(label("Theme", focused, theme));
            spans.push(Span::raw(CELL_GAP));
            spans.push(Span::styled(value, theme.value_style()));
        }
        RenderItem::SeparatorPreset(idx) => {
            if let Some(preset) = SEPARATOR_PRESETS.get(idx) {
                spans.push(enabled_mark(editor.selected_preset() == Some(idx), theme));
                spans.push(Span::raw(" "));
                spans.push(label(preset.label, focused, theme));
                spans.push(Span::raw(CELL_GAP));
                spans.push(Span::styled(format!("{:?}", preset.value), theme.value_style()));
            }
        }
        RenderItem::TextField(field) => {
            spans.push(label(field.label(), focused, theme));
            spans.push(Span::raw(CELL_GAP));
            spans.push(text_field_value(editor, field, theme));
        }
        RenderItem::SegmentRow(row) => {
            spans.push(label(format!("Row {}", row + 1), focused, theme));
            spans.push(Span::raw(CELL_GAP));
            spans.extend(segment_cells(editor, row, focused, theme));
        }
    }
    Line::from(spans)
}

fn text_field_value(editor: &Editor, field: TextField, theme: &TuiTheme) -> Span<'static> {
    if let Some(input) = editor.editing().filter(|input| input.field == field) {
        return Span::styled(format!("{}{EDIT_CARET}", input.display()), theme.selected_style());
    }
    let config = editor.config();
    let value = match field {
        TextField::CchUrl => &config.cch_url,
        TextField::CchApiKey => &config.cch_api_key,
    };
    if value.is_empty() {
        Span::styled("(empty)", theme.disabled_style())
    } else if field.is_secret() {
        Span::styled("****", theme.value_style())
    } else {
        Span::styled(value.clone(), theme.value_style())
    }
}

fn segment_cells(
    editor: &Editor,
    row: usize,
    row_focused: bool,
    theme: &TuiTheme,
) -> Vec<Span<'static>> {
    let Some(entries) = editor.grid().row(row).filter(|entries| !entries.is_empty()) else {
        return vec![Span::styled("(empty row)", theme.disabled_style())];
    };

    let focused_col = editor.cursor().col;
    let mut spans = Vec::with_capacity(entries.len() * 4);
    for (col, entry) in entries.iter().enumerate() {
        if col > 0 {
            spans.push(Span::raw(CELL_GAP));
        }
        spans.push(enabled_mark(entry.enabled, theme));
        spans.push(Span::raw(" "));
        let style = if row_focused && col == focused_col {
            theme.focused_cell_style()
        } else if entry.enabled {
            theme.base_style()
        } else {
            theme.disabled_style()
        };
        spans.push(Span::styled(segment_label(&entry.name).to_owned(), style));
    }
    spans
}

fn picker_lines(picker: &Picker, theme: &TuiTheme) -> MenuRender {
    let mut lines = vec![Line::from(vec![
        Span::styled("  Pick segment: ", theme.header_style()),
        Span::styled(format!("{}{EDIT_CARET}", picker.query), theme.selected_style()),
    ])];

    if picker.matches().is_empty() {
        lines.push(Line::from(Span::styled("   (no matches)", theme.disabled_style())));
        return MenuRender { lines, cursor_line: 0 };
    }

    for (idx, name) in picker.matches().iter().enumerate() {
        let focused = idx == picker.selected;
        lines.push(Line::from(vec![
            marker(focused),
            label(segment_label(name), focused, theme),
            Span::raw(CELL_GAP),
            Span::styled(*name, theme.disabled_style()),
        ]));
    }
    MenuRender { lines, cursor_line: 1 + picker.selected }
}

pub fn install_line(editor: &Editor, theme: &TuiTheme) -> Line<'static> {
    let (text, style) = match editor.install_status() {
        None => (CHECKING.to_owned(), theme.disabled_style()),
        Some(status @ InstallStatus::InstalledCurrent { .. }) => {
            (status.to_string(), theme.status_style())
        }
        Some(status @ (InstallStatus::NotInstalled | InstallStatus::InstalledOutdated { .. })) => {
            (status.to_string(), theme.warning_style())
        }
        Some(status) => (status.to_string(), theme.value_style()),
    };
    Line::from(vec![
        Span::styled(" Status line: ", theme.help_label_style()),
        Span::styled(text, style),
    ])
}

pub fn status_line(editor: &Editor, theme: &TuiTheme) -> Option<Line<'static>> {
    let status = editor.status()?;
    let style = if status.is_error { theme.error_style() } else { theme.status_style() };
    Some(Line::from(Span::styled(format!(" {}", status.text), style)))
}

pub fn debug_line(editor: &Editor, theme: &TuiTheme) -> Option<Line<'static>> {
    let text = editor.debug_line()?;
    Some(Line::from(Span::styled(format!(" DEBUG {text}"), theme.disabled_style())))
}
