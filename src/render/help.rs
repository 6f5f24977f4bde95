// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::text::{Line, Span};

use super::TuiTheme;
use crate::editor::Editor;

fn hint_line(hints: &[(&str, &str)], theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
    spans.push(Span::raw(" "));
    for (idx, (key, label)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled((*key).to_owned(), theme.help_key_style()));
        spans.push(Span::styled(format!(" {label}"), theme.help_label_style()));
    }
    Line::from(spans)
}

/// Key hints for the current mode, most important line first.
pub fn help_lines(editor: &Editor, theme: &TuiTheme) -> Vec<Line<'static>> {
    if editor.editing().is_some() {
        return vec![hint_line(&[("Enter", "save"), ("Ctrl+U", "clear"), ("Esc", "cancel")], theme)];
    }
    if editor.picker().is_some() {
        return vec![
            hint_line(
                &[("type", "filter"), ("↑↓/Tab", "select"), ("Enter", "apply"), ("Esc", "close")],
                theme,
            ),
            hint_line(&[("Backspace", "delete"), ("Ctrl+P/N", "select")], theme),
        ];
    }
    if let Some(action) = editor.confirm() {
        return vec![
            Line::from(Span::styled(format!(" {}", action.prompt()), theme.warning_style())),
            hint_line(&[("y/Enter", "confirm"), ("n/Esc", "cancel")], theme),
        ];
    }

    let row_move = format!("{}+↑↓", editor.keymap().row_move_label);
    vec![
        hint_line(
            &[
                ("↑↓←→", "move"),
                ("Space", "toggle"),
                ("Enter", "pick/edit"),
                ("Tab", "cycle"),
                ("Esc", "save & quit"),
            ],
            theme,
        ),
        hint_line(
            &[
                ("a", "add"),
                ("x", "delete"),
                ("Alt+h/l", "shift"),
                ("o", "new row"),
                ("D", "delete row"),
                (row_move.as_str(), "move row"),
            ],
            theme,
        ),
        hint_line(&[("/", "search"), ("i", "install"), ("u", "uninstall")], theme),
    ]
}
