// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Cmd only arrives with keyboard enhancement flags; Option always does.
#[cfg(target_os = "macos")]
const ROW_MOVE_MODIFIER: KeyModifiers = KeyModifiers::SUPER.union(KeyModifiers::ALT);
#[cfg(not(target_os = "macos"))]
const ROW_MOVE_MODIFIER: KeyModifiers = KeyModifiers::ALT;

#[cfg(target_os = "macos")]
const ROW_MOVE_LABEL: &str = "Cmd/Opt";
#[cfg(not(target_os = "macos"))]
const ROW_MOVE_LABEL: &str = "Alt";

/// Platform-dependent key chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    /// Any one of these modifiers turns ↑↓ into a row move.
    pub row_move: KeyModifiers,
    pub row_move_label: &'static str,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self { row_move: ROW_MOVE_MODIFIER, row_move_label: ROW_MOVE_LABEL }
    }
}

impl KeyMap {
    /// Direction of a whole-row move, if `key` is one.
    pub fn row_move(&self, key: &KeyEvent) -> Option<isize> {
        if !key.modifiers.intersects(self.row_move) {
            return None;
        }
        match key.code {
            KeyCode::Up => Some(-1),
            KeyCode::Down => Some(1),
            _ => None,
        }
    }

    /// Direction of an in-row segment move, if `key` is one.
    pub fn segment_move(&self, key: &KeyEvent) -> Option<isize> {
        if !key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(-1),
            KeyCode::Char('l') | KeyCode::Right => Some(1),
            _ => None,
        }
    }
}

pub fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Compact readout of a key event for the debug line.
pub fn describe_key(key: &KeyEvent) -> String {
    if key.modifiers.is_empty() {
        format!("{:?}", key.code)
    } else {
        format!("{:?} + {:?}", key.modifiers, key.code)
    }
}
