// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::items::TextField;

/// In-progress edit of one of the credential fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub field: TextField,
    pub buffer: String,
}

impl TextInput {
    pub fn new(field: TextField, value: &str) -> Self {
        Self { field, buffer: value.to_owned() }
    }

    pub fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// What the field shows while editing; secrets render one `*` per character.
    pub fn display(&self) -> String {
        if self.field.is_secret() {
            "*".repeat(self.buffer.chars().count())
        } else {
            self.buffer.clone()
        }
    }
}
