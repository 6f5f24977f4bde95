// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Action waiting for an explicit yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteRow { row: usize },
    Install,
    Uninstall,
}

impl ConfirmAction {
    pub fn prompt(self) -> String {
        match self {
            Self::DeleteRow { row } => format!("Delete row {}? (y/n)", row + 1),
            Self::Install => "Install cchline as the Claude Code status line? (y/n)".to_owned(),
            Self::Uninstall => "Remove the cchline status line? (y/n)".to_owned(),
        }
    }
}
