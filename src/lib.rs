// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! CCHLine, a terminal editor for status line segment rows.
//!
//! The [`editor::Editor`] reducer owns all state; [`layout::fit_frame`] turns it into exactly one
//! screen of styled lines and [`tui::run`] wires both to a real terminal.

pub mod config;
pub mod editor;
pub mod install;
pub mod layout;
pub mod model;
pub mod preview;
pub mod render;
pub mod tui;
