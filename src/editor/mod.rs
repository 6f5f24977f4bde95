// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor state and its reducer.
//!
//! [`Editor::update`] consumes one [`Event`] at a time and returns the side effects the runtime
//! has to perform as [`Command`]s. No I/O happens in here, so the whole editor can be driven
//! from tests without a terminal.

pub mod confirm;
pub mod items;
pub mod nav;
pub mod picker;
pub mod text_input;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::install::InstallStatus;
use crate::model::{CycleDirection, SegmentGrid, DEFAULT_SEGMENT, SEGMENT_CATALOG};
use crate::tui::keymap::{describe_key, is_ctrl, KeyMap};

pub use confirm::ConfirmAction;
pub use items::{
    build_items, preset_index, RenderItem, Section, SeparatorPreset, TextField, SEPARATOR_PRESETS,
};
pub use nav::Cursor;
pub use picker::{filter_catalog, Picker};
pub use text_input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalAction {
    Install,
    Uninstall,
}

impl ExternalAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Install => "Install",
            Self::Uninstall => "Uninstall",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    InstallStatus(InstallStatus),
    ExternalActionFinished { action: ExternalAction, result: Result<String, String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ProbeInstallStatus,
    RunExternal(ExternalAction),
    SaveAndQuit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    config: Config,
    grid: SegmentGrid,
    cursor: Cursor,
    picker: Option<Picker>,
    confirm: Option<ConfirmAction>,
    editing: Option<TextInput>,
    install_status: Option<InstallStatus>,
    status: Option<StatusMessage>,
    keymap: KeyMap,
    show_debug: bool,
    last_key: Option<String>,
    size: (u16, u16),
    menu_offset: usize,
    should_quit: bool,
}

impl Editor {
    pub fn new(config: Config) -> Self {
        Self::with_keymap(config, KeyMap::default())
    }

    pub fn with_keymap(mut config: Config, keymap: KeyMap) -> Self {
        config.normalize();
        let grid = SegmentGrid::from_order(&config.segment_order, &config.segment_enabled);
        let items = build_items(grid.row_count());
        let cursor = Cursor::at(nav::first_selectable(&items));
        Self {
            config,
            grid,
            cursor,
            picker: None,
            confirm: None,
            editing: None,
            install_status: None,
            status: None,
            keymap,
            show_debug: false,
            last_key: None,
            size: (80, 24),
            menu_offset: 0,
            should_quit: false,
        }
    }

    pub fn set_show_debug(&mut self, show_debug: bool) {
        self.show_debug = show_debug;
    }

    /// Commands to run once before the first event.
    pub fn init(&self) -> Vec<Command> {
        vec![Command::ProbeInstallStatus]
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &SegmentGrid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The menu as it currently stands; rebuilt from the grid on every call.
    pub fn items(&self) -> Vec<RenderItem> {
        build_items(self.grid.row_count())
    }

    pub fn picker(&self) -> Option<&Picker> {
        self.picker.as_ref()
    }

    pub fn confirm(&self) -> Option<ConfirmAction> {
        self.confirm
    }

    pub fn editing(&self) -> Option<&TextInput> {
        self.editing.as_ref()
    }

    /// `None` until the first probe result arrives.
    pub fn install_status(&self) -> Option<InstallStatus> {
        self.install_status
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn debug_line(&self) -> Option<String> {
        if !self.show_debug {
            return None;
        }
        Some(format!("key: {}", self.last_key.as_deref().unwrap_or("(none)")))
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn menu_offset(&self) -> usize {
        self.menu_offset
    }

    /// Stores the scroll offset the last fitted frame settled on.
    pub fn remember_menu_offset(&mut self, offset: usize) {
        self.menu_offset = offset;
    }

    pub fn selected_preset(&self) -> Option<usize> {
        preset_index(&self.config.separator)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn update(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize { width, height } => {
                self.size = (width, height);
                Vec::new()
            }
            Event::InstallStatus(status) => {
                self.install_status = Some(status);
                Vec::new()
            }
            Event::ExternalActionFinished { action, result } => {
                self.status = Some(match result {
                    Ok(message) => StatusMessage::info(message),
                    Err(err) => StatusMessage::error(format!("{} failed: {err}", action.verb())),
                });
                self.install_status = None;
                vec![Command::ProbeInstallStatus]
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if self.show_debug {
            self.last_key = Some(describe_key(&key));
        }

        if self.editing.is_some() {
            self.handle_editing_key(key);
            return Vec::new();
        }
        if self.picker.is_some() {
            self.handle_picker_key(key);
            return Vec::new();
        }
        if let Some(action) = self.confirm {
            return self.handle_confirm_key(action, key);
        }
        self.handle_normal_key(key)
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let Some(input) = self.editing.as_mut() else {
            return;
        };
        if is_ctrl(&key, 'u') {
            input.clear();
            return;
        }
        match key.code {
            KeyCode::Enter => {
                if let Some(input) = self.editing.take() {
                    let label = input.field.label();
                    match input.field {
                        TextField::CchUrl => self.config.cch_url = input.buffer,
                        TextField::CchApiKey => self.config.cch_api_key = input.buffer,
                    }
                    self.status = Some(StatusMessage::info(format!("{label} updated")));
                }
            }
            KeyCode::Esc => self.editing = None,
            KeyCode::Backspace => input.backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.push_char(ch)
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        if is_ctrl(&key, 'p') {
            picker.move_selection(-1);
            return;
        }
        if is_ctrl(&key, 'n') {
            picker.move_selection(1);
            return;
        }
        match key.code {
            KeyCode::Esc => self.picker = None,
            KeyCode::Enter => self.apply_picker(),
            KeyCode::Up | KeyCode::BackTab => picker.move_selection(-1),
            KeyCode::Down | KeyCode::Tab => picker.move_selection(1),
            KeyCode::Backspace => picker.pop_char(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                picker.push_char(ch)
            }
            _ => {}
        }
    }

    fn apply_picker(&mut self) {
        let Some(picker) = self.picker.as_ref() else {
            return;
        };
        // Nothing matches: stay open so the query can be corrected.
        let Some(name) = picker.selected_name() else {
            return;
        };
        let (row, col) = picker.target;
        self.picker = None;
        if let Some(col) = self.grid.set_name(row, col, name) {
            self.focus_row(row, col);
            self.sync_config();
        }
    }

    fn handle_confirm_key(&mut self, action: ConfirmAction, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.confirm = None;
                self.run_confirmed(action)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm = None;
                self.status = Some(StatusMessage::info("Cancelled"));
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn run_confirmed(&mut self, action: ConfirmAction) -> Vec<Command> {
        match action {
            ConfirmAction::DeleteRow { row } => {
                if let Some(row) = self.grid.delete_row(row) {
                    self.focus_row(row, 0);
                    self.sync_config();
                    self.status = Some(StatusMessage::info("Row deleted"));
                }
                Vec::new()
            }
            ConfirmAction::Install => vec![Command::RunExternal(ExternalAction::Install)],
            ConfirmAction::Uninstall => vec![Command::RunExternal(ExternalAction::Uninstall)],
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Vec<Command> {
        self.status = None;

        if is_ctrl(&key, 'c') {
            return self.quit();
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Vec::new();
        }
        if let Some(delta) = self.keymap.row_move(&key) {
            self.move_row(delta);
            return Vec::new();
        }
        if let Some(delta) = self.keymap.segment_move(&key) {
            self.move_segment(delta);
            return Vec::new();
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.move_vertical(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_vertical(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_horizontal(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_horizontal(1),
            KeyCode::Char(' ') => self.toggle_item(),
            KeyCode::Enter => match self.current_item() {
                Some(RenderItem::SegmentRow(_)) => self.open_picker(),
                _ => self.toggle_item(),
            },
            KeyCode::Char('/') => self.open_picker(),
            KeyCode::Tab => self.cycle_segment(CycleDirection::Forward),
            KeyCode::BackTab => self.cycle_segment(CycleDirection::Backward),
            KeyCode::Char('a') => self.insert_segment(),
            KeyCode::Char('x') | KeyCode::Delete => self.delete_segment(),
            KeyCode::Char('o') => self.insert_row(),
            KeyCode::Char('D') => {
                if let Some(row) = self.current_row() {
                    self.request_confirm(ConfirmAction::DeleteRow { row });
                }
            }
            KeyCode::Char('i') => self.request_confirm(ConfirmAction::Install),
            KeyCode::Char('u') => self.request_confirm(ConfirmAction::Uninstall),
            _ => {}
        }
        Vec::new()
    }

    fn quit(&mut self) -> Vec<Command> {
        self.should_quit = true;
        vec![Command::SaveAndQuit]
    }

    fn request_confirm(&mut self, action: ConfirmAction) {
        self.confirm = Some(action);
    }

    fn current_item(&self) -> Option<RenderItem> {
        self.items().get(self.cursor.item).copied()
    }

    fn current_row(&self) -> Option<usize> {
        match self.current_item()? {
            RenderItem::SegmentRow(row) => Some(row),
            _ => None,
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let items = self.items();
        self.cursor =
            nav::move_vertical(&items, self.cursor, delta, self.selected_preset(), &self.grid);
    }

    fn move_horizontal(&mut self, delta: isize) {
        let items = self.items();
        self.cursor = nav::move_horizontal(&items, self.cursor, delta, &self.grid);
    }

    fn toggle_item(&mut self) {
        match self.current_item() {
            Some(RenderItem::ThemeToggle) => {
                self.config.theme = self.config.theme.toggled();
            }
            Some(RenderItem::SeparatorPreset(idx)) => {
                if let Some(preset) = SEPARATOR_PRESETS.get(idx) {
                    self.config.separator = preset.value.to_owned();
                }
            }
            Some(RenderItem::TextField(field)) => {
                let value = match field {
                    TextField::CchUrl => &self.config.cch_url,
                    TextField::CchApiKey => &self.config.cch_api_key,
                };
                self.editing = Some(TextInput::new(field, value));
            }
            Some(RenderItem::SegmentRow(row)) => {
                if self.grid.toggle(row, self.cursor.col) {
                    self.sync_config();
                }
            }
            Some(RenderItem::Header(_)) | None => {}
        }
    }

    fn open_picker(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let col = self.cursor.col;
        let current = self.grid.entry(row, col).map(|entry| entry.name.as_str());
        self.picker = Some(Picker::open(SEGMENT_CATALOG, (row, col), current));
    }

    fn cycle_segment(&mut self, direction: CycleDirection) {
        let Some(row) = self.current_row() else {
            return;
        };
        if let Some(col) = self.grid.cycle_name(row, self.cursor.col, direction, SEGMENT_CATALOG) {
            self.cursor.col = col;
            self.sync_config();
        }
    }

    fn insert_segment(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if let Some(col) = self.grid.insert_after(row, self.cursor.col, DEFAULT_SEGMENT) {
            self.cursor.col = col;
            self.sync_config();
        }
    }

    fn delete_segment(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if let Some((row, col)) = self.grid.delete(row, self.cursor.col) {
            self.focus_row(row, col);
            self.sync_config();
        }
    }

    fn move_segment(&mut self, delta: isize) {
        let Some(row) = self.current_row() else {
            return;
        };
        if let Some(col) = self.grid.move_within_row(row, self.cursor.col, delta) {
            self.cursor.col = col;
            self.sync_config();
        }
    }

    fn insert_row(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if let Some(row) = self.grid.insert_row_after(row, DEFAULT_SEGMENT) {
            self.focus_row(row, 0);
            self.sync_config();
        }
    }

    fn move_row(&mut self, delta: isize) {
        let Some(row) = self.current_row() else {
            return;
        };
        if let Some(row) = self.grid.move_row(row, delta) {
            self.focus_row(row, self.cursor.col);
            self.sync_config();
        }
    }

    fn focus_row(&mut self, row: usize, col: usize) {
        let menu = self.items();
        let item = items::segment_row_item(&menu, row).unwrap_or(self.cursor.item);
        self.cursor = nav::normalize(&menu, Cursor { item, col }, &self.grid);
    }

    fn sync_config(&mut self) {
        let (order, enabled) = self.grid.to_order();
        self.config.set_segments(order, enabled);
    }
}

#[cfg(test)]
mod tests;
