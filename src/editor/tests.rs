// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rstest::{fixture, rstest};

use super::{
    Command, ConfirmAction, Editor, Event, ExternalAction, RenderItem, TextField,
    SEPARATOR_PRESETS,
};
use crate::config::{Config, ThemeMode};
use crate::install::{InstallStatus, Version};
use crate::model::non_break_count;
use crate::tui::keymap::KeyMap;

const ALT_KEYMAP: KeyMap = KeyMap { row_move: KeyModifiers::ALT, row_move_label: "Alt" };

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn chord(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn ch(c: char) -> Event {
    key(KeyCode::Char(c))
}

fn press(editor: &mut Editor, events: impl IntoIterator<Item = Event>) -> Vec<Command> {
    events.into_iter().flat_map(|event| editor.update(event)).collect()
}

fn order(editor: &Editor) -> Vec<&str> {
    editor.config().segment_order.iter().map(String::as_str).collect()
}

fn current_item(editor: &Editor) -> RenderItem {
    editor.items()[editor.cursor().item]
}

/// Moves the cursor down until it rests on `target`.
fn focus(editor: &mut Editor, target: RenderItem) {
    for _ in 0..editor.items().len() {
        if current_item(editor) == target {
            return;
        }
        editor.update(key(KeyCode::Down));
    }
    panic!("cursor never reached {target:?}");
}

#[fixture]
fn editor() -> Editor {
    let mut config = Config::default();
    config.set_segments(
        ["model", "git", "---", "cost"].iter().map(|name| (*name).to_owned()).collect(),
        vec![true, false, true],
    );
    Editor::with_keymap(config, ALT_KEYMAP)
}

#[rstest]
fn starts_on_theme_toggle_and_requests_probe(editor: Editor) {
    assert_eq!(current_item(&editor), RenderItem::ThemeToggle);
    assert_eq!(editor.init(), vec![Command::ProbeInstallStatus]);
    assert_eq!(editor.install_status(), None);
}

#[rstest]
fn theme_and_preset_toggles_update_config(mut editor: Editor) {
    editor.update(ch(' '));
    assert_eq!(editor.config().theme, ThemeMode::Default);

    editor.update(key(KeyCode::Down));
    assert_eq!(current_item(&editor), RenderItem::SeparatorPreset(0));
    press(&mut editor, [key(KeyCode::Right), key(KeyCode::Right), key(KeyCode::Enter)]);
    assert_eq!(editor.config().separator, SEPARATOR_PRESETS[2].value);
    assert_eq!(editor.selected_preset(), Some(2));
}

#[rstest]
fn space_toggles_focused_segment_and_syncs_projection(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(0));
    press(&mut editor, [key(KeyCode::Right), ch(' ')]);
    assert_eq!(editor.config().segment_enabled, vec![true, true, true]);
}

#[rstest]
fn tab_cycles_segment_name(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(1));
    editor.update(key(KeyCode::Tab));
    assert_eq!(order(&editor), vec!["model", "git", "---", "session"]);
    editor.update(key(KeyCode::BackTab));
    editor.update(key(KeyCode::BackTab));
    assert_eq!(order(&editor), vec!["model", "git", "---", "usage"]);
}

#[rstest]
fn insert_and_delete_segments(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(0));
    editor.update(ch('a'));
    assert_eq!(order(&editor), vec!["model", "model", "git", "---", "cost"]);
    assert_eq!(editor.cursor().col, 1);

    press(&mut editor, [ch('x'), key(KeyCode::Delete)]);
    assert_eq!(order(&editor), vec!["model", "---", "cost"]);
    assert_eq!(editor.config().segment_enabled, vec![true, true]);
}

#[rstest]
fn deleting_last_segment_removes_row(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(1));
    editor.update(ch('x'));
    assert_eq!(order(&editor), vec!["model", "git"]);
    assert_eq!(current_item(&editor), RenderItem::SegmentRow(0));
}

#[rstest]
fn alt_moves_segments_within_row_and_rows(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(0));
    editor.update(chord(KeyCode::Char('l'), KeyModifiers::ALT));
    assert_eq!(order(&editor), vec!["git", "model", "---", "cost"]);
    assert_eq!(editor.cursor().col, 1);

    editor.update(chord(KeyCode::Down, KeyModifiers::ALT));
    assert_eq!(order(&editor), vec!["cost", "---", "git", "model"]);
    assert_eq!(current_item(&editor), RenderItem::SegmentRow(1));
    assert_eq!(editor.config().segment_enabled, vec![true, false, true]);
}

#[rstest]
fn insert_row_focuses_new_row(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(0));
    editor.update(ch('o'));
    assert_eq!(order(&editor), vec!["model", "git", "---", "model", "---", "cost"]);
    assert_eq!(current_item(&editor), RenderItem::SegmentRow(1));
}

#[rstest]
fn delete_row_waits_for_confirmation(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(0));
    editor.update(ch('D'));
    assert_eq!(editor.confirm(), Some(ConfirmAction::DeleteRow { row: 0 }));

    press(&mut editor, [key(KeyCode::Down), ch('a')]);
    assert_eq!(order(&editor), vec!["model", "git", "---", "cost"]);

    editor.update(ch('n'));
    assert_eq!(editor.confirm(), None);
    assert_eq!(order(&editor), vec!["model", "git", "---", "cost"]);

    press(&mut editor, [ch('D'), ch('y')]);
    assert_eq!(order(&editor), vec!["cost"]);
    assert_eq!(current_item(&editor), RenderItem::SegmentRow(0));
    assert_eq!(editor.status().map(|status| status.text.as_str()), Some("Row deleted"));
}

#[rstest]
fn picker_applies_filtered_choice(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(0));
    editor.update(key(KeyCode::Enter));
    assert_eq!(editor.picker().and_then(|picker| picker.selected_name()), Some("model"));

    press(&mut editor, "cch co".chars().map(ch));
    assert_eq!(editor.picker().map(|picker| picker.matches().to_vec()), Some(vec!["cch_cost"]));

    editor.update(key(KeyCode::Enter));
    assert!(editor.picker().is_none());
    assert_eq!(order(&editor), vec!["cch_cost", "git", "---", "cost"]);
}

#[rstest]
fn picker_stays_open_without_matches_and_escape_discards(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(1));
    press(&mut editor, [ch('/'), ch('z'), ch('z'), key(KeyCode::Enter)]);
    assert!(editor.picker().is_some());

    press(&mut editor, [key(KeyCode::Esc)]);
    assert!(editor.picker().is_none());
    assert!(!editor.should_quit());
    assert_eq!(order(&editor), vec!["model", "git", "---", "cost"]);
}

#[rstest]
fn picker_selection_moves_with_ctrl_keys(mut editor: Editor) {
    focus(&mut editor, RenderItem::SegmentRow(0));
    let keys = [
        key(KeyCode::Enter),
        chord(KeyCode::Char('n'), KeyModifiers::CONTROL),
        key(KeyCode::Tab),
        chord(KeyCode::Char('p'), KeyModifiers::CONTROL),
    ];
    press(&mut editor, keys);
    assert_eq!(editor.picker().and_then(|picker| picker.selected_name()), Some("directory"));
}

#[rstest]
fn text_fields_edit_and_save(mut editor: Editor) {
    focus(&mut editor, RenderItem::TextField(TextField::CchUrl));
    editor.update(key(KeyCode::Enter));
    assert!(editor.editing().is_some());

    press(&mut editor, "https://cch".chars().map(ch));
    editor.update(key(KeyCode::Backspace));
    editor.update(key(KeyCode::Enter));
    assert_eq!(editor.config().cch_url, "https://cc");

    editor.update(key(KeyCode::Down));
    press(&mut editor, [ch(' '), ch('k'), ch('q'), key(KeyCode::Esc)]);
    assert_eq!(editor.config().cch_api_key, "");
    assert!(!editor.should_quit());
}

#[rstest]
fn ctrl_u_clears_edit_buffer(mut editor: Editor) {
    editor.config.cch_api_key = "secret".to_owned();
    focus(&mut editor, RenderItem::TextField(TextField::CchApiKey));
    let keys = [
        key(KeyCode::Enter),
        chord(KeyCode::Char('u'), KeyModifiers::CONTROL),
        ch('n'),
        key(KeyCode::Enter),
    ];
    press(&mut editor, keys);
    assert_eq!(editor.config().cch_api_key, "n");
}

#[rstest]
#[case(ch('q'))]
#[case(key(KeyCode::Esc))]
#[case(chord(KeyCode::Char('c'), KeyModifiers::CONTROL))]
fn quit_keys_request_save(mut editor: Editor, #[case] event: Event) {
    assert_eq!(editor.update(event), vec![Command::SaveAndQuit]);
    assert!(editor.should_quit());
}

#[rstest]
fn install_is_gated_and_reprobes_afterwards(mut editor: Editor) {
    assert!(editor.update(ch('i')).is_empty());
    assert_eq!(editor.confirm(), Some(ConfirmAction::Install));
    assert!(editor.update(ch('x')).is_empty());

    let commands = editor.update(ch('y'));
    assert_eq!(commands, vec![Command::RunExternal(ExternalAction::Install)]);

    let commands = editor.update(Event::ExternalActionFinished {
        action: ExternalAction::Install,
        result: Err("permission denied".to_owned()),
    });
    assert_eq!(commands, vec![Command::ProbeInstallStatus]);
    let status = editor.status().expect("status");
    assert!(status.is_error);
    assert_eq!(status.text, "Install failed: permission denied");
}

#[rstest]
fn probe_results_replace_install_status(mut editor: Editor) {
    let current = InstallStatus::InstalledCurrent {
        installed: Version::new(1, 0, 0),
        current: Version::new(1, 0, 0),
    };
    editor.update(Event::InstallStatus(InstallStatus::NotInstalled));
    editor.update(Event::InstallStatus(current));
    assert_eq!(editor.install_status(), Some(current));
}

#[rstest]
fn resize_and_debug_readout(mut editor: Editor) {
    editor.update(Event::Resize { width: 120, height: 40 });
    assert_eq!(editor.size(), (120, 40));
    assert_eq!(editor.debug_line(), None);

    editor.set_show_debug(true);
    assert_eq!(editor.debug_line().as_deref(), Some("key: (none)"));
    editor.update(key(KeyCode::Down));
    assert_eq!(editor.debug_line().as_deref(), Some("key: Down"));
}

#[rstest]
fn projection_stays_consistent_under_key_mashing(mut editor: Editor) {
    let script = [
        key(KeyCode::Down),
        key(KeyCode::Down),
        ch('o'),
        ch('a'),
        key(KeyCode::Tab),
        ch('x'),
        ch('x'),
        chord(KeyCode::Up, KeyModifiers::ALT),
        ch(' '),
        ch('D'),
        ch('y'),
        key(KeyCode::Down),
        ch('a'),
        chord(KeyCode::Left, KeyModifiers::ALT),
    ];
    for event in script {
        editor.update(event);
        let config = editor.config();
        assert_eq!(config.segment_enabled.len(), non_break_count(&config.segment_order));
        assert!(editor.items()[editor.cursor().item].is_selectable());
    }
}
