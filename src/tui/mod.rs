// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Owns the terminal session (raw mode + alternate screen), drives the event loop and executes
//! the commands the editor returns. The install probe runs on a small tokio runtime and reports
//! back through a channel drained once per tick.

use std::{collections::VecDeque, error::Error, io, path::Path, path::PathBuf, time::Duration};

use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::Config;
use crate::editor::{Command, Editor, Event, ExternalAction};
use crate::install::{self, InstallStatus};
use crate::layout::fit_frame;
use crate::render::theme::TuiTheme;

pub mod keymap;


pub use keymap::KeyMap;

const TICK: Duration = Duration::from_millis(250);

/// Runs the interactive editor on the config at `config_path` and saves it on quit.
pub fn run(config_path: &Path, show_debug: bool) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let config = Config::load_or_default(config_path);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let mut editor = Editor::with_keymap(config, KeyMap::default());
    editor.set_show_debug(show_debug);
    let (mut runner, mut events) = CommandRunner::new(&runtime, resolve_settings_path());

    let mut terminal = TerminalSession::new()?;
    let (width, height) = crossterm::terminal::size()?;
    editor.update(Event::Resize { width, height });
    let initial = editor.init();
    runner.execute(&mut editor, initial);

    while !editor.should_quit() {
        while let Ok(event) = events.try_recv() {
            let commands = editor.update(event);
            runner.execute(&mut editor, commands);
        }

        let mut menu_offset = editor.menu_offset();
        terminal.draw(|frame| {
            let area = frame.area();
            let fitted = fit_frame(&editor, &theme);
            menu_offset = fitted.menu_offset;
            frame.render_widget(Paragraph::new(fitted.lines).style(theme.base_style()), area);
        })?;
        editor.remember_menu_offset(menu_offset);

        if event::poll(TICK)? {
            if let Some(event) = translate_event(event::read()?) {
                let commands = editor.update(event);
                runner.execute(&mut editor, commands);
            }
        }
    }

    drop(terminal);
    if runner.save_requested {
        if let Err(err) = editor.config().save_to(config_path) {
            tracing::error!("{err}");
            eprintln!("cchline: {err}");
        }
    }
    Ok(())
}

fn resolve_settings_path() -> Option<PathBuf> {
    match install::settings_path() {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::warn!("{err}; install status will read as not installed");
            None
        }
    }
}

/// Maps terminal input onto editor events. Key releases and repeats are dropped.
fn translate_event(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

/// Executes editor commands against the outside world.
struct CommandRunner<'rt> {
    runtime: &'rt Runtime,
    sender: UnboundedSender<Event>,
    settings_path: Option<PathBuf>,
    save_requested: bool,
}

impl<'rt> CommandRunner<'rt> {
    fn new(
        runtime: &'rt Runtime,
        settings_path: Option<PathBuf>,
    ) -> (Self, UnboundedReceiver<Event>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let runner = Self { runtime, sender, settings_path, save_requested: false };
        (runner, receiver)
    }

    fn execute(&mut self, editor: &mut Editor, commands: Vec<Command>) {
        let mut queue = VecDeque::from(commands);
        while let Some(command) = queue.pop_front() {
            match command {
                Command::ProbeInstallStatus => self.spawn_probe(),
                Command::RunExternal(action) => {
                    let result = self.run_external(action);
                    queue.extend(editor.update(Event::ExternalActionFinished { action, result }));
                }
                Command::SaveAndQuit => self.save_requested = true,
            }
        }
    }

    fn spawn_probe(&self) {
        let sender = self.sender.clone();
        let Some(path) = self.settings_path.clone() else {
            let _ = sender.send(Event::InstallStatus(InstallStatus::NotInstalled));
            return;
        };
        tracing::debug!(path = %path.display(), "Probing install status");
        self.runtime.spawn(async move {
            let status = install::probe_install_status(&path).await;
            // The loop may already be gone when the probe finishes.
            let _ = sender.send(Event::InstallStatus(status));
        });
    }

    /// Blocks the loop thread while the settings file is rewritten.
    fn run_external(&self, action: ExternalAction) -> Result<String, String> {
        let settings_path = self
            .settings_path
            .as_deref()
            .ok_or_else(|| "cannot determine home directory".to_owned())?;
        match action {
            ExternalAction::Install => {
                let executable = install::current_executable().map_err(|err| err.to_string())?;
                install::install(settings_path, &executable).map_err(|err| err.to_string())?;
                Ok(format!("Installed {}", executable.display()))
            }
            ExternalAction::Uninstall => {
                install::uninstall(settings_path).map_err(|err| err.to_string())?;
                Ok("Status line removed".to_owned())
            }
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
