// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! CCHLine CLI entrypoint.
//!
//! `--config` opens the interactive editor; `--frame <W>x<H>` prints a single fitted frame of it
//! as ANSI text, which is handy for checking the layout in a terminal of a given size.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cchline::config::{self, Config};
use cchline::editor::{Editor, Event};
use cchline::install::Version;
use cchline::layout::fit_frame;
use cchline::render::theme::TuiTheme;
use cchline::tui::{self, KeyMap};

const LOG_FILENAME: &str = "cchline.log";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} -c | --config [--debug]\n  \
         {program} --frame <W>x<H> [--debug]\n  \
         {program} -v | --version\n  \
         {program} -h | --help\n\n\
         --config opens the status line editor and saves ~/.claude/cchline/config.toml on quit.\n\
         --frame prints one editor frame of the given size as ANSI text and exits.\n\
         --debug shows the last key press below the editor."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Mode {
    #[default]
    Usage,
    Help,
    Version,
    Editor,
    Frame { width: u16, height: u16 },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CliOptions {
    mode: Mode,
    debug: bool,
}

fn parse_frame_size(raw: &str) -> Option<(u16, u16)> {
    let (width, height) = raw.split_once(['x', 'X'])?;
    let width = width.parse::<u16>().ok().filter(|value| *value > 0)?;
    let height = height.parse::<u16>().ok().filter(|value| *value > 0)?;
    Some((width, height))
}

fn set_mode(options: &mut CliOptions, mode: Mode) -> Result<(), ()> {
    if options.mode != Mode::Usage {
        return Err(());
    }
    options.mode = mode;
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => set_mode(&mut options, Mode::Editor)?,
            "-v" | "--version" => set_mode(&mut options, Mode::Version)?,
            "-h" | "--help" => set_mode(&mut options, Mode::Help)?,
            "--frame" => {
                let raw = args.next().ok_or(())?;
                let (width, height) = parse_frame_size(&raw).ok_or(())?;
                set_mode(&mut options, Mode::Frame { width, height })?;
            }
            "--debug" => {
                if options.debug {
                    return Err(());
                }
                options.debug = true;
            }
            _ => return Err(()),
        }
    }

    if options.debug && !matches!(options.mode, Mode::Editor | Mode::Frame { .. }) {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match open_log_file() {
        Ok((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        // Without a log file, no logs beat log lines drawn over the editor.
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

fn open_log_file() -> Result<(PathBuf, fs::File), Box<dyn Error>> {
    let dir = config::config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILENAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

fn print_frame(width: u16, height: u16, debug: bool) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let config = Config::load_or_default(&config::config_path()?);
    let mut editor = Editor::with_keymap(config, KeyMap::default());
    editor.set_show_debug(debug);
    editor.update(Event::Resize { width, height });
    println!("{}", fit_frame(&editor, &theme).to_ansi());
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "cchline".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        match options.mode {
            Mode::Usage | Mode::Help => print_usage(&program),
            Mode::Version => {
                let version = Version::current()
                    .map(|version| version.to_string())
                    .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned());
                println!("cchline {version}");
            }
            Mode::Editor => {
                init_tracing();
                tui::run(&config::config_path()?, options.debug)?;
            }
            Mode::Frame { width, height } => {
                init_tracing();
                print_frame(width, height, options.debug)?;
            }
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("cchline: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_frame_size, parse_options, CliOptions, Mode};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn no_args_prints_usage() {
        assert_eq!(parse(&[]).expect("parse options").mode, Mode::Usage);
    }

    #[test]
    fn parses_short_and_long_flags() {
        assert_eq!(parse(&["-c"]).expect("parse options").mode, Mode::Editor);
        assert_eq!(parse(&["--config"]).expect("parse options").mode, Mode::Editor);
        assert_eq!(parse(&["-v"]).expect("parse options").mode, Mode::Version);
        assert_eq!(parse(&["--help"]).expect("parse options").mode, Mode::Help);
    }

    #[test]
    fn parses_debug_with_editor() {
        let options = parse(&["--debug", "--config"]).expect("parse options");
        assert_eq!(options, CliOptions { mode: Mode::Editor, debug: true });
    }

    #[test]
    fn parses_frame_size() {
        let options = parse(&["--frame", "80x24"]).expect("parse options");
        assert_eq!(options.mode, Mode::Frame { width: 80, height: 24 });
        assert_eq!(parse_frame_size("120X40"), Some((120, 40)));
    }

    #[test]
    fn rejects_bad_frame_sizes() {
        parse(&["--frame"]).unwrap_err();
        parse(&["--frame", "80"]).unwrap_err();
        parse(&["--frame", "0x24"]).unwrap_err();
        parse(&["--frame", "wide x tall"]).unwrap_err();
    }

    #[test]
    fn rejects_conflicting_modes() {
        parse(&["-c", "-v"]).unwrap_err();
        parse(&["--config", "--frame", "80x24"]).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_and_stray_debug() {
        parse(&["-c", "--debug", "--debug"]).unwrap_err();
        parse(&["--debug"]).unwrap_err();
        parse(&["--version", "--debug"]).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse(&["--nope"]).unwrap_err();
        parse(&["extra"]).unwrap_err();
    }
}
