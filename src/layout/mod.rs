// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fits the editor frame into the terminal size the editor last saw.
//!
//! The output always has exactly `height` lines, none wider than `width - 1` columns (the last
//! column stays free so terminals never auto-wrap). When space runs out the optional and
//! multi-line blocks shrink in a fixed order: debug line, status line, help, preview. Whatever
//! height remains goes to the menu, which scrolls to keep the cursor visible.

use ratatui::text::{Line, Span};

use crate::editor::Editor;
use crate::preview::render_preview;
use crate::render::text::{fit_line, pad_line, with_ellipsis};
use crate::render::{self, ansi, MenuRender, TuiTheme};

pub const PREVIEW_TARGET: usize = 3;
pub const HELP_TARGET: usize = 3;
const TITLE_HEIGHT: usize = 1;
const INSTALL_HEIGHT: usize = 1;
const MENU_FRAME: usize = 2;
/// One visible menu line plus its frame.
pub const MENU_MIN: usize = 1 + MENU_FRAME;
const FRAME_MIN_WIDTH: usize = 4;

/// Heights chosen for each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    pub preview: usize,
    pub menu: usize,
    pub help: usize,
    pub status: usize,
    pub debug: usize,
}

impl BlockPlan {
    /// Lines taken by every block except the menu.
    pub fn fixed(&self) -> usize {
        TITLE_HEIGHT + self.preview + INSTALL_HEIGHT + self.help + self.status + self.debug
    }
}

/// Sizes the blocks for a terminal `height` lines tall.
pub fn plan_blocks(
    height: usize,
    preview_lines: usize,
    help_lines: usize,
    has_status: bool,
    has_debug: bool,
) -> BlockPlan {
    let mut plan = BlockPlan {
        preview: preview_lines.clamp(1, PREVIEW_TARGET),
        menu: 0,
        help: help_lines.clamp(1, HELP_TARGET),
        status: usize::from(has_status),
        debug: usize::from(has_debug),
    };

    while plan.fixed() + MENU_MIN > height {
        if plan.debug > 0 {
            plan.debug = 0;
        } else if plan.status > 0 {
            plan.status = 0;
        } else if plan.help > 1 {
            plan.help -= 1;
        } else if plan.preview > 1 {
            plan.preview -= 1;
        } else {
            break;
        }
    }

    plan.menu = height.saturating_sub(plan.fixed());
    plan
}

/// Scroll offset keeping `cursor_line` inside a `viewport`-line window over `total` lines.
///
/// The window only moves when the cursor would leave it, and never scrolls past the end.
pub fn scroll_offset(previous: usize, cursor_line: usize, total: usize, viewport: usize) -> usize {
    if viewport == 0 || total <= viewport {
        return 0;
    }
    let max_offset = total - viewport;
    let mut offset = previous.min(max_offset);
    if cursor_line < offset {
        offset = cursor_line;
    } else if cursor_line >= offset + viewport {
        offset = cursor_line + 1 - viewport;
    }
    offset.min(max_offset)
}

#[derive(Debug, Clone)]
pub struct FittedFrame {
    pub lines: Vec<Line<'static>>,
    pub menu_offset: usize,
    pub plan: BlockPlan,
}

impl FittedFrame {
    pub fn to_ansi(&self) -> String {
        ansi::lines_to_ansi(&self.lines)
    }
}

/// Cuts a block to `height` lines; a block that lost lines ends in an ellipsis.
fn fit_block(
    mut lines: Vec<Line<'static>>,
    height: usize,
    max_width: usize,
    theme: &TuiTheme,
) -> Vec<Line<'static>> {
    let cut = lines.len() > height;
    lines.truncate(height);
    let last = lines.len().checked_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            if cut && Some(idx) == last {
                with_ellipsis(line, max_width, theme.disabled_style())
            } else {
                fit_line(line, max_width).0
            }
        })
        .collect()
}

fn border_line(left: &str, right: &str, inner: usize, theme: &TuiTheme) -> Line<'static> {
    Line::from(Span::styled(format!("{left}{}{right}", "─".repeat(inner)), theme.border_style()))
}

/// Renders the visible menu window, framed when there is room for it.
fn menu_block(
    menu: MenuRender,
    height: usize,
    max_width: usize,
    previous_offset: usize,
    theme: &TuiTheme,
) -> (Vec<Line<'static>>, usize) {
    let framed = height >= MENU_MIN && max_width >= FRAME_MIN_WIDTH;
    let viewport = if framed { height - MENU_FRAME } else { height };
    let offset = scroll_offset(previous_offset, menu.cursor_line, menu.lines.len(), viewport);

    let mut visible = menu.lines.into_iter().skip(offset).take(viewport).collect::<Vec<_>>();
    visible.resize_with(viewport, Line::default);

    if !framed {
        let lines = visible.into_iter().map(|line| fit_line(line, max_width).0).collect();
        return (lines, offset);
    }

    let inner = max_width - 2;
    let mut lines = Vec::with_capacity(height);
    lines.push(border_line("╭", "╮", inner, theme));
    for line in visible {
        let mut boxed = pad_line(fit_line(line, inner).0, inner);
        boxed.spans.insert(0, Span::styled("│", theme.border_style()));
        boxed.spans.push(Span::styled("│", theme.border_style()));
        lines.push(boxed);
    }
    lines.push(border_line("╰", "╯", inner, theme));
    (lines, offset)
}

/// Renders the whole editor into exactly `height` lines of at most `width - 1` columns, where
/// `(width, height)` is [`Editor::size`].
pub fn fit_frame(editor: &Editor, theme: &TuiTheme) -> FittedFrame {
    let (width, height) = editor.size();
    let width = usize::from(width);
    let height = usize::from(height);
    let max_width = width.saturating_sub(1);

    let preview = render::preview_lines(&render_preview(editor.config()), theme);
    let help = render::help_lines(editor, theme);
    let status = render::status_line(editor, theme);
    let debug = render::debug_line(editor, theme);
    let plan = plan_blocks(height, preview.len(), help.len(), status.is_some(), debug.is_some());

    let mut lines = Vec::with_capacity(height);
    lines.push(fit_line(render::title_line(theme), max_width).0);
    lines.extend(fit_block(preview, plan.preview, max_width, theme));

    let (menu, menu_offset) = menu_block(
        render::menu_lines(editor, theme),
        plan.menu,
        max_width,
        editor.menu_offset(),
        theme,
    );
    lines.extend(menu);

    lines.push(fit_line(render::install_line(editor, theme), max_width).0);
    lines.extend(fit_block(help, plan.help, max_width, theme));
    if plan.status > 0 {
        lines.extend(status.map(|line| fit_line(line, max_width).0));
    }
    if plan.debug > 0 {
        lines.extend(debug.map(|line| fit_line(line, max_width).0));
    }

    lines.truncate(height);
    lines.resize_with(height, Line::default);
    FittedFrame { lines, menu_offset, plan }
}
