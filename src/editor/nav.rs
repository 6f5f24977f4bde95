// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cursor movement over the heterogeneous menu.
//!
//! Vertical movement walks "stops": every selectable item is one stop, except that the whole
//! separator preset cluster collapses into a single stop. Headers are never stops, so the
//! cursor can never come to rest on one.

use super::items::{preset_range, RenderItem};
use crate::model::SegmentGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub item: usize,
    /// Column inside a segment row; ignored elsewhere.
    pub col: usize,
}

impl Cursor {
    pub fn at(item: usize) -> Self {
        Self { item, col: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Item(usize),
    Presets { start: usize, end: usize },
}

impl Stop {
    fn contains(self, item: usize) -> bool {
        match self {
            Self::Item(idx) => idx == item,
            Self::Presets { start, end } => (start..end).contains(&item),
        }
    }
}

fn vertical_stops(items: &[RenderItem]) -> Vec<Stop> {
    let presets = preset_range(items);
    let mut stops = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if !item.is_selectable() {
            continue;
        }
        match &presets {
            Some(range) if range.contains(&idx) => {
                if idx == range.start {
                    stops.push(Stop::Presets { start: range.start, end: range.end });
                }
            }
            _ => stops.push(Stop::Item(idx)),
        }
    }
    stops
}

/// First selectable item, used as the initial cursor position.
pub fn first_selectable(items: &[RenderItem]) -> usize {
    items.iter().position(|item| item.is_selectable()).unwrap_or(0)
}

/// Moves `delta` stops up (negative) or down, wrapping at both ends of the menu.
///
/// Entering the preset cluster lands on `selected_preset` (or the first preset when none is
/// selected).
pub fn move_vertical(
    items: &[RenderItem],
    cursor: Cursor,
    delta: isize,
    selected_preset: Option<usize>,
    grid: &SegmentGrid,
) -> Cursor {
    let stops = vertical_stops(items);
    if delta == 0 || stops.is_empty() {
        return clamp_col(items, cursor, grid);
    }

    let current = stops.iter().position(|stop| stop.contains(cursor.item)).unwrap_or(0);
    let len = stops.len() as isize;
    let next = (current as isize + delta).rem_euclid(len) as usize;

    let item = match stops[next] {
        Stop::Item(idx) => idx,
        Stop::Presets { start, end } => {
            start + selected_preset.filter(|preset| *preset < end - start).unwrap_or(0)
        }
    };
    clamp_col(items, Cursor { item, col: cursor.col }, grid)
}

/// Moves the column inside a segment row, or the cursor inside the preset cluster.
///
/// Both wrap around at their own ends. Any other item ignores horizontal movement.
pub fn move_horizontal(
    items: &[RenderItem],
    cursor: Cursor,
    delta: isize,
    grid: &SegmentGrid,
) -> Cursor {
    match items.get(cursor.item) {
        Some(RenderItem::SegmentRow(row)) => {
            let len = grid.row_len(*row);
            if len == 0 {
                return Cursor { item: cursor.item, col: 0 };
            }
            let col = (cursor.col.min(len - 1) as isize + delta).rem_euclid(len as isize);
            Cursor { item: cursor.item, col: col as usize }
        }
        Some(RenderItem::SeparatorPreset(_)) => {
            let Some(range) = preset_range(items) else {
                return cursor;
            };
            let offset = (cursor.item - range.start) as isize;
            let next = (offset + delta).rem_euclid(range.len() as isize) as usize;
            Cursor { item: range.start + next, col: cursor.col }
        }
        _ => cursor,
    }
}

/// Clamps the column to the length of the row under the cursor.
pub fn clamp_col(items: &[RenderItem], cursor: Cursor, grid: &SegmentGrid) -> Cursor {
    match items.get(cursor.item) {
        Some(RenderItem::SegmentRow(row)) => {
            let len = grid.row_len(*row);
            Cursor { item: cursor.item, col: cursor.col.min(len.saturating_sub(1)) }
        }
        _ => cursor,
    }
}

/// Brings a cursor back onto a selectable item after the menu changed shape.
pub fn normalize(items: &[RenderItem], cursor: Cursor, grid: &SegmentGrid) -> Cursor {
    if items.is_empty() {
        return Cursor::default();
    }
    let mut item = cursor.item.min(items.len() - 1);
    if !items[item].is_selectable() {
        item = items[item..]
            .iter()
            .position(|candidate| candidate.is_selectable())
            .map(|offset| item + offset)
            .or_else(|| items[..item].iter().rposition(|candidate| candidate.is_selectable()))
            .unwrap_or(0);
    }
    clamp_col(items, Cursor { item, col: cursor.col }, grid)
}
