// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The flat, cursor-addressable menu derived from the grid.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Theme,
    Separator,
    Segments,
    CchSettings,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Self::Theme => "THEME",
            Self::Separator => "SEPARATOR",
            Self::Segments => "SEGMENTS",
            Self::CchSettings => "CCH SETTINGS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    CchUrl,
    CchApiKey,
}

impl TextField {
    pub fn label(self) -> &'static str {
        match self {
            Self::CchUrl => "CCH URL",
            Self::CchApiKey => "API Key",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::CchApiKey)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderItem {
    Header(Section),
    ThemeToggle,
    /// Index into [`SEPARATOR_PRESETS`].
    SeparatorPreset(usize),
    TextField(TextField),
    /// Index of a grid row.
    SegmentRow(usize),
}

impl RenderItem {
    pub fn is_selectable(self) -> bool {
        !matches!(self, Self::Header(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorPreset {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SEPARATOR_PRESETS: &[SeparatorPreset] = &[
    SeparatorPreset { label: "Pipe", value: " | " },
    SeparatorPreset { label: "Dot", value: " · " },
    SeparatorPreset { label: "Bar", value: " ⁞ " },
    SeparatorPreset { label: "Arrow", value: " → " },
    SeparatorPreset { label: "Chevron", value: " ❯ " },
];

/// Preset matching `separator` exactly, if any.
pub fn preset_index(separator: &str) -> Option<usize> {
    SEPARATOR_PRESETS.iter().position(|preset| preset.value == separator)
}

/// Builds the menu for a grid with `row_count` rows.
pub fn build_items(row_count: usize) -> Vec<RenderItem> {
    let mut items = Vec::with_capacity(SEPARATOR_PRESETS.len() + row_count + 8);

    items.push(RenderItem::Header(Section::Theme));
    items.push(RenderItem::ThemeToggle);

    items.push(RenderItem::Header(Section::Separator));
    items.extend((0..SEPARATOR_PRESETS.len()).map(RenderItem::SeparatorPreset));

    items.push(RenderItem::Header(Section::Segments));
    items.extend((0..row_count.max(1)).map(RenderItem::SegmentRow));

    items.push(RenderItem::Header(Section::CchSettings));
    items.push(RenderItem::TextField(TextField::CchUrl));
    items.push(RenderItem::TextField(TextField::CchApiKey));

    items
}

/// Index of the render item showing grid row `row`.
pub fn segment_row_item(items: &[RenderItem], row: usize) -> Option<usize> {
    items.iter().position(|item| *item == RenderItem::SegmentRow(row))
}

/// Index range of the preset cluster.
pub fn preset_range(items: &[RenderItem]) -> Option<std::ops::Range<usize>> {
    let start = items.iter().position(|item| matches!(item, RenderItem::SeparatorPreset(_)))?;
    let len = items[start..]
        .iter()
        .take_while(|item| matches!(item, RenderItem::SeparatorPreset(_)))
        .count();
    Some(start..start + len)
}
