// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core arrangement model.
//!
//! A grid of segment rows plus the catalog of segment types it draws names from.

pub mod catalog;
pub mod grid;

pub use catalog::{
    catalog_position, cycle_name, segment_label, CycleDirection, DEFAULT_SEGMENT, SEGMENT_CATALOG,
};
pub use grid::{non_break_count, SegmentEntry, SegmentGrid, LINE_BREAK_MARKER};
