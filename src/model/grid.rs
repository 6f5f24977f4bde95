// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rows of segment entries and the operations that rearrange them.
//!
//! The grid is never empty: removing the last row leaves a single empty row behind. Every
//! operation is total; addresses outside the grid make it a no-op (`None`).

use super::catalog::{cycle_name, CycleDirection};

/// Token separating rows in the serialized segment order.
pub const LINE_BREAK_MARKER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentEntry {
    pub name: String,
    pub enabled: bool,
}

impl SegmentEntry {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self { name: name.into(), enabled }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentGrid {
    rows: Vec<Vec<SegmentEntry>>,
}

impl Default for SegmentGrid {
    fn default() -> Self {
        Self { rows: vec![Vec::new()] }
    }
}

impl SegmentGrid {
    pub fn from_rows(rows: Vec<Vec<SegmentEntry>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        Self { rows }
    }

    /// Splits a serialized order into rows at each line-break marker.
    ///
    /// `enabled` is consumed in step with the non-marker names; missing flags default to `true`.
    pub fn from_order(order: &[String], enabled: &[bool]) -> Self {
        if order.is_empty() {
            return Self::default();
        }

        let mut rows = Vec::new();
        let mut current = Vec::new();
        let mut flags = enabled.iter().copied();
        for name in order {
            if name == LINE_BREAK_MARKER {
                rows.push(std::mem::take(&mut current));
                continue;
            }
            let entry_enabled = flags.next().unwrap_or(true);
            current.push(SegmentEntry::new(name.clone(), entry_enabled));
        }
        rows.push(current);

        Self::from_rows(rows)
    }

    /// Projects the grid back to the parallel `(order, enabled)` arrays.
    ///
    /// A grid holding only one empty row projects to two empty arrays.
    pub fn to_order(&self) -> (Vec<String>, Vec<bool>) {
        if self.rows.len() == 1 && self.rows[0].is_empty() {
            return (Vec::new(), Vec::new());
        }

        let mut order = Vec::new();
        let mut enabled = Vec::new();
        for (idx, row) in self.rows.iter().enumerate() {
            for entry in row {
                order.push(entry.name.clone());
                enabled.push(entry.enabled);
            }
            if idx + 1 != self.rows.len() {
                order.push(LINE_BREAK_MARKER.to_owned());
            }
        }
        (order, enabled)
    }

    pub fn row(&self, row: usize) -> Option<&[SegmentEntry]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn entry(&self, row: usize, col: usize) -> Option<&SegmentEntry> {
        self.rows.get(row).and_then(|entries| entries.get(col))
    }

    /// Flips the enabled flag of the addressed entry. Empty rows are left alone.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let Some(entries) = self.rows.get_mut(row) else {
            return false;
        };
        if entries.is_empty() {
            return false;
        }
        let col = col.min(entries.len() - 1);
        entries[col].enabled = !entries[col].enabled;
        true
    }

    /// Inserts an enabled entry right after `col` (or first, in an empty row).
    ///
    /// Returns the column of the new entry.
    pub fn insert_after(&mut self, row: usize, col: usize, name: &str) -> Option<usize> {
        let entries = self.rows.get_mut(row)?;
        let pos = if entries.is_empty() { 0 } else { (col + 1).min(entries.len()) };
        entries.insert(pos, SegmentEntry::new(name, true));
        Some(pos)
    }

    /// Removes the addressed entry, dropping the row once it runs empty.
    ///
    /// Returns the `(row, col)` the cursor should move to.
    pub fn delete(&mut self, row: usize, col: usize) -> Option<(usize, usize)> {
        let entries = self.rows.get_mut(row)?;
        if entries.is_empty() {
            return None;
        }

        let col = col.min(entries.len() - 1);
        entries.remove(col);
        if entries.is_empty() {
            let row = self.remove_row(row);
            return Some((row, 0));
        }
        Some((row, col.min(entries.len() - 1)))
    }

    /// Replaces the entry's name with its catalog neighbour and re-enables it.
    ///
    /// An empty row receives the catalog's first name as its only entry.
    pub fn cycle_name(
        &mut self,
        row: usize,
        col: usize,
        direction: CycleDirection,
        catalog: &[&str],
    ) -> Option<usize> {
        let entries = self.rows.get_mut(row)?;
        if entries.is_empty() {
            let first = catalog.first()?;
            entries.push(SegmentEntry::new(*first, true));
            return Some(0);
        }

        let col = col.min(entries.len() - 1);
        let entry = &mut entries[col];
        entry.name = cycle_name(catalog, &entry.name, direction);
        entry.enabled = true;
        Some(col)
    }

    /// Swaps the entry with its neighbour at `col + delta`. No wraparound at row ends.
    pub fn move_within_row(&mut self, row: usize, col: usize, delta: isize) -> Option<usize> {
        let entries = self.rows.get_mut(row)?;
        if entries.len() < 2 {
            return None;
        }
        let col = col.min(entries.len() - 1);
        let target = col.checked_add_signed(delta).filter(|target| *target < entries.len())?;
        if target == col {
            return None;
        }
        entries.swap(col, target);
        Some(target)
    }

    /// Inserts a row holding one enabled `name` entry right after `row`.
    pub fn insert_row_after(&mut self, row: usize, name: &str) -> Option<usize> {
        if row >= self.rows.len() {
            return None;
        }
        let pos = row + 1;
        self.rows.insert(pos, vec![SegmentEntry::new(name, true)]);
        Some(pos)
    }

    /// Removes a whole row. Returns the row index the cursor should move to.
    pub fn delete_row(&mut self, row: usize) -> Option<usize> {
        if row >= self.rows.len() {
            return None;
        }
        Some(self.remove_row(row))
    }

    /// Swaps a row with its neighbour at `row + delta`. No wraparound at the grid ends.
    pub fn move_row(&mut self, row: usize, delta: isize) -> Option<usize> {
        if row >= self.rows.len() {
            return None;
        }
        let target = row.checked_add_signed(delta).filter(|target| *target < self.rows.len())?;
        if target == row {
            return None;
        }
        self.rows.swap(row, target);
        Some(target)
    }

    /// Renames the addressed entry and re-enables it; an empty row gets it as first entry.
    pub fn set_name(&mut self, row: usize, col: usize, name: &str) -> Option<usize> {
        let entries = self.rows.get_mut(row)?;
        if entries.is_empty() {
            entries.push(SegmentEntry::new(name, true));
            return Some(0);
        }
        let col = col.min(entries.len() - 1);
        let entry = &mut entries[col];
        entry.name = name.to_owned();
        entry.enabled = true;
        Some(col)
    }

    fn remove_row(&mut self, row: usize) -> usize {
        self.rows.remove(row);
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
            return 0;
        }
        row.min(self.rows.len() - 1)
    }
}

/// Number of entries in a serialized order that are not line-break markers.
pub fn non_break_count(order: &[String]) -> usize {
    order.iter().filter(|name| name.as_str() != LINE_BREAK_MARKER).count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{non_break_count, SegmentEntry, SegmentGrid, LINE_BREAK_MARKER};
    use crate::model::catalog::CycleDirection;

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    fn sample_grid() -> SegmentGrid {
        SegmentGrid::from_rows(vec![
            vec![SegmentEntry::new("model", true), SegmentEntry::new("git", false)],
            vec![SegmentEntry::new("cost", true)],
        ])
    }

    fn assert_projection_consistent(grid: &SegmentGrid) {
        let (order, enabled) = grid.to_order();
        assert_eq!(enabled.len(), non_break_count(&order));
    }

    #[test]
    fn serializes_rows_with_line_break_markers() {
        let (order, enabled) = sample_grid().to_order();
        assert_eq!(order, vec!["model", "git", LINE_BREAK_MARKER, "cost"]);
        assert_eq!(enabled, vec![true, false, true]);
    }

    #[rstest]
    #[case(&["model", "directory", "---", "context_window"])]
    #[case(&["model", "---", "---", "context_window"])]
    #[case(&["---", "git"])]
    #[case(&["git", "---"])]
    fn order_round_trips_through_rows(#[case] names: &[&str]) {
        let names = order(names);
        let flags = (0..non_break_count(&names)).map(|idx| idx % 2 == 0).collect::<Vec<_>>();

        let grid = SegmentGrid::from_order(&names, &flags);
        let (got_order, got_enabled) = grid.to_order();

        assert_eq!(got_order, names);
        assert_eq!(got_enabled, flags);
    }

    #[rstest]
    #[case::inner_empty_row(vec![
        vec![SegmentEntry::new("model", true)],
        vec![],
        vec![SegmentEntry::new("cost", false)],
    ])]
    #[case::two_empty_rows(vec![vec![], vec![]])]
    #[case::trailing_empty_row(vec![vec![SegmentEntry::new("git", false)], vec![]])]
    #[case::leading_empty_rows(vec![vec![], vec![], vec![SegmentEntry::new("usage", true)]])]
    fn rows_round_trip_through_order(#[case] rows: Vec<Vec<SegmentEntry>>) {
        let grid = SegmentGrid::from_rows(rows.clone());
        let (names, flags) = grid.to_order();
        let restored = SegmentGrid::from_order(&names, &flags);

        assert_eq!(restored, grid);
        assert_eq!(restored.row_count(), rows.len());
    }

    #[test]
    fn empty_rows_serialize_as_adjacent_markers() {
        let inner = SegmentGrid::from_rows(vec![
            vec![SegmentEntry::new("model", true)],
            vec![],
            vec![SegmentEntry::new("cost", true)],
        ]);
        assert_eq!(inner.to_order().0, order(&["model", "---", "---", "cost"]));

        let (names, flags) = SegmentGrid::from_rows(vec![vec![], vec![]]).to_order();
        assert_eq!(names, order(&[LINE_BREAK_MARKER]));
        assert!(flags.is_empty());
    }

    #[test]
    fn empty_order_becomes_single_empty_row_and_back() {
        let grid = SegmentGrid::from_order(&[], &[]);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.row_len(0), 0);

        let (order, enabled) = grid.to_order();
        assert!(order.is_empty());
        assert!(enabled.is_empty());
    }

    #[test]
    fn missing_enabled_flags_default_to_true() {
        let grid = SegmentGrid::from_order(&order(&["model", "git"]), &[false]);
        assert_eq!(grid.entry(0, 0).map(|entry| entry.enabled), Some(false));
        assert_eq!(grid.entry(0, 1).map(|entry| entry.enabled), Some(true));
    }

    #[test]
    fn toggle_flips_enabled_and_ignores_empty_rows() {
        let mut grid = sample_grid();
        assert!(grid.toggle(0, 1));
        assert_eq!(grid.entry(0, 1).map(|entry| entry.enabled), Some(true));

        let mut empty = SegmentGrid::default();
        assert!(!empty.toggle(0, 0));
        assert!(!grid.toggle(9, 0));
    }

    #[test]
    fn insert_after_places_new_enabled_entry_next_to_column() {
        let mut grid = sample_grid();
        assert_eq!(grid.insert_after(0, 0, "usage"), Some(1));
        let names =
            grid.row(0).unwrap().iter().map(|entry| entry.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["model", "usage", "git"]);
        assert!(grid.entry(0, 1).unwrap().enabled);

        let mut empty = SegmentGrid::default();
        assert_eq!(empty.insert_after(0, 3, "git"), Some(0));
        assert_projection_consistent(&grid);
    }

    #[test]
    fn delete_clamps_column_to_shorter_row() {
        let mut grid = sample_grid();
        assert_eq!(grid.delete(0, 1), Some((0, 0)));
        assert_eq!(grid.row_len(0), 1);
        assert_projection_consistent(&grid);
    }

    #[test]
    fn delete_last_entry_removes_row() {
        let mut grid = sample_grid();
        assert_eq!(grid.delete(1, 0), Some((0, 0)));
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn delete_last_entry_of_last_row_leaves_empty_row() {
        let mut grid = SegmentGrid::from_rows(vec![vec![SegmentEntry::new("model", true)]]);
        assert_eq!(grid.delete(0, 0), Some((0, 0)));
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.row_len(0), 0);
        assert_eq!(grid.delete(0, 0), None);
    }

    #[test]
    fn cycle_name_reenables_entry() {
        let mut grid = sample_grid();
        let catalog = ["model", "git", "cost"];
        assert_eq!(grid.cycle_name(0, 1, CycleDirection::Forward, &catalog), Some(1));
        let entry = grid.entry(0, 1).unwrap();
        assert_eq!(entry.name, "cost");
        assert!(entry.enabled);
    }

    #[test]
    fn cycle_name_on_empty_row_creates_first_entry() {
        let mut grid = SegmentGrid::default();
        assert_eq!(grid.cycle_name(0, 0, CycleDirection::Backward, &["git", "cost"]), Some(0));
        assert_eq!(grid.entry(0, 0).map(|entry| entry.name.as_str()), Some("git"));
    }

    #[rstest]
    #[case(0, 1, Some(1))]
    #[case(1, -1, Some(0))]
    #[case(0, -1, None)]
    #[case(1, 1, None)]
    fn move_within_row_does_not_wrap(
        #[case] col: usize,
        #[case] delta: isize,
        #[case] expected: Option<usize>,
    ) {
        let mut grid = sample_grid();
        assert_eq!(grid.move_within_row(0, col, delta), expected);
    }

    #[test]
    fn move_within_row_swaps_entries() {
        let mut grid = sample_grid();
        grid.move_within_row(0, 0, 1);
        assert_eq!(grid.entry(0, 0).unwrap().name, "git");
        assert_eq!(grid.entry(0, 1).unwrap().name, "model");
    }

    #[test]
    fn insert_and_delete_rows_keep_grid_non_empty() {
        let mut grid = sample_grid();
        assert_eq!(grid.insert_row_after(0, "model"), Some(1));
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.row(1).unwrap(), &[SegmentEntry::new("model", true)]);

        assert_eq!(grid.delete_row(2), Some(1));
        assert_eq!(grid.delete_row(1), Some(0));
        assert_eq!(grid.delete_row(0), Some(0));
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.row_len(0), 0);
        assert_eq!(grid.delete_row(4), None);
    }

    #[test]
    fn move_row_swaps_neighbours_without_wrapping() {
        let mut grid = sample_grid();
        assert_eq!(grid.move_row(1, -1), Some(0));
        assert_eq!(grid.entry(0, 0).unwrap().name, "cost");
        assert_eq!(grid.move_row(0, -1), None);
        assert_eq!(grid.move_row(1, 1), None);
    }

    #[test]
    fn set_name_reenables_and_fills_empty_rows() {
        let mut grid = sample_grid();
        assert_eq!(grid.set_name(0, 1, "session"), Some(1));
        assert_eq!(grid.entry(0, 1), Some(&SegmentEntry::new("session", true)));

        let mut empty = SegmentGrid::default();
        assert_eq!(empty.set_name(0, 0, "cost"), Some(0));
        assert_eq!(empty.row_len(0), 1);
    }

    #[test]
    fn projection_stays_consistent_across_mixed_operations() {
        let mut grid = sample_grid();
        let catalog = ["model", "git", "cost"];
        grid.insert_row_after(1, "git");
        grid.insert_after(2, 0, "cost");
        grid.toggle(2, 1);
        grid.delete(0, 0);
        grid.cycle_name(1, 0, CycleDirection::Backward, &catalog);
        grid.move_row(2, -1);
        grid.delete_row(0);
        assert_projection_consistent(&grid);
    }
}
