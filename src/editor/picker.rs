// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CCHLine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of CCHLine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filterable catalog overlay used to assign a segment name.

use crate::model::catalog_position;

/// Catalog names containing every whitespace-separated token of `query`, case-insensitively.
///
/// Catalog order is preserved; an empty query matches everything.
pub fn filter_catalog<'a>(catalog: &[&'a str], query: &str) -> Vec<&'a str> {
    let tokens = query.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>();
    catalog
        .iter()
        .copied()
        .filter(|name| {
            let name = name.to_lowercase();
            tokens.iter().all(|token| name.contains(token.as_str()))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    pub query: String,
    pub selected: usize,
    /// Grid cell the picker was opened on.
    pub target: (usize, usize),
    matches: Vec<&'static str>,
    catalog: &'static [&'static str],
}

impl Picker {
    /// Opens on `target`, preselecting `current` when it is in the catalog.
    pub fn open(
        catalog: &'static [&'static str],
        target: (usize, usize),
        current: Option<&str>,
    ) -> Self {
        let selected = current.and_then(|name| catalog_position(catalog, name)).unwrap_or(0);
        Self { query: String::new(), selected, target, matches: catalog.to_vec(), catalog }
    }

    pub fn matches(&self) -> &[&'static str] {
        &self.matches
    }

    pub fn selected_name(&self) -> Option<&'static str> {
        self.matches.get(self.selected).copied()
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    /// Moves the selection by `delta`, wrapping around the filtered list.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.matches.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn refilter(&mut self) {
        self.matches = filter_catalog(self.catalog, &self.query);
        self.selected = self.selected.min(self.matches.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{filter_catalog, Picker};
    use crate::model::SEGMENT_CATALOG;

    #[test]
    fn tokens_are_matched_with_and_semantics() {
        let catalog = ["cost", "cch_provider", "cch_cost"];
        assert_eq!(filter_catalog(&catalog, "cch co"), vec!["cch_cost"]);
    }

    #[test]
    fn empty_query_keeps_catalog_order() {
        assert_eq!(filter_catalog(SEGMENT_CATALOG, "  "), SEGMENT_CATALOG.to_vec());
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(filter_catalog(SEGMENT_CATALOG, "GIT"), vec!["git"]);
    }

    #[rstest]
    #[case("c", "c o")]
    #[case("cch", "cch cost")]
    #[case("", "sess")]
    fn adding_tokens_never_grows_matches(#[case] broad: &str, #[case] narrow: &str) {
        let broad = filter_catalog(SEGMENT_CATALOG, broad);
        let narrow = filter_catalog(SEGMENT_CATALOG, narrow);
        assert!(narrow.len() <= broad.len());
        assert!(narrow.iter().all(|name| broad.contains(name)));
    }

    #[test]
    fn open_seeds_selection_from_current_name() {
        let picker = Picker::open(SEGMENT_CATALOG, (0, 1), Some("cost"));
        assert_eq!(picker.selected_name(), Some("cost"));

        let unknown = Picker::open(SEGMENT_CATALOG, (0, 1), Some("weather"));
        assert_eq!(unknown.selected, 0);
    }

    #[test]
    fn selection_wraps_and_is_clamped_after_filtering() {
        let mut picker = Picker::open(SEGMENT_CATALOG, (0, 0), Some("cch_limits"));
        picker.move_selection(1);
        assert_eq!(picker.selected_name(), Some("model"));
        picker.move_selection(-1);
        assert_eq!(picker.selected_name(), Some("cch_limits"));

        picker.push_char('g');
        picker.push_char('i');
        assert_eq!(picker.matches(), &["git"]);
        assert_eq!(picker.selected, 0);

        picker.push_char('z');
        assert!(picker.matches().is_empty());
        assert_eq!(picker.selected_name(), None);
        picker.move_selection(1);
        assert_eq!(picker.selected, 0);

        picker.pop_char();
        assert_eq!(picker.selected_name(), Some("git"));
    }
}
