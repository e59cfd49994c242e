// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Raw-line deduplication.
//!
//! Payroll sources may contain the same line more than once (the same
//! day's file concatenated twice, duplicated exports). Each distinct
//! line must be aggregated exactly once, so ingestion runs through a
//! [`LineSet`]: a set-union over raw source lines.
//!
//! Identity is exact textual equality of the line. Two records with the
//! same ID and hours but different formatting are distinct lines and are
//! both kept; semantic dedup is not this type's job.

use std::collections::HashSet;

/// An insertion-ordered set of raw source lines.
///
/// Combines a [`HashSet`] for O(1) duplicate detection with a `Vec`
/// preserving first-seen order. Inserting is idempotent: pushing a line
/// that is already present changes nothing.
#[derive(Debug, Default)]
pub struct LineSet {
    /// Lines already seen, for O(1) duplicate detection.
    seen: HashSet<String>,
    /// Distinct lines in first-seen order.
    lines: Vec<String>,
}

impl LineSet {
    /// Creates an empty line set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line, returning `false` if it was already present.
    pub fn insert(&mut self, line: &str) -> bool {
        if self.seen.contains(line) {
            return false;
        }
        self.seen.insert(line.to_owned());
        self.lines.push(line.to_owned());
        true
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Distinct lines in first-seen order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl<S: AsRef<str>> FromIterator<S> for LineSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = LineSet::new();
        for line in iter {
            set.insert(line.as_ref());
        }
        set
    }
}
