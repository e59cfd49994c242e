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

//! Department roster: rate lookup by employee ID.

use crate::base::EmployeeId;
use crate::record::DepartmentRecord;
use std::collections::HashMap;

/// Immutable lookup table from employee ID to department record.
///
/// Built once from the parsed department lines. Duplicate IDs resolve
/// first-match-wins in concatenated source order; later records for the
/// same ID are ignored.
#[derive(Debug, Default)]
pub struct Roster {
    records: HashMap<EmployeeId, DepartmentRecord>,
}

impl Roster {
    /// Builds a roster from department records in source order.
    pub fn from_records(records: impl IntoIterator<Item = DepartmentRecord>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            // First match wins.
            map.entry(record.employee_id).or_insert(record);
        }
        Self { records: map }
    }

    /// Looks up the department record for an employee.
    ///
    /// Returns `None` for an unknown employee: an ID present in payroll
    /// data with no department record. Callers treat that as a
    /// recoverable skip, never a fatal condition.
    pub fn resolve(&self, employee_id: EmployeeId) -> Option<&DepartmentRecord> {
        self.records.get(&employee_id)
    }

    /// Number of distinct employees on the roster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
