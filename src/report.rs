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

//! Report output.
//!
//! One line per employee in ascending-ID order, then a totals block.
//! Lines are written as each employee completes (streaming, nothing is
//! withheld on a later failure); only the totals block waits for the
//! full set.
//!
//! # Format
//!
//! ```text
//! Employee #7 (Alice) earned $360.00 during the period
//! Employees paid: 1
//! Total regular pay: $300.00
//! Total overtime pay: $60.00
//! ```

use crate::engine::{BatchTotals, Engine};
use std::io::Write;

/// Writes the full report for a run and returns the batch totals.
///
/// Employees with no department record get a stderr warning and no
/// output line; they contribute nothing to the totals. Output is
/// deterministic for identical input: ascending employee-ID order,
/// amounts always at two decimals.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_report<W: Write>(engine: &Engine, mut out: W) -> std::io::Result<BatchTotals> {
    let mut batch = BatchTotals::new();

    for employee_id in engine.employee_ids() {
        let Some(totals) = engine.totals_for(employee_id) else {
            eprintln!(
                "warning: employee #{} has payroll records but no department record, skipping",
                employee_id
            );
            continue;
        };

        writeln!(
            out,
            "Employee #{} ({}) earned ${:.2} during the period",
            totals.employee_id, totals.name, totals.total_pay
        )?;
        batch.add(&totals);
    }

    writeln!(out, "Employees paid: {}", batch.employees_paid)?;
    writeln!(out, "Total regular pay: ${:.2}", batch.regular_pay)?;
    writeln!(out, "Total overtime pay: ${:.2}", batch.ot_pay)?;
    out.flush()?;

    Ok(batch)
}
