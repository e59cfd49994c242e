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

//! Input file discovery.
//!
//! Two source families live side by side in the input directory:
//!
//! - Payroll files, one per day, named `MMDD.2016` with the month in
//!   01-06 (the first half of the year) and the day in 01-31. The day
//!   range is syntactic only; `0231.2016` is an accepted name.
//! - Department files, one per department, named `d<code>` with a one-
//!   or two-digit code (`d3`, `d42`).
//!
//! Matching names are sorted before reading so a byte-identical
//! directory always produces byte-identical output. A family with no
//! matching files is fatal for the run.

use crate::error::PayrollError;
use std::fs;
use std::path::Path;

/// Fixed year suffix for payroll file names.
const PAYROLL_YEAR: &str = "2016";

/// Raw source lines for one run, concatenated per family in sorted
/// file-name order. Blank lines are dropped at read time.
#[derive(Debug)]
pub struct Sources {
    pub payroll_lines: Vec<String>,
    pub department_lines: Vec<String>,
}

/// Whether a file name is a payroll source: `MMDD.2016`, month 01-06,
/// day 01-31.
pub fn is_payroll_name(name: &str) -> bool {
    let Some(date) = name.strip_suffix(&format!(".{PAYROLL_YEAR}")) else {
        return false;
    };
    if date.len() != 4 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let month: u32 = date[..2].parse().unwrap_or(0);
    let day: u32 = date[2..].parse().unwrap_or(0);
    (1..=6).contains(&month) && (1..=31).contains(&day)
}

/// Whether a file name is a department source: `d` plus a one- or
/// two-digit department code.
pub fn is_department_name(name: &str) -> bool {
    let Some(code) = name.strip_prefix('d') else {
        return false;
    };
    (1..=2).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_digit())
}

/// Scans the input directory and reads both source families.
///
/// # Errors
///
/// - [`PayrollError::Directory`] - the directory is missing or unreadable.
/// - [`PayrollError::NoPayrollFiles`] - no name matched the payroll pattern.
/// - [`PayrollError::NoDepartmentFiles`] - no name matched the department pattern.
/// - [`PayrollError::SourceFile`] - a matched file could not be read.
pub fn discover(dir: &Path) -> Result<Sources, PayrollError> {
    let entries = fs::read_dir(dir).map_err(|source| PayrollError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut payroll_names = Vec::new();
    let mut department_names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PayrollError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        let Ok(name) = entry.file_name().into_string() else {
            continue; // non-UTF-8 names can't match either pattern
        };
        if is_payroll_name(&name) {
            payroll_names.push(name);
        } else if is_department_name(&name) {
            department_names.push(name);
        }
    }

    if payroll_names.is_empty() {
        return Err(PayrollError::NoPayrollFiles { path: dir.to_path_buf() });
    }
    if department_names.is_empty() {
        return Err(PayrollError::NoDepartmentFiles { path: dir.to_path_buf() });
    }

    // Sorted names keep concatenation order independent of the
    // platform's directory enumeration order.
    payroll_names.sort();
    department_names.sort();

    Ok(Sources {
        payroll_lines: read_lines(dir, &payroll_names)?,
        department_lines: read_lines(dir, &department_names)?,
    })
}

/// Reads and concatenates the non-blank lines of the named files.
fn read_lines(dir: &Path, names: &[String]) -> Result<Vec<String>, PayrollError> {
    let mut lines = Vec::new();
    for name in names {
        let path = dir.join(name);
        let text = fs::read_to_string(&path)
            .map_err(|source| PayrollError::SourceFile { path, source })?;
        lines.extend(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_owned),
        );
    }
    Ok(lines)
}
