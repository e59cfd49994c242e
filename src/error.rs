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

//! Fatal error types for a payroll run.
//!
//! Only conditions that abort the whole run live here. Recoverable
//! faults (a malformed line, an employee with no department record) are
//! reported on stderr at the point of skip and never surface as a
//! `PayrollError`.

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a payroll run before any employee output.
#[derive(Error, Debug)]
pub enum PayrollError {
    /// Input directory is missing, not a directory, or cannot be listed.
    #[error("cannot read input directory '{}': {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No file in the directory matched the payroll name pattern.
    #[error("no payroll files found in '{}'", path.display())]
    NoPayrollFiles { path: PathBuf },

    /// No file in the directory matched the department name pattern.
    #[error("no department files found in '{}'", path.display())]
    NoDepartmentFiles { path: PathBuf },

    /// A matched source file could not be read.
    #[error("cannot read source file '{}': {source}", path.display())]
    SourceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Matching files existed but no valid payroll record survived parsing.
    #[error("payroll sources contained no valid records")]
    EmptyPayroll,

    /// Matching files existed but no valid department record survived parsing.
    #[error("department sources contained no valid records")]
    EmptyDepartments,
}
