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

//! # Payroll Run
//!
//! This library reconstructs semi-annual payroll totals from two
//! families of flat-text records: per-day payroll lines and
//! per-department employee master lines. It deduplicates payroll lines,
//! joins them to department pay rates by employee ID, sums regular and
//! overtime hours, and computes pay at fixed 2-decimal precision.
//!
//! ## Core Components
//!
//! - [`Engine`]: aggregation over the in-memory record collections
//! - [`Roster`]: department-record lookup by employee ID
//! - [`LineSet`]: raw-line deduplication for payroll sources
//! - [`write_report`]: streaming per-employee output plus batch totals
//! - [`PayrollError`]: fatal conditions that abort a run
//!
//! ## Example
//!
//! ```
//! use payroll_run_rs::Engine;
//! use payroll_run_rs::report::write_report;
//!
//! let payroll = vec!["7,10,0".to_string(), "7,5,2".to_string()];
//! let departments = vec!["D3-7:Alice:Engineering:20.00:30.00".to_string()];
//!
//! let engine = Engine::from_lines(&payroll, &departments).unwrap();
//! let mut out = Vec::new();
//! let totals = write_report(&engine, &mut out).unwrap();
//!
//! assert_eq!(totals.employees_paid, 1);
//! let report = String::from_utf8(out).unwrap();
//! assert!(report.starts_with("Employee #7 (Alice) earned $360.00 during the period"));
//! ```
//!
//! ## Pipeline
//!
//! raw sources → parser → deduplicator (payroll only) → employee index →
//! per ID: rate resolver → aggregator → reporter. Single-threaded,
//! single-pass; both record collections are read-only once built.

pub mod base;
pub mod dedup;
pub mod discovery;
mod engine;
pub mod error;
pub mod record;
pub mod report;
mod roster;

pub use base::EmployeeId;
pub use dedup::LineSet;
pub use engine::{BatchTotals, EmployeeTotals, Engine};
pub use error::PayrollError;
pub use record::{DepartmentRecord, PayrollRecord};
pub use report::write_report;
pub use roster::Roster;
