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

//! Payroll aggregation engine.
//!
//! The [`Engine`] owns the two in-memory record collections assembled
//! once at startup: the deduplicated payroll records and the department
//! roster. Both are read-only after construction; the whole run is a
//! single sequential pass.
//!
//! # Invariants
//!
//! - Every reported employee has a department record; IDs with no match
//!   are skipped as recoverable warnings and contribute nothing to any
//!   total.
//! - Each distinct payroll line is aggregated exactly once (the engine
//!   is always built from deduplicated lines).
//! - All pay amounts are carried at 2-decimal precision, per-employee
//!   values and batch totals alike, so rounding never compounds
//!   differently between the two.

use crate::base::{EmployeeId, to_money};
use crate::dedup::LineSet;
use crate::error::PayrollError;
use crate::record::{self, DepartmentRecord, PayrollRecord};
use crate::roster::Roster;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Aggregated pay for one employee over the period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeTotals {
    pub employee_id: EmployeeId,
    pub name: String,
    pub hours_worked: Decimal,
    pub ot_hours_worked: Decimal,
    pub regular_pay: Decimal,
    pub ot_pay: Decimal,
    pub total_pay: Decimal,
}

/// Running totals across the whole batch.
///
/// An explicit accumulator value owned by the report loop; there is no
/// global state. Accumulation happens in ascending employee-ID order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchTotals {
    pub employees_paid: u32,
    pub regular_pay: Decimal,
    pub ot_pay: Decimal,
}

impl BatchTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one employee's totals into the batch.
    pub fn add(&mut self, totals: &EmployeeTotals) {
        self.employees_paid += 1;
        self.regular_pay = to_money(self.regular_pay + totals.regular_pay);
        self.ot_pay = to_money(self.ot_pay + totals.ot_pay);
    }
}

/// Single-pass payroll aggregation over in-memory records.
#[derive(Debug)]
pub struct Engine {
    payroll: Vec<PayrollRecord>,
    roster: Roster,
}

impl Engine {
    /// Creates an engine over already-deduplicated payroll records and a
    /// department roster.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::EmptyPayroll`] - no valid payroll record exists.
    /// - [`PayrollError::EmptyDepartments`] - no valid department record exists.
    pub fn new(payroll: Vec<PayrollRecord>, roster: Roster) -> Result<Self, PayrollError> {
        if payroll.is_empty() {
            return Err(PayrollError::EmptyPayroll);
        }
        if roster.is_empty() {
            return Err(PayrollError::EmptyDepartments);
        }
        Ok(Self { payroll, roster })
    }

    /// Assembles an engine from raw source lines: deduplicates the
    /// payroll lines, parses both families (skipping malformed lines
    /// with stderr warnings), and builds the roster.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::new`]: fatal when either family yields no
    /// valid record.
    pub fn from_lines(
        payroll_lines: &[String],
        department_lines: &[String],
    ) -> Result<Self, PayrollError> {
        let distinct: LineSet = payroll_lines.iter().collect();
        let payroll = record::parse_payroll_lines(distinct.lines());
        let departments = record::parse_department_lines(department_lines);
        Self::new(payroll, Roster::from_records(departments))
    }

    /// Sorted, distinct employee IDs referenced by at least one payroll
    /// record. Defines the iteration order for all reporting.
    pub fn employee_ids(&self) -> Vec<EmployeeId> {
        let ids: BTreeSet<EmployeeId> = self.payroll.iter().map(|r| r.employee_id).collect();
        ids.into_iter().collect()
    }

    /// Looks up the department record for an employee.
    pub fn resolve(&self, employee_id: EmployeeId) -> Option<&DepartmentRecord> {
        self.roster.resolve(employee_id)
    }

    /// Aggregates all payroll records for one employee.
    ///
    /// Returns `None` for an unknown employee (no department record);
    /// the caller reports the skip and moves on. An employee with a
    /// department record but zero matching hours still aggregates to a
    /// zero-pay result.
    pub fn totals_for(&self, employee_id: EmployeeId) -> Option<EmployeeTotals> {
        let department = self.roster.resolve(employee_id)?;

        let mut hours_worked = Decimal::ZERO;
        let mut ot_hours_worked = Decimal::ZERO;
        for record in self.payroll.iter().filter(|r| r.employee_id == employee_id) {
            hours_worked += record.hours_worked;
            ot_hours_worked += record.ot_hours_worked;
        }

        let regular_pay = to_money(department.pay_rate * hours_worked);
        let ot_pay = to_money(department.ot_rate * ot_hours_worked);
        let total_pay = to_money(regular_pay + ot_pay);

        Some(EmployeeTotals {
            employee_id,
            name: department.name.clone(),
            hours_worked,
            ot_hours_worked,
            regular_pay,
            ot_pay,
            total_pay,
        })
    }

    /// Number of deduplicated payroll records held by the engine.
    pub fn record_count(&self) -> usize {
        self.payroll.len()
    }
}
