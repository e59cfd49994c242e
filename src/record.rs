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

//! Typed parsing of the two flat-text record families.
//!
//! # Payroll lines
//!
//! Comma-delimited, positional: `employeeID,hoursWorked,otHoursWorked`.
//! Trailing numeric fields may be absent or empty; an absent field is
//! explicitly `0`, never an error.
//!
//! ```text
//! 7,10,0
//! 7,5,2
//! 12,8
//! ```
//!
//! # Department lines
//!
//! Colon-delimited, positional:
//! `compositeKey:employeeName:departmentName:payRate:otRate`. The
//! employee ID is embedded in the composite key as the digits after the
//! final `-` (the whole field when there is no `-`), parsed as an exact
//! integer so ID `1` can never match `10`.
//!
//! ```text
//! D3-7:Alice:Engineering:20.00:30.00
//! ```
//!
//! Malformed lines signal a [`RecordError`]; batch callers skip them
//! with a stderr warning and keep going.

use crate::base::EmployeeId;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Why a single source line failed to parse.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Field-level failure: non-numeric value, wrong field count.
    #[error("{0}")]
    Malformed(#[from] csv::Error),

    /// Line had no fields at all.
    #[error("empty line")]
    Empty,

    /// A numeric field failed to parse.
    #[error("invalid numeric field '{0}'")]
    InvalidNumber(String),

    /// Hours or rates must be non-negative.
    #[error("negative value '{0}'")]
    Negative(Decimal),

    /// Composite key carries no parseable employee ID.
    #[error("no employee ID embedded in key '{0}'")]
    BadKey(String),
}

/// One deduplicated payroll line: hours worked by one employee on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRecord {
    pub employee_id: EmployeeId,
    pub hours_worked: Decimal,
    pub ot_hours_worked: Decimal,
}

impl PayrollRecord {
    /// Parses one payroll line.
    ///
    /// Payroll rows are mapped by position from the raw record rather
    /// than deserialized into a fixed-width struct: a short row (`7` or
    /// `7,8`) is valid input whose absent hour fields default to zero,
    /// not a length error.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] for a non-numeric employee ID, a
    /// non-numeric hour field, negative hours, or an empty line.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let row = read_record(line, b',')?;

        let id_field = row.get(0).ok_or(RecordError::Empty)?;
        let employee: u32 = id_field
            .parse()
            .map_err(|_| RecordError::InvalidNumber(id_field.to_string()))?;

        // Absent (or empty) numeric field defaults to zero. This is the
        // contract, not a side effect of coercion.
        let hours_worked = parse_hours(row.get(1))?;
        let ot_hours_worked = parse_hours(row.get(2))?;
        for value in [hours_worked, ot_hours_worked] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(RecordError::Negative(value));
            }
        }

        Ok(Self {
            employee_id: EmployeeId(employee),
            hours_worked,
            ot_hours_worked,
        })
    }
}

/// Parses an hour field, with missing and empty both meaning zero.
fn parse_hours(field: Option<&str>) -> Result<Decimal, RecordError> {
    match field {
        None | Some("") => Ok(Decimal::ZERO),
        Some(text) => text
            .parse()
            .map_err(|_| RecordError::InvalidNumber(text.to_string())),
    }
}

/// One department master line: an employee's name and pay rates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRecord {
    pub employee_id: EmployeeId,
    pub name: String,
    pub pay_rate: Decimal,
    pub ot_rate: Decimal,
}

/// Raw department row matching the positional line format.
#[derive(Debug, Deserialize)]
struct DepartmentRow {
    key: String,
    name: String,
    /// Positional department-name field, present in the format but
    /// unused by the pipeline.
    #[allow(dead_code)]
    department: String,
    pay_rate: Decimal,
    ot_rate: Decimal,
}

impl DepartmentRecord {
    /// Parses one department line.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] for a wrong field count, a non-numeric
    /// rate, a negative rate, or a composite key with no embedded
    /// numeric employee ID.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let row: DepartmentRow = deserialize_line(line, b':')?;

        for rate in [row.pay_rate, row.ot_rate] {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(RecordError::Negative(rate));
            }
        }

        let employee_id = extract_employee_id(&row.key)
            .ok_or_else(|| RecordError::BadKey(row.key.clone()))?;

        Ok(Self {
            employee_id,
            name: row.name,
            pay_rate: row.pay_rate,
            ot_rate: row.ot_rate,
        })
    }
}

/// Extracts the employee ID embedded after the final `-` of a composite
/// key (`D3-17` => 17). A key with no `-` must be the bare ID.
///
/// The extracted part is parsed as a whole integer; substring matching
/// is never used, so `1` and `10` stay distinct.
fn extract_employee_id(key: &str) -> Option<EmployeeId> {
    let id_part = match key.rsplit_once('-') {
        Some((_, id)) => id,
        None => key,
    };
    id_part.parse::<u32>().ok().map(EmployeeId)
}

/// Reads one line into a raw record with the given delimiter, for
/// formats whose trailing fields are optional.
fn read_record(line: &str, delimiter: u8) -> Result<csv::StringRecord, RecordError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All) // Handle whitespace in fields like " 7 , 10 "
        .flexible(true) // Allow missing trailing hour fields
        .has_headers(false)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    if rdr.read_record(&mut record)? {
        Ok(record)
    } else {
        Err(RecordError::Empty)
    }
}

/// Runs one line through a headerless csv reader with the given
/// delimiter, for formats where every field is required; a short row is
/// a length error.
fn deserialize_line<T: for<'de> Deserialize<'de>>(
    line: &str,
    delimiter: u8,
) -> Result<T, RecordError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All) // Handle whitespace in fields like " x : y "
        .flexible(true) // Let serde report the field-count mismatch
        .has_headers(false)
        .from_reader(line.as_bytes());

    match rdr.deserialize::<T>().next() {
        Some(Ok(row)) => Ok(row),
        Some(Err(e)) => Err(RecordError::Malformed(e)),
        None => Err(RecordError::Empty),
    }
}

/// Parses a batch of deduplicated payroll lines, skipping malformed ones
/// with a stderr warning.
pub fn parse_payroll_lines(lines: &[String]) -> Vec<PayrollRecord> {
    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        match PayrollRecord::parse(line) {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("warning: skipping payroll line '{}': {}", line, e),
        }
    }
    records
}

/// Parses a batch of department lines, skipping malformed ones with a
/// stderr warning.
pub fn parse_department_lines(lines: &[String]) -> Vec<DepartmentRecord> {
    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        match DepartmentRecord::parse(line) {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("warning: skipping department line '{}': {}", line, e),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_full_payroll_line() {
        let record = PayrollRecord::parse("7,10,2").unwrap();
        assert_eq!(record.employee_id, EmployeeId(7));
        assert_eq!(record.hours_worked, dec!(10));
        assert_eq!(record.ot_hours_worked, dec!(2));
    }

    #[test]
    fn missing_hour_fields_default_to_zero() {
        let record = PayrollRecord::parse("7").unwrap();
        assert_eq!(record.hours_worked, Decimal::ZERO);
        assert_eq!(record.ot_hours_worked, Decimal::ZERO);

        let record = PayrollRecord::parse("7,8").unwrap();
        assert_eq!(record.hours_worked, dec!(8));
        assert_eq!(record.ot_hours_worked, Decimal::ZERO);
    }

    #[test]
    fn empty_hour_fields_default_to_zero() {
        let record = PayrollRecord::parse("7,,2").unwrap();
        assert_eq!(record.hours_worked, Decimal::ZERO);
        assert_eq!(record.ot_hours_worked, dec!(2));
    }

    #[test]
    fn payroll_whitespace_is_trimmed() {
        let record = PayrollRecord::parse(" 7 , 10 , 2 ").unwrap();
        assert_eq!(record.employee_id, EmployeeId(7));
        assert_eq!(record.hours_worked, dec!(10));
    }

    #[test]
    fn non_numeric_id_is_malformed() {
        assert!(PayrollRecord::parse("seven,10,2").is_err());
    }

    #[test]
    fn negative_hours_are_rejected() {
        assert!(matches!(
            PayrollRecord::parse("7,-1,0"),
            Err(RecordError::Negative(_))
        ));
    }

    #[test]
    fn parse_department_line() {
        let record = DepartmentRecord::parse("D3-7:Alice:Engineering:20.00:30.00").unwrap();
        assert_eq!(record.employee_id, EmployeeId(7));
        assert_eq!(record.name, "Alice");
        assert_eq!(record.pay_rate, dec!(20.00));
        assert_eq!(record.ot_rate, dec!(30.00));
    }

    #[test]
    fn department_wrong_field_count_is_malformed() {
        assert!(DepartmentRecord::parse("D3-7:Alice:20.00").is_err());
    }

    #[test]
    fn embedded_id_is_matched_exactly() {
        // "1" must never come from a key carrying "10".
        assert_eq!(extract_employee_id("D2-10"), Some(EmployeeId(10)));
        assert_eq!(extract_employee_id("D2-1"), Some(EmployeeId(1)));
        assert_eq!(extract_employee_id("D2-1x"), None);
        assert_eq!(extract_employee_id("42"), Some(EmployeeId(42)));
        assert_eq!(extract_employee_id("D2-"), None);
    }

    #[test]
    fn key_without_numeric_id_is_rejected() {
        assert!(matches!(
            DepartmentRecord::parse("nokey:Alice:Eng:20.00:30.00"),
            Err(RecordError::BadKey(_))
        ));
    }

    #[test]
    fn batch_of_only_short_rows_is_not_empty() {
        // Short rows are valid records with zero defaults, so a source
        // made entirely of them must still yield a dataset.
        let lines = vec!["7".to_string(), "8,4".to_string()];
        let records = parse_payroll_lines(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hours_worked, Decimal::ZERO);
        assert_eq!(records[1].hours_worked, dec!(4));
        assert_eq!(records[1].ot_hours_worked, Decimal::ZERO);
    }

    #[test]
    fn batch_parse_skips_bad_lines() {
        let lines = vec![
            "7,10,0".to_string(),
            "garbage line".to_string(),
            "8,5,1".to_string(),
        ];
        let records = parse_payroll_lines(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id, EmployeeId(7));
        assert_eq!(records[1].employee_id, EmployeeId(8));
    }

    #[test]
    fn batch_parse_departments_skips_bad_lines() {
        let lines = vec![
            "D1-7:Alice:Eng:20.00:30.00".to_string(),
            "D1-bad:Bob:Eng:10.00:15.00".to_string(),
            "D1-9:Carol:Ops:12.50:18.75".to_string(),
        ];
        let records = parse_department_lines(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Carol");
    }
}
