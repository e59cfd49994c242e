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

//! Core identifier type and the monetary scale used throughout the crate.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places carried by every monetary amount.
pub const MONEY_SCALE: u32 = 2;

/// Unique identifier for an employee.
///
/// Wraps a `u32`. Employee IDs are non-negative integers; the same ID
/// appears on many payroll lines but resolves to at most one department
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixes an amount to the monetary scale, truncating toward zero.
///
/// All pay computation happens at 2-decimal precision, intermediate sums
/// included, matching decimal-scale arithmetic with `scale=2`. Truncation
/// keeps `10.005 * 2` at `20.01`.
pub fn to_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn employee_id_display() {
        assert_eq!(EmployeeId(7).to_string(), "7");
        assert_eq!(EmployeeId(10042).to_string(), "10042");
    }

    #[test]
    fn to_money_truncates_toward_zero() {
        assert_eq!(to_money(dec!(20.019)), dec!(20.01));
        assert_eq!(to_money(dec!(20.010)), dec!(20.01));
        assert_eq!(to_money(dec!(0.999)), dec!(0.99));
    }

    #[test]
    fn to_money_keeps_exact_amounts() {
        assert_eq!(to_money(dec!(320.00)), dec!(320.00));
        assert_eq!(to_money(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn to_money_matches_scale_two_product() {
        // 10.005 * 2 = 20.010 exactly; at scale 2 that is 20.01.
        let product = dec!(10.005) * dec!(2);
        assert_eq!(to_money(product), dec!(20.01));
    }
}
