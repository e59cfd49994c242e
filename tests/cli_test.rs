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

//! End-to-end tests against the real binary and a real directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_main"))
        .args(args)
        .output()
        .expect("binary should spawn")
}

fn run_on(dir: &Path) -> Output {
    run(&["-d", dir.to_str().unwrap()])
}

#[test]
fn happy_path_prints_report_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0104.2016"), "7,10,0\n").unwrap();
    fs::write(dir.path().join("0105.2016"), "7,5,2\n9,8,0\n").unwrap();
    fs::write(
        dir.path().join("d3"),
        "D3-7:Alice:Engineering:20.00:30.00\nD3-9:Bob:Engineering:10.00:15.00\n",
    )
    .unwrap();

    let output = run_on(dir.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Employee #7 (Alice) earned $360.00 during the period\n\
         Employee #9 (Bob) earned $80.00 during the period\n\
         Employees paid: 2\n\
         Total regular pay: $380.00\n\
         Total overtime pay: $60.00\n"
    );
}

#[test]
fn duplicate_day_file_content_counts_once() {
    let dir = tempfile::tempdir().unwrap();
    // The same line lands in two files; it must aggregate once.
    fs::write(dir.path().join("0104.2016"), "7,10,0\n").unwrap();
    fs::write(dir.path().join("0111.2016"), "7,10,0\n").unwrap();
    fs::write(dir.path().join("d3"), "D3-7:Alice:Eng:20.00:30.00\n").unwrap();

    let output = run_on(dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("earned $200.00"));
}

#[test]
fn no_department_files_is_fatal_with_no_employee_lines() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0104.2016"), "7,10,0\n").unwrap();

    let output = run_on(dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no department files"));
}

#[test]
fn no_payroll_files_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("d3"), "D3-7:Alice:Eng:20.00:30.00\n").unwrap();

    let output = run_on(dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_directory_is_fatal() {
    let output = run(&["-d", "/no/such/directory"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn wrong_flag_exits_nonzero_with_usage() {
    let output = run(&["--bogus", "/tmp"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.to_lowercase().contains("usage"));
}

#[test]
fn missing_argument_exits_nonzero() {
    let output = run(&[]);
    assert!(!output.status.success());
}

#[test]
fn unknown_employee_warns_on_stderr_but_run_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0104.2016"), "7,10,0\n8,4,0\n").unwrap();
    fs::write(dir.path().join("d3"), "D3-7:Alice:Eng:20.00:30.00\n").unwrap();

    let output = run_on(dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stdout.contains("#8"));
    assert!(stderr.contains("employee #8"));
}

#[test]
fn files_outside_both_patterns_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0104.2016"), "7,10,0\n").unwrap();
    fs::write(dir.path().join("d3"), "D3-7:Alice:Eng:20.00:30.00\n").unwrap();
    // Second half of the year, wrong year, and unrelated names.
    fs::write(dir.path().join("0704.2016"), "7,99,99\n").unwrap();
    fs::write(dir.path().join("0104.2017"), "7,99,99\n").unwrap();
    fs::write(dir.path().join("README"), "not a record file\n").unwrap();

    let output = run_on(dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("earned $200.00"));
}
