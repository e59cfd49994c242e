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

use clap::Parser;
use payroll_run_rs::{Engine, discovery, report};
use std::path::PathBuf;
use std::process;

/// Payroll Run - reconstruct semi-annual payroll totals
///
/// Reads per-day payroll files (MMDD.2016, first six months) and
/// per-department files (d<code>) from the given directory and prints
/// one line per employee plus batch totals to stdout. Recoverable
/// warnings (malformed lines, employees with no department record) go
/// to stderr and never abort the run.
#[derive(Parser, Debug)]
#[command(name = "payroll-run-rs")]
#[command(about = "A batch payroll engine over flat-text records", long_about = None)]
struct Args {
    /// Directory containing the payroll and department source files
    #[arg(short = 'd', value_name = "DIR")]
    directory: PathBuf,
}

fn main() {
    // Parse command line arguments; wrong flag or arity exits non-zero
    // with a usage message.
    let args = Args::parse();

    // Discover and read both source families. Any failure here is
    // fatal: no employee output has been produced yet.
    let sources = match discovery::discover(&args.directory) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Assemble the engine: dedup payroll lines, parse both families,
    // build the roster. Malformed lines warn on stderr and are skipped;
    // an empty resulting dataset is fatal.
    let engine = match Engine::from_lines(&sources.payroll_lines, &sources.department_lines) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Stream the report to stdout.
    if let Err(e) = report::write_report(&engine, std::io::stdout().lock()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}
