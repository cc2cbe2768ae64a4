// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use calcform::{Calculator, NumberFormat, Operator};
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Two-operand calculator.
///
/// Evaluates `FIRST OPERATOR SECOND` given on the command line, or one such line at a
/// time from stdin.
#[derive(Parser, Debug)]
#[command(name = "calcform", version, about)]
struct Cli {
    /// Culture used to parse operands and format results (invariant, en-US, da-DK, de-DE, sv-SE)
    #[arg(short, long, default_value = "invariant")]
    culture: String,

    /// FIRST OPERATOR SECOND
    #[arg(
        num_args = 3,
        value_names = ["FIRST", "OPERATOR", "SECOND"],
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    expression: Option<Vec<String>>,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn operators_help() -> String {
    Operator::ALL
        .iter()
        .map(|op| format!("{} {}", op.symbol(), op.label()))
        .join(", ")
}

fn calculate_line(calculator: &Calculator, line: &str) -> Result<String> {
    let Some((first, op, second)) = line.split_whitespace().collect_tuple() else {
        bail!("Expected FIRST OPERATOR SECOND, got {line:?}");
    };
    let op = op
        .parse::<Operator>()
        .with_context(|| format!("Supported operators: {}", operators_help()))?;

    Ok(calculator.calculate(first, op, second)?)
}

fn run(cli: Cli) -> Result<bool> {
    let format = NumberFormat::for_culture(&cli.culture)?;
    info!(culture = %cli.culture, separator = %format.decimal_separator, "Number format selected");
    let calculator = Calculator::new(format);

    if let Some(expression) = cli.expression {
        println!("{}", calculate_line(&calculator, &expression.join(" "))?);
        return Ok(true);
    }

    let mut all_ok = true;
    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match calculate_line(&calculator, &line) {
            Ok(shown) => {
                debug!(line = number + 1, %shown, "Calculated");
                println!("{shown}");
            }
            Err(err) => {
                eprintln!("line {}: {err:#}", number + 1);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

fn main() -> ExitCode {
    setup_logging();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
