// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use thiserror::Error;

use crate::value::Value;

/// Domain errors of the evaluator. The messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("Cannot AND non-integers")]
    NonIntegerAnd,

    #[error("Cannot Divide by Zero")]
    DivideByZero,

    #[error("Cannot raise zero to negative exponent")]
    ZeroToNegativePower,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operator: {0}")]
pub struct UnknownOperator(pub String);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum)]
pub enum Operator {
    Add,
    Subtract,
    And,
    Divide,
    Power,
    Modulo,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::And,
        Operator::Divide,
        Operator::Power,
        Operator::Modulo,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::And => "&",
            Operator::Divide => "/",
            Operator::Power => "^",
            Operator::Modulo => "%",
        }
    }

    /// Caption of the form button that fires this operator.
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Add => "Add (+)",
            Operator::Subtract => "Subtract (−)",
            Operator::And => "AND (&)",
            Operator::Divide => "Divide (/)",
            Operator::Power => "Raise (^)",
            Operator::Modulo => "Modulo (mod)",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "−" | "sub" => Ok(Operator::Subtract),
            "&" | "and" => Ok(Operator::And),
            "/" | "div" => Ok(Operator::Divide),
            "^" | "pow" => Ok(Operator::Power),
            "%" | "mod" => Ok(Operator::Modulo),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

/// Applies `op` to two doubles.
pub fn evaluate(a: f64, b: f64, op: Operator) -> Result<Value, EvalError> {
    evaluate_values(&Value::from(a), &Value::from(b), op)
}

/// Applies `op` to two operands. `Long` operands keep AND exact beyond 2^53.
pub fn evaluate_values(a: &Value, b: &Value, op: Operator) -> Result<Value, EvalError> {
    match op {
        Operator::Add => Ok(a.add(b)),
        Operator::Subtract => Ok(a.sub(b)),
        Operator::And => a.and(b),
        Operator::Divide => a.div(b),
        Operator::Power => a.pow(b),
        Operator::Modulo => a.rem(b),
    }
}
