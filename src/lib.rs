// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

#[cfg(test)]
#[macro_use]
extern crate assert2;

pub mod eval;
pub mod format;
pub mod operand;
pub mod parser;
pub mod ui;
pub mod value;

pub use eval::{EvalError, Operator, evaluate, evaluate_values};
pub use format::{FormatError, NumberFormat};
pub use operand::ParseError;
pub use value::Value;

use crate::ui::CalculatorForm;

/// Text in, display text out.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    format: NumberFormat,
}

impl Calculator {
    pub fn new(format: NumberFormat) -> Self {
        Calculator { format }
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Parses both operands, applies `op` and formats the outcome.
    ///
    /// Domain errors such as division by zero are part of the returned text; only
    /// operands that fail to parse produce an `Err`.
    pub fn calculate(&self, first: &str, op: Operator, second: &str) -> Result<String, ParseError> {
        let a = self.format.parse(first)?;
        let b = self.format.parse(second)?;
        Ok(self.format.format_outcome(&evaluate_values(&a, &b, op)))
    }

    pub fn form(&self) -> CalculatorForm {
        CalculatorForm::new(self.format.clone())
    }
}
