// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::eval::EvalError;
use crate::operand::{self, ParseError};
use crate::value::Value;

/// Exponents outside this range are shown in scientific notation.
const FIXED_NOTATION_EXPONENTS: std::ops::Range<i32> = -4..15;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown culture: {0}")]
    UnknownCulture(String),
}

/// Culture-specific symbols used to parse operands and display results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub negative_sign: String,
    pub positive_infinity: String,
    pub negative_infinity: String,
    pub nan: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

impl NumberFormat {
    pub fn invariant() -> Self {
        Self {
            decimal_separator: '.',
            negative_sign: "-".to_string(),
            positive_infinity: "Infinity".to_string(),
            negative_infinity: "-Infinity".to_string(),
            nan: "NaN".to_string(),
        }
    }

    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            negative_sign: "-".to_string(),
            positive_infinity: "∞".to_string(),
            negative_infinity: "-∞".to_string(),
            nan: "NaN".to_string(),
        }
    }

    pub fn da_dk() -> Self {
        Self {
            decimal_separator: ',',
            ..Self::en_us()
        }
    }

    pub fn de_de() -> Self {
        Self::da_dk()
    }

    pub fn sv_se() -> Self {
        Self {
            decimal_separator: ',',
            negative_sign: "−".to_string(),
            positive_infinity: "∞".to_string(),
            negative_infinity: "−∞".to_string(),
            nan: "NaN".to_string(),
        }
    }

    /// Looks up a preset by culture name, e.g. `da-DK` or `en_us`.
    pub fn for_culture(name: &str) -> Result<Self, FormatError> {
        match name.replace('_', "-").to_ascii_lowercase().as_str() {
            "" | "invariant" => Ok(Self::invariant()),
            "en" | "en-us" => Ok(Self::en_us()),
            "da" | "da-dk" => Ok(Self::da_dk()),
            "de" | "de-de" => Ok(Self::de_de()),
            "sv" | "sv-se" => Ok(Self::sv_se()),
            _ => Err(FormatError::UnknownCulture(name.to_string())),
        }
    }

    pub fn parse(&self, text: &str) -> Result<Value, ParseError> {
        operand::parse(text, self)
    }

    pub fn format_value(&self, value: &Value) -> String {
        match *value {
            Value::Long(value) if value < 0 => {
                format!("{}{}", self.negative_sign, value.unsigned_abs())
            }
            Value::Long(value) => value.to_string(),
            Value::Double(value) => self.format_double(value),
        }
    }

    pub fn format_outcome(&self, outcome: &Result<Value, EvalError>) -> String {
        match outcome {
            Ok(value) => self.format_value(value),
            Err(err) => err.to_string(),
        }
    }

    fn format_double(&self, value: f64) -> String {
        if value.is_nan() {
            return self.nan.clone();
        }
        if value.is_infinite() {
            return if value > 0.0 {
                self.positive_infinity.clone()
            } else {
                self.negative_infinity.clone()
            };
        }

        let sign = if value.is_sign_negative() {
            self.negative_sign.as_str()
        } else {
            ""
        };
        if value == 0.0 {
            return format!("{sign}0");
        }

        // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3".
        let scientific = format!("{:e}", value.abs());
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
        let exponent = exponent.parse::<i32>().unwrap_or(0);
        let digits = mantissa.replace('.', "");

        format!("{sign}{}", self.layout_digits(&digits, exponent))
    }

    fn layout_digits(&self, digits: &str, exponent: i32) -> String {
        let separator = self.decimal_separator;

        if !FIXED_NOTATION_EXPONENTS.contains(&exponent) {
            let (first, rest) = digits.split_at(1);
            let exponent_sign = if exponent < 0 {
                self.negative_sign.as_str()
            } else {
                "+"
            };
            return if rest.is_empty() {
                format!("{first}E{exponent_sign}{:02}", exponent.abs())
            } else {
                format!("{first}{separator}{rest}E{exponent_sign}{:02}", exponent.abs())
            };
        }

        if exponent < 0 {
            let zeros = "0".repeat((-exponent - 1) as usize);
            return format!("0{separator}{zeros}{digits}");
        }

        let integer_len = exponent as usize + 1;
        if digits.len() <= integer_len {
            format!("{digits}{}", "0".repeat(integer_len - digits.len()))
        } else {
            let (integer, fraction) = digits.split_at(integer_len);
            format!("{integer}{separator}{fraction}")
        }
    }
}
