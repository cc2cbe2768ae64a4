// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use std::borrow::Cow;

use pest::Parser;
use pest::iterators::Pair;
use thiserror::Error;

use crate::format::NumberFormat;
use crate::parser::{OperandParser, Rule};
use crate::value::Value;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,

    #[error("Invalid number: {0}")]
    Syntax(String),

    #[error("Unexpected decimal separator '{found}', expected '{expected}'")]
    UnexpectedSeparator { found: char, expected: char },
}

/// Parses operand text typed by the user.
///
/// The format's own infinity, NaN and negative sign symbols are accepted alongside the
/// culture-neutral spellings. Plain integer literals become `Value::Long`, except for
/// "-0" which has to keep its sign and therefore becomes a `Value::Double`. Everything
/// else is a `Value::Double`.
pub fn parse(text: &str, format: &NumberFormat) -> Result<Value, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(value) = symbol_value(trimmed, format) {
        return Ok(Value::from(value));
    }

    let canonical = match format.negative_sign.as_str() {
        "" | "-" => Cow::Borrowed(trimmed),
        sign => Cow::Owned(trimmed.replace(sign, "-")),
    };

    let syntax_error = || ParseError::Syntax(text.to_string());
    let mut pairs = OperandParser::parse(Rule::operand, &canonical).map_err(|_| syntax_error())?;
    let operand = pairs.next().ok_or_else(syntax_error)?;

    let mut negative = false;
    for pair in operand.into_inner() {
        match pair.as_rule() {
            Rule::sign => negative = pair.as_str() != "+",
            Rule::infinity if negative => return Ok(Value::from(f64::NEG_INFINITY)),
            Rule::infinity => return Ok(Value::from(f64::INFINITY)),
            Rule::nan => return Ok(Value::from(f64::NAN)),
            Rule::decimal => {
                return Decimal::try_from_pair(pair, format)?
                    .into_value(negative)
                    .ok_or_else(syntax_error);
            }
            _ => {}
        }
    }

    Err(syntax_error())
}

fn symbol_value(text: &str, format: &NumberFormat) -> Option<f64> {
    if text == format.nan {
        Some(f64::NAN)
    } else if text == format.positive_infinity {
        Some(f64::INFINITY)
    } else if text == format.negative_infinity {
        Some(f64::NEG_INFINITY)
    } else {
        None
    }
}

/// Pieces of a decimal literal, with the separator already checked against the format.
struct Decimal<'i> {
    integer: &'i str,
    fraction: Option<&'i str>,
    exponent: Option<String>,
}

impl<'i> Decimal<'i> {
    fn try_from_pair(decimal: Pair<'i, Rule>, format: &NumberFormat) -> Result<Self, ParseError> {
        let mut result = Decimal {
            integer: "",
            fraction: None,
            exponent: None,
        };

        for part in decimal.into_inner() {
            match part.as_rule() {
                Rule::integer_part => result.integer = part.as_str(),
                Rule::separator => {
                    let found = part.as_str().chars().next().unwrap_or_default();
                    if found != format.decimal_separator {
                        return Err(ParseError::UnexpectedSeparator {
                            found,
                            expected: format.decimal_separator,
                        });
                    }
                    result.fraction = Some("");
                }
                Rule::fraction_part => result.fraction = Some(part.as_str()),
                Rule::exponent => result.exponent = Some(Self::exponent(part)),
                _ => {}
            }
        }

        Ok(result)
    }

    fn exponent(exponent: Pair<'i, Rule>) -> String {
        exponent
            .into_inner()
            .map(|part| match part.as_rule() {
                Rule::exponent_sign if part.as_str() == "+" => "",
                Rule::exponent_sign => "-",
                _ => part.as_str(),
            })
            .collect()
    }

    fn into_value(self, negative: bool) -> Option<Value> {
        let sign = if negative { "-" } else { "" };

        if self.fraction.is_none() && self.exponent.is_none() {
            if let Ok(value) = format!("{sign}{}", self.integer).parse::<i64>() {
                if value != 0 || !negative {
                    return Some(Value::from(value));
                }
            }
        }

        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        let fraction = match self.fraction {
            Some(fraction) if !fraction.is_empty() => fraction,
            _ => "0",
        };
        let exponent = self.exponent.as_deref().unwrap_or("0");

        format!("{sign}{integer}.{fraction}e{exponent}")
            .parse::<f64>()
            .ok()
            .map(Value::from)
    }
}
