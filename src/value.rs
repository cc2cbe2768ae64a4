// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use crate::eval::EvalError;

/// A calculator operand or result.
///
/// Integer literals are kept as `Long` so that bitwise AND stays exact over the whole
/// `i64` range. Every other operation works on the `f64` view of the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Double(f64),
    Long(i64),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Double(value) => value,
            Value::Long(value) => value as f64,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_f64() == 0.0
    }

    /// The value as an `i64`, if it has no fractional part.
    ///
    /// Doubles outside the `i64` range saturate. Infinities and NaN are not integral.
    pub fn as_integral(&self) -> Option<i64> {
        match *self {
            Value::Long(value) => Some(value),
            Value::Double(value) if value.fract() == 0.0 => Some(value as i64),
            Value::Double(_) => None,
        }
    }

    pub fn add(&self, other: &Value) -> Value {
        Value::Double(self.as_f64() + other.as_f64())
    }

    pub fn sub(&self, other: &Value) -> Value {
        Value::Double(self.as_f64() - other.as_f64())
    }

    pub fn and(&self, other: &Value) -> Result<Value, EvalError> {
        match (self.as_integral(), other.as_integral()) {
            (Some(a), Some(b)) => Ok(Value::Long(a & b)),
            _ => Err(EvalError::NonIntegerAnd),
        }
    }

    pub fn div(&self, other: &Value) -> Result<Value, EvalError> {
        if other.is_zero() {
            return Err(EvalError::DivideByZero);
        }
        Ok(Value::Double(self.as_f64() / other.as_f64()))
    }

    pub fn pow(&self, other: &Value) -> Result<Value, EvalError> {
        let (base, exponent) = (self.as_f64(), other.as_f64());
        if exponent == 0.0 {
            return Ok(Value::Double(1.0));
        }
        if base == 0.0 {
            if exponent < 0.0 {
                return Err(EvalError::ZeroToNegativePower);
            }
            if exponent > 0.0 {
                return Ok(Value::Double(0.0));
            }
        }
        Ok(Value::Double(base.powf(exponent)))
    }

    pub fn rem(&self, other: &Value) -> Result<Value, EvalError> {
        if other.is_zero() {
            return Err(EvalError::DivideByZero);
        }
        if self.is_zero() {
            return Ok(Value::Double(0.0));
        }
        Ok(Value::Double(self.as_f64() % other.as_f64()))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}
