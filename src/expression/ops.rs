//! The binary operations attachable to operator token kinds.

use crate::expression::errors::EvaluationError;

/// A binary operation applied by [`Expression::Binary`] nodes.
///
/// All arithmetic is checked: any overflow, division by zero, or negative
/// exponent reports a fault instead of wrapping or panicking.
///
/// [`Expression::Binary`]: crate::expression::Expression::Binary
pub type BinaryOperation = fn(i64, i64) -> Result<i64, EvaluationError>;

pub fn add(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    lhs.checked_add(rhs).ok_or(EvaluationError::Overflow)
}

pub fn sub(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    lhs.checked_sub(rhs).ok_or(EvaluationError::Overflow)
}

pub fn mul(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    lhs.checked_mul(rhs).ok_or(EvaluationError::Overflow)
}

/// Integer division, truncating toward zero.
pub fn div(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    if rhs == 0 {
        return Err(EvaluationError::DivisionByZero);
    }
    lhs.checked_div(rhs).ok_or(EvaluationError::Overflow)
}

/// Integer exponentiation. The exponent must be non-negative; `0^0` is 1.
pub fn pow(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    if rhs < 0 {
        return Err(EvaluationError::NegativeExponent);
    }
    let exponent = u32::try_from(rhs).map_err(|_| EvaluationError::Overflow)?;
    lhs.checked_pow(exponent).ok_or(EvaluationError::Overflow)
}

pub fn less_than(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    Ok(i64::from(lhs < rhs))
}

pub fn equals(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    Ok(i64::from(lhs == rhs))
}

pub fn greater_than(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    Ok(i64::from(lhs > rhs))
}

pub fn less_equals(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    Ok(i64::from(lhs <= rhs))
}

pub fn greater_equals(lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    Ok(i64::from(lhs >= rhs))
}
