//! Integer semantics of the operators.
//!
//! Shared by the evaluator and the constant folder so a folded literal is
//! always the value evaluation would have produced.

use crate::error::{EvalError, EvalResult};
use yat_types::{BinOp, UnaryOp};

fn overflow(op: &str) -> EvalError {
    EvalError::ArithmeticFailure(format!("integer overflow in '{op}'"))
}

/// Apply a binary operator. Both operands are already evaluated; logical
/// operators do not short-circuit.
pub fn apply_binary(op: BinOp, a: i64, b: i64) -> EvalResult<i64> {
    let truth = |cond: bool| -> EvalResult<i64> { Ok(i64::from(cond)) };
    match op {
        BinOp::Add => a.checked_add(b).ok_or_else(|| overflow("+")),
        BinOp::Sub => a.checked_sub(b).ok_or_else(|| overflow("-")),
        BinOp::Mul => a.checked_mul(b).ok_or_else(|| overflow("*")),
        BinOp::Div => floor_div(a, b),
        BinOp::Mod => floor_mod(a, b),
        BinOp::Eq => truth(a == b),
        BinOp::NotEq => truth(a != b),
        BinOp::Less => truth(a < b),
        BinOp::Greater => truth(a > b),
        BinOp::LessEq => truth(a <= b),
        BinOp::GreaterEq => truth(a >= b),
        BinOp::And => truth(a != 0 && b != 0),
        BinOp::Or => truth(a != 0 || b != 0),
    }
}

/// Apply a unary operator.
pub fn apply_unary(op: UnaryOp, a: i64) -> EvalResult<i64> {
    match op {
        UnaryOp::Neg => a.checked_neg().ok_or_else(|| overflow("-")),
        UnaryOp::Not => Ok(i64::from(a == 0)),
    }
}

/// Quotient rounded toward negative infinity.
fn floor_div(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(EvalError::ArithmeticFailure("division by zero".into()));
    }
    let q = a.checked_div(b).ok_or_else(|| overflow("/"))?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Remainder with the sign of the divisor.
fn floor_mod(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(EvalError::ArithmeticFailure("modulo by zero".into()));
    }
    if b == -1 {
        return Ok(0);
    }
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_floors() {
        assert_eq!(apply_binary(BinOp::Div, 7, 2).unwrap(), 3);
        assert_eq!(apply_binary(BinOp::Div, -7, 2).unwrap(), -4);
        assert_eq!(apply_binary(BinOp::Div, 7, -2).unwrap(), -4);
        assert_eq!(apply_binary(BinOp::Div, -7, -2).unwrap(), 3);
        assert_eq!(apply_binary(BinOp::Div, -8, 2).unwrap(), -4);
    }

    #[test]
    fn modulo_takes_divisor_sign() {
        assert_eq!(apply_binary(BinOp::Mod, 7, 3).unwrap(), 1);
        assert_eq!(apply_binary(BinOp::Mod, -7, 3).unwrap(), 2);
        assert_eq!(apply_binary(BinOp::Mod, 7, -3).unwrap(), -2);
        assert_eq!(apply_binary(BinOp::Mod, -7, -3).unwrap(), -1);
        assert_eq!(apply_binary(BinOp::Mod, i64::MIN, -1).unwrap(), 0);
    }

    #[test]
    fn division_by_zero_fails() {
        assert!(matches!(
            apply_binary(BinOp::Div, 1, 0),
            Err(EvalError::ArithmeticFailure(_))
        ));
        assert!(matches!(
            apply_binary(BinOp::Mod, 1, 0),
            Err(EvalError::ArithmeticFailure(_))
        ));
    }

    #[test]
    fn overflow_fails() {
        assert!(apply_binary(BinOp::Add, i64::MAX, 1).is_err());
        assert!(apply_binary(BinOp::Div, i64::MIN, -1).is_err());
        assert!(apply_unary(UnaryOp::Neg, i64::MIN).is_err());
    }

    #[test]
    fn logical_ops_produce_bits() {
        assert_eq!(apply_binary(BinOp::And, 2, 3).unwrap(), 1);
        assert_eq!(apply_binary(BinOp::And, 2, 0).unwrap(), 0);
        assert_eq!(apply_binary(BinOp::Or, 0, -5).unwrap(), 1);
        assert_eq!(apply_binary(BinOp::Or, 0, 0).unwrap(), 0);
        assert_eq!(apply_unary(UnaryOp::Not, 10).unwrap(), 0);
        assert_eq!(apply_unary(UnaryOp::Not, 0).unwrap(), 1);
    }

    #[test]
    fn comparisons_produce_bits() {
        assert_eq!(apply_binary(BinOp::Less, 1, 2).unwrap(), 1);
        assert_eq!(apply_binary(BinOp::GreaterEq, 1, 2).unwrap(), 0);
        assert_eq!(apply_binary(BinOp::Eq, 4, 4).unwrap(), 1);
        assert_eq!(apply_binary(BinOp::NotEq, 4, 4).unwrap(), 0);
    }
}
