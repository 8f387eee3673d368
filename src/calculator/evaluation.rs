//! Evaluation of a single "operand operator operand" expression.
//!
//! The buffer is split on single spaces and must yield exactly three tokens.
//! Every way this can fail is reported through [`EvalError`], which the screen
//! collapses into one spoken "error".

use super::operator::Operator;
use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("expected 3 tokens, found {0}")]
    WrongTokenCount(usize),
    #[error("operand {0:?} is not a number")]
    InvalidOperand(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}

/// Evaluate an expression of the form `"<lhs> <op> <rhs>"`.
pub fn evaluate_expression(input: &str) -> Result<f64, EvalError> {
    let parts: Vec<&str> = input.split(' ').collect();
    let [lhs, op, rhs] = parts[..] else {
        return Err(EvalError::WrongTokenCount(parts.len()));
    };

    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let op =
        Operator::from_symbol(op).ok_or_else(|| EvalError::UnknownOperator(op.to_string()))?;

    op.apply(lhs, rhs).ok_or(EvalError::DivisionByZero)
}

fn parse_operand(token: &str) -> Result<f64, EvalError> {
    token
        .parse::<f64>()
        .map_err(|_| EvalError::InvalidOperand(token.to_string()))
}

/// Render a result the way it is written back into the buffer and spoken.
///
/// Uses the shortest round-trip form, which always keeps a fractional part
/// (`7.0`, `0.1`, `1e20`).
pub fn format_result(value: f64) -> String {
    format!("{value:?}")
}
