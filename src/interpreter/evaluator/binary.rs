use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, eval},
        lexer::{Token, TokenKind},
    },
};

/// Evaluates a binary node.
///
/// Both operands are always evaluated, even when the left one has already
/// failed. If both fail, the left error is reported.
///
/// # Errors
/// The left operand's error, then the right operand's error, then any error
/// from [`apply_binary`].
pub fn eval_binary_op(left: &Expr, operator: &Token, right: &Expr) -> EvalResult<f64> {
    let lval = eval(left);
    let rval = eval(right);

    apply_binary(operator.kind, lval?, rval?)
}

/// Applies a binary operator to two numbers.
///
/// Dispatch depends only on the operator kind, not on the precedence level
/// that produced the node, so a `/` is division wherever it was parsed.
/// Arithmetic follows IEEE 754: dividing by zero yields an infinity or NaN
/// rather than an error.
///
/// # Errors
/// `UnsupportedOperator` for a token kind that is not `+ - * / **`.
///
/// # Example
/// ```
/// use calc::interpreter::{evaluator::binary::apply_binary, lexer::TokenKind};
///
/// assert_eq!(apply_binary(TokenKind::Power, 2.0, 10.0).unwrap(), 1024.0);
/// assert_eq!(apply_binary(TokenKind::Divide, 1.0, 0.0).unwrap(), f64::INFINITY);
/// assert!(apply_binary(TokenKind::Comma, 1.0, 2.0).is_err());
/// ```
pub fn apply_binary(operator: TokenKind, left: f64, right: f64) -> EvalResult<f64> {
    match operator {
        TokenKind::Plus => Ok(left + right),
        TokenKind::Minus => Ok(left - right),
        TokenKind::Multiply => Ok(left * right),
        TokenKind::Divide => Ok(left / right),
        TokenKind::Power => Ok(left.powf(right)),
        operator => Err(EvalError::UnsupportedOperator { operator }),
    }
}
