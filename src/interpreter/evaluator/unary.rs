use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, eval},
        lexer::{Token, TokenKind},
    },
};

/// Evaluates a unary node.
///
/// `-` negates its operand and `+` returns it unchanged.
///
/// # Errors
/// Propagates the operand's error. Any other operator is
/// `UnsupportedOperator`.
///
/// # Example
/// ```
/// use calc::{
///     ast::Expr,
///     interpreter::{
///         evaluator::unary::eval_unary_op,
///         lexer::{Token, TokenKind},
///     },
/// };
///
/// let five = Expr::Number { literal: Token::new(TokenKind::Number, "5", 1) };
/// let minus = Token::new(TokenKind::Minus, "-", 0);
///
/// assert_eq!(eval_unary_op(&minus, &five).unwrap(), -5.0);
/// ```
pub fn eval_unary_op(operator: &Token, right: &Expr) -> EvalResult<f64> {
    let value = eval(right)?;
    match operator.kind {
        TokenKind::Minus => Ok(-value),
        TokenKind::Plus => Ok(value),
        operator => Err(EvalError::UnsupportedOperator { operator }),
    }
}
