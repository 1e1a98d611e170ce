use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::EvalError,
    interpreter::{
        evaluator::{binary::eval_binary_op, function::eval_function_call, unary::eval_unary_op},
        lexer::Token,
        registry,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a program to a single number.
///
/// Only the first statement is evaluated. Later statements were parsed and
/// are kept in the tree, but they never run and cannot fail.
///
/// # Errors
/// - `EmptyProgram` if there is no statement, which is what empty input
///   parses to.
/// - Any error raised while evaluating the first statement.
///
/// # Example
/// ```
/// use calc::interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse};
///
/// let program = parse(&tokenize("(1+2)*3").unwrap()).unwrap();
/// assert_eq!(evaluate(&program).unwrap(), 9.0);
/// ```
pub fn evaluate(program: &Program) -> EvalResult<f64> {
    let (first, rest) = program.statements
                               .split_first()
                               .ok_or(EvalError::EmptyProgram)?;

    if !rest.is_empty() {
        debug!(ignored = rest.len(), "only the first statement is evaluated");
    }

    let value = eval(first)?;
    debug!(value, "evaluated program");
    Ok(value)
}

/// Evaluates an expression and returns the resulting value.
///
/// The evaluator dispatches on the expression variant. Evaluation has no side
/// effects, so the same tree always produces the same result.
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Binary { left, right, operator } => eval_binary_op(left, operator, right),
        Expr::Unary { right, operator } => eval_unary_op(operator, right),
        Expr::Number { literal } => eval_number(literal),
        Expr::Identifier { name } => eval_identifier(name),
        Expr::Func { name, args } => eval_function_call(name, args),
    }
}

/// Reads a numeric literal as a base-10 float.
///
/// The lexer accepts any run of digits and dots, so this is where a literal
/// like `1.2.3` is finally rejected. A literal too large for an `f64` is
/// rejected too instead of becoming infinity.
///
/// # Errors
/// `MalformedNumber` carrying the literal text.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     evaluator::core::eval_number,
///     lexer::{Token, TokenKind},
/// };
///
/// assert_eq!(eval_number(&Token::new(TokenKind::Number, "2.5", 0)).unwrap(), 2.5);
/// assert!(eval_number(&Token::new(TokenKind::Number, "1.2.3", 0)).is_err());
/// assert!(eval_number(&Token::new(TokenKind::Number, &"9".repeat(400), 0)).is_err());
/// ```
pub fn eval_number(literal: &Token) -> EvalResult<f64> {
    literal.text
           .parse::<f64>()
           .ok()
           .filter(|value| value.is_finite())
           .ok_or_else(|| EvalError::MalformedNumber { literal: literal.text.clone() })
}

/// Resolves an identifier against the constants registry.
///
/// # Errors
/// `UndefinedVariable` if no constant has this name.
pub fn eval_identifier(name: &Token) -> EvalResult<f64> {
    registry::constant(&name.text).ok_or_else(|| {
                                      EvalError::UndefinedVariable { name: name.text.clone() }
                                  })
}
