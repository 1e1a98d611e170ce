use thiserror::Error;

/// Lexing errors.
///
/// Raised when the source text contains a character that belongs to no token
/// class.
pub mod lex_error;
/// Parsing errors.
///
/// Defines everything that can go wrong while turning a token sequence into a
/// syntax tree: missing or misplaced tokens and input that ends too early.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the failures raised while walking a syntax tree, such as malformed
/// numeric literals or names missing from the registries.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of the lex, parse and evaluate pipeline.
///
/// Each variant wraps the error of one stage. The `#[from]` conversions let
/// [`crate::calculate`] chain the stages with `?`.
///
/// # Example
/// ```
/// use calc::error::{Error, EvalError};
///
/// let err: Error = EvalError::EmptyProgram.into();
/// assert!(matches!(err, Error::Eval(EvalError::EmptyProgram)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The lexer rejected the input.
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Evaluation of the syntax tree failed.
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}
