use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// A specific token was required but another one, or nothing, was found.
    #[error("Expected {wanted} but got {got}{}.", at(.position))]
    ExpectedToken {
        /// The token kind the grammar requires here.
        wanted:   TokenKind,
        /// The token kind actually found, `EndOfInput` if the input ran out.
        got:      TokenKind,
        /// Byte offset of the found token, `None` at end of input.
        position: Option<usize>,
    },
    /// A token that cannot start or continue an expression here.
    #[error("Unexpected token {got} at position {position}.")]
    UnexpectedToken {
        /// The token kind encountered.
        got:      TokenKind,
        /// Byte offset of the token.
        position: usize,
    },
    /// The input ended where an expression was expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// The expression nests groups or calls, or chains operators, past the
    /// depth the parser accepts.
    #[error("Expression deeper than {limit} levels at position {position}.")]
    TooDeep {
        /// The deepest nesting or tree height accepted.
        limit:    usize,
        /// Byte offset of the token that went one level too deep.
        position: usize,
    },
}

/// Renders where an `ExpectedToken` error happened.
#[allow(clippy::ref_option)]
fn at(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" at position {p}"),
        None => " at end of input".to_string(),
    }
}
