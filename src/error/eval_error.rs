use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// A numeric literal could not be read as a base-10 float.
    #[error("Malformed number '{literal}'.")]
    MalformedNumber {
        /// The literal text as it appeared in the source.
        literal: String,
    },
    /// An identifier names no known constant.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the identifier.
        name: String,
    },
    /// Called a function that is not registered.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A function was called with an empty argument list.
    #[error("Function '{function}' expects an argument.")]
    MissingArgument {
        /// The name of the function.
        function: String,
    },
    /// An operator token has no meaning in the node that carries it.
    #[error("Unsupported operator {operator}.")]
    UnsupportedOperator {
        /// The kind of the operator token.
        operator: TokenKind,
    },
    /// The program holds no statement to evaluate.
    #[error("Nothing to evaluate.")]
    EmptyProgram,
}
