//! # calc
//!
//! calc is an arithmetic expression interpreter written in Rust.
//! It tokenizes, parses and evaluates expressions such as `2*(3+sin(0))` to a
//! single floating-point result, resolving names like `pi` and `sqrt` against
//! built-in registries.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        lexer::tokenize,
        parser::core::{ParserOptions, parse_with},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program` root and the `Expr` enum that represent
/// the syntactic structure of an input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per expression form.
/// - Keeps the source tokens in nodes for evaluation and error reporting.
/// - Renders trees in a fully parenthesized form.
pub mod ast;
/// Provides error types for every stage of the pipeline.
///
/// This module defines one closed error enum per stage (lexing, parsing and
/// evaluation) and a crate-level [`error::Error`] wrapping all three.
pub mod error;
/// Orchestrates the pipeline.
///
/// Ties together the lexer, the parser, the registries and the evaluator.
pub mod interpreter;

/// Evaluates source text with the default grammar.
///
/// See [`calculate_with`].
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use calc::calculate;
///
/// assert_eq!(calculate("1+2*3").unwrap(), 7.0);
/// assert!(calculate("foo").is_err());
/// ```
pub fn calculate(source: &str) -> Result<f64, Error> {
    calculate_with(source, &ParserOptions::default())
}

/// Tokenizes, parses and evaluates source text.
///
/// Each stage either fully succeeds or fails; no partial result is returned
/// alongside an error.
///
/// # Errors
/// Returns the error of the first stage that fails, wrapped in [`Error`].
///
/// # Examples
/// ```
/// use calc::{calculate_with, interpreter::parser::core::ParserOptions};
///
/// assert_eq!(calculate_with("8/2**2", &ParserOptions::default()).unwrap(), 2.0);
/// assert_eq!(calculate_with("8/2**2", &ParserOptions::legacy()).unwrap(), 16.0);
/// ```
pub fn calculate_with(source: &str, options: &ParserOptions) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let program = parse_with(&tokens, options)?;
    Ok(evaluate(&program)?)
}
