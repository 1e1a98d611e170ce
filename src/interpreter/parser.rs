/// Entry points and shared parser definitions.
///
/// Holds the [`core::ParserOptions`] configuration, the result alias and the
/// top-level `parse` functions that turn a token slice into a
/// [`crate::ast::Program`].
pub mod core;

/// Binary operator parsing.
///
/// Implements the addition, multiplication and power precedence levels. Each
/// level loops and accumulates a left-deep chain of binary nodes.
pub mod binary;

/// Primary expression parsing.
///
/// Numbers, identifiers, function calls and parenthesized groups.
pub mod primary;

/// Small helpers shared by the parsing functions.
pub mod utils;
