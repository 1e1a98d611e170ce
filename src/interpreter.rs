/// The evaluator module walks syntax trees and computes results.
///
/// The evaluator traverses the AST, resolving identifiers and function names
/// against the registries and applying arithmetic operators, until the first
/// statement of a program is reduced to a single `f64`.
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Reports malformed literals and unknown names as `EvalError`s.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// carrying its kind, its exact text and its byte offset. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Recognizes numbers, identifiers, operators, parentheses and commas.
/// - Skips spaces and newlines.
/// - Reports any other character as a `LexError`.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. Each
/// level loops to build left-associative chains.
///
/// # Responsibilities
/// - Converts tokens into a [`crate::ast::Program`].
/// - Tells constants from function calls by looking one token ahead.
/// - Reports the first syntax error with the offending token and position.
pub mod parser;
/// Named constants and functions available to expressions.
///
/// Both tables are built once, on first access, and are read-only afterwards,
/// so they can be shared between threads without locking.
pub mod registry;
