/// Core evaluation logic.
///
/// Contains the program entry point, the dispatch over expression variants and
/// the evaluation of literals and identifiers.
pub mod core;

/// Binary operator evaluation.
///
/// Evaluates both operands and applies the arithmetic operator named by the
/// operator token.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles prefix operators on hand-built trees; the parser never emits them.
pub mod unary;

/// Function call evaluation.
///
/// Resolves the function in the registry and applies it to the first argument.
pub mod function;
