use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parsed, ParserOptions},
            primary::parse_primary,
        },
    },
};

/// The binary precedence levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// `+` and `-`
    Addition,
    /// `*` and `/`
    Multiplication,
    /// `**`, plus `/` under the legacy grammar.
    Power,
}

/// Maps a token kind to the precedence level that consumes it.
///
/// Under [`ParserOptions::division_at_power_level`] the power level claims
/// `/`. Since every multiplication operand is a power-level expression, a `/`
/// never reaches the multiplication loop in that mode.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     lexer::TokenKind,
///     parser::{
///         binary::{Precedence, precedence},
///         core::ParserOptions,
///     },
/// };
///
/// assert_eq!(precedence(TokenKind::Divide, &ParserOptions::default()),
///            Some(Precedence::Multiplication));
/// assert_eq!(precedence(TokenKind::Divide, &ParserOptions::legacy()),
///            Some(Precedence::Power));
/// assert_eq!(precedence(TokenKind::Comma, &ParserOptions::default()), None);
/// ```
#[must_use]
pub const fn precedence(kind: TokenKind, options: &ParserOptions) -> Option<Precedence> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some(Precedence::Addition),
        TokenKind::Divide if options.division_at_power_level => Some(Precedence::Power),
        TokenKind::Multiply | TokenKind::Divide => Some(Precedence::Multiplication),
        TokenKind::Power => Some(Precedence::Power),
        _ => None,
    }
}

/// Consumes the next token if it is an operator of the given level.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        level: Precedence,
                        options: &ParserOptions)
                        -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| precedence(token.kind, options) == Some(level))
}

/// Joins two operands under a binary operator.
///
/// # Errors
/// `TooDeep` at the operator when the chain grows past the height limit.
fn join(left: Parsed, operator: &Token, right: Parsed) -> ParseResult<Parsed> {
    let child = left.height.max(right.height);
    Parsed::node(Expr::binary(left.expr, operator.clone(), right.expr),
                 child,
                 operator.position)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `addition := multiplication (("+" | "-") multiplication)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `options`: Grammar switches.
/// - `nesting`: Groups and calls enclosing the expression.
///
/// # Returns
/// A left-deep `Expr::Binary` chain with its height.
pub(crate) fn parse_addition<'a, I>(tokens: &mut Peekable<I>,
                                    options: &ParserOptions,
                                    nesting: usize)
                                    -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplication(tokens, options, nesting)?;
    while let Some(operator) = next_operator(tokens, Precedence::Addition, options) {
        let right = parse_multiplication(tokens, options, nesting)?;
        left = join(left, operator, right)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplication := power (("*" | "/") power)*`
pub(crate) fn parse_multiplication<'a, I>(tokens: &mut Peekable<I>,
                                          options: &ParserOptions,
                                          nesting: usize)
                                          -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_power(tokens, options, nesting)?;
    while let Some(operator) = next_operator(tokens, Precedence::Multiplication, options) {
        let right = parse_power(tokens, options, nesting)?;
        left = join(left, operator, right)?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is left-associative like every other level:
/// `a ** b ** c` parses as `(a ** b) ** c`.
///
/// The rule is: `power := primary ("**" primary)*`, with `"/"` accepted next
/// to `"**"` under the legacy grammar.
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>,
                                 options: &ParserOptions,
                                 nesting: usize)
                                 -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_primary(tokens, options, nesting)?;
    while let Some(operator) = next_operator(tokens, Precedence::Power, options) {
        let right = parse_primary(tokens, options, nesting)?;
        left = join(left, operator, right)?;
    }
    Ok(left)
}
