use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_addition},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of groups and calls, and tallest syntax tree, the parser
/// accepts.
///
/// Every tree handed out by the parser is at most this many nodes tall, so
/// walking, printing or dropping it never exhausts the stack.
pub const MAX_DEPTH: usize = 256;

/// Grammar switches for the parser.
///
/// The default is the conventional precedence table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// When set, the power level also consumes `/`, so `8/2**2` parses as
    /// `(8/2)**2`. This reproduces the grammar of older releases.
    pub division_at_power_level: bool,
}

impl ParserOptions {
    /// Options reproducing the legacy grammar.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::parser::core::ParserOptions;
    ///
    /// assert!(ParserOptions::legacy().division_at_power_level);
    /// assert!(!ParserOptions::default().division_at_power_level);
    /// ```
    #[must_use]
    pub const fn legacy() -> Self {
        Self { division_at_power_level: true }
    }
}

/// A parsed subtree and its height in nodes.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub expr:   Expr,
    pub height: usize,
}

impl Parsed {
    /// A node without children.
    pub const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    /// A node whose tallest child is `child` nodes high.
    ///
    /// # Errors
    /// `TooDeep` at `position` if the node would exceed [`MAX_DEPTH`].
    pub fn node(expr: Expr, child: usize, position: usize) -> ParseResult<Self> {
        let height = child + 1;
        if height > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH,
                                             position });
        }
        Ok(Self { expr, height })
    }
}

/// Parses a token sequence with the default grammar.
///
/// See [`parse_with`].
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use calc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let program = parse(&tokenize("1+2*3").unwrap()).unwrap();
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    parse_with(tokens, &ParserOptions::default())
}

/// Parses a token sequence into a [`Program`].
///
/// Expressions are parsed one after another until the tokens run out, and
/// each one becomes a statement. An empty token slice yields an empty
/// program. Parsing stops at the first error and the partial tree is dropped.
///
/// # Errors
/// Returns the first [`ParseError`] encountered, including `TooDeep` for a
/// statement nested or chained past [`MAX_DEPTH`].
pub fn parse_with(tokens: &[Token], options: &ParserOptions) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_expression(&mut iter, options, 0)?.expr);
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// Entry point of the precedence hierarchy, which starts at the lowest level,
/// addition. `nesting` counts the groups and calls enclosing the expression.
///
/// Grammar: `expression := addition`
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                                      options: &ParserOptions,
                                      nesting: usize)
                                      -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    parse_addition(tokens, options, nesting)
}

/// Parses an expression enclosed in one more group or call.
///
/// # Errors
/// `TooDeep` at `position` once [`MAX_DEPTH`] enclosing levels are reached.
pub(crate) fn parse_nested<'a, I>(tokens: &mut Peekable<I>,
                                  options: &ParserOptions,
                                  nesting: usize,
                                  position: usize)
                                  -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    if nesting >= MAX_DEPTH {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH,
                                         position });
    }
    parse_expression(tokens, options, nesting + 1)
}
