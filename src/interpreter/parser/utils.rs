use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, ParserOptions, parse_nested},
    },
};

/// Consumes the next token, which must be of kind `wanted`.
///
/// # Errors
/// `ExpectedToken` with the found kind and position, or with `EndOfInput` and
/// no position when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    wanted: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == wanted => Ok(token),
        Some(token) => Err(ParseError::ExpectedToken { wanted,
                                                       got: token.kind,
                                                       position: Some(token.position) }),
        None => Err(ParseError::ExpectedToken { wanted,
                                                got: TokenKind::EndOfInput,
                                                position: None }),
    }
}

/// Parses the argument list of a function call, up to and including `)`.
///
/// The opening `(` has already been consumed. Arguments are parsed until `)`
/// or the end of input. A `,` after an argument is consumed if present, but
/// its placement is not checked:
///
/// - `f()` has no arguments,
/// - `f(1,)` has one argument,
/// - `f(1 2)` has two arguments,
/// - `f(1,,2)` fails at the second comma, which cannot start an expression.
///
/// Grammar (simplified): `arguments := (expression ","?)* ")"`
///
/// Returns the arguments and the height of the tallest one, zero for an empty
/// list.
///
/// # Errors
/// Propagates argument parse errors, and returns `ExpectedToken` naming
/// `RightParen` when the list is not closed.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             options: &ParserOptions,
                                                             nesting: usize)
                                                             -> ParseResult<(Vec<Expr>, usize)>
    where I: Iterator<Item = &'a Token>
{
    let mut args = Vec::new();
    let mut tallest = 0;

    while let Some(start) = tokens.peek()
                                  .copied()
                                  .filter(|token| token.kind != TokenKind::RightParen)
    {
        let arg = parse_nested(tokens, options, nesting, start.position)?;
        tallest = tallest.max(arg.height);
        args.push(arg.expr);
        tokens.next_if(|token| token.kind == TokenKind::Comma);
    }

    expect(tokens, TokenKind::RightParen)?;
    Ok((args, tallest))
}
