use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parsed, ParserOptions, parse_nested},
            utils::{expect, parse_arguments},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Dispatches on the leading token:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | IDENTIFIER "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Errors
/// - `UnexpectedEndOfInput` if there is no token left.
/// - `UnexpectedToken` if the token cannot start an expression.
/// - `TooDeep` if a group or call nests past the depth limit.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   options: &ParserOptions,
                                   nesting: usize)
                                   -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek()
                      .copied()
                      .ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            Ok(Parsed::leaf(Expr::Number { literal: token.clone() }))
        },
        TokenKind::Identifier => parse_identifier_or_function(tokens, options, nesting),
        TokenKind::LeftParen => parse_grouping(tokens, options, nesting),
        got => Err(ParseError::UnexpectedToken { got,
                                                 position: token.position }),
    }
}

/// Parses a parenthesized expression.
///
/// The group itself leaves no node behind; the inner expression is returned.
///
/// # Errors
/// `ExpectedToken` naming `RightParen` when the group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         options: &ParserOptions,
                         nesting: usize)
                         -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, TokenKind::LeftParen)?;
    let inner = parse_nested(tokens, options, nesting, open.position)?;
    expect(tokens, TokenKind::RightParen)?;
    Ok(inner)
}

/// Parses an identifier, or a function call when the identifier is directly
/// followed by `(`.
///
/// The lexer does not tell constants and functions apart; one token of
/// lookahead past the name decides here.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       options: &ParserOptions,
                                       nesting: usize)
                                       -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token>
{
    let name = expect(tokens, TokenKind::Identifier)?;

    if tokens.next_if(|token| token.kind == TokenKind::LeftParen)
             .is_some()
    {
        let (args, child) = parse_arguments(tokens, options, nesting)?;
        return Parsed::node(Expr::Func { name: name.text.clone(),
                                         args },
                            child,
                            name.position);
    }

    Ok(Parsed::leaf(Expr::Identifier { name: name.clone() }))
}
