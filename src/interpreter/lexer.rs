use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// The closed set of token classes produced by the lexer.
///
/// The lexer is derived with `logos`: every variant that carries a `#[token]`
/// or `#[regex]` attribute is recognized in the source text. `Equal` and
/// `EndOfInput` carry none. `Equal` is reserved vocabulary and `EndOfInput` is
/// only used to name a missing token in parse errors.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \n]+")]
pub enum TokenKind {
    /// Numeric literal: a digit followed by any run of digits and dots, such as
    /// `42`, `3.14` or the malformed `1.2.3`.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `**`
    #[token("**")]
    Power,
    /// `=`, never produced by the lexer.
    Equal,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Constant or function names such as `pi` or `sqrt`.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// `,`
    #[token(",")]
    Comma,
    /// Marks the point where the input ran out.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Power => "Power",
            Self::Equal => "Equal",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::Identifier => "Identifier",
            Self::Comma => "Comma",
            Self::EndOfInput => "EndOfInput",
        };
        write!(f, "{name}")
    }
}

/// A classified lexical unit.
///
/// `text` keeps the exact source slice. Numeric literals are converted to
/// `f64` only when evaluated, so a malformed literal survives lexing and
/// parsing untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token class.
    pub kind:     TokenKind,
    /// The source text of the token.
    pub text:     String,
    /// Byte offset of the first character of the token in the input.
    pub position: usize,
}

impl Token {
    /// Creates a token from its parts.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Number, "42", 0);
    /// assert_eq!(token.text, "42");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Spaces and newlines are skipped. `**` is a single [`TokenKind::Power`]
/// token. Runs of digits and dots become one [`TokenKind::Number`] without
/// checking how many dots appear, and runs of ASCII letters become one
/// [`TokenKind::Identifier`].
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first character that
/// matches none of the token classes.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("2**3").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Power, TokenKind::Number]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        let Ok(kind) = kind else {
            // Unmatched input: report the first offending character.
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character,
                                                       position });
        };
        trace!(%kind, text = lexer.slice(), position, "token");
        tokens.push(Token::new(kind, lexer.slice(), position));
    }

    Ok(tokens)
}
