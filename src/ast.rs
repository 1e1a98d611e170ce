use crate::interpreter::lexer::Token;

/// The root of a parsed input line.
///
/// The parser emits one statement per top-level expression, in source order.
/// Only the first statement is evaluated; later ones are kept but ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level expressions in source order.
    pub statements: Vec<Expr>,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Nodes are built bottom-up by the parser and never modified afterwards. Each
/// node owns its children, so a tree is always finite and acyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation such as `1 + 2` or `2 ** 3`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// The operator token. Evaluation dispatches on its kind.
        operator: Token,
    },
    /// A prefix operation.
    ///
    /// The parser never builds this node; it exists so a prefix operator can
    /// be added without touching the evaluator's signature.
    Unary {
        /// The operand.
        right:    Box<Self>,
        /// The operator token.
        operator: Token,
    },
    /// A numeric literal, kept as raw text until evaluation.
    Number {
        /// The literal token.
        literal: Token,
    },
    /// A reference to a named constant such as `pi`.
    Identifier {
        /// The identifier token.
        name: Token,
    },
    /// A function call such as `sin(x)`.
    Func {
        /// Name of the function being called.
        name: String,
        /// Argument expressions in source order.
        args: Vec<Self>,
    },
}

impl Expr {
    /// Builds a binary node from its operands and operator token.
    ///
    /// ## Example
    /// ```
    /// use calc::{
    ///     ast::Expr,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let one = Expr::Number { literal: Token::new(TokenKind::Number, "1", 0) };
    /// let two = Expr::Number { literal: Token::new(TokenKind::Number, "2", 2) };
    /// let sum = Expr::binary(one, Token::new(TokenKind::Plus, "+", 1), two);
    ///
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       right: Box::new(right),
                       operator }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary { left, right, operator } => {
                write!(f, "({left} {} {right})", operator.text)
            },
            Self::Unary { right, operator } => write!(f, "({}{right})", operator.text),
            Self::Number { literal } => write!(f, "{}", literal.text),
            Self::Identifier { name } => write!(f, "{}", name.text),
            Self::Func { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
