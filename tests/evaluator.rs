use calc::{
    ast::{Expr, Program},
    error::EvalError,
    interpreter::{
        evaluator::core::{eval, evaluate},
        lexer::{Token, TokenKind},
    },
};

fn number(text: &str) -> Expr {
    Expr::Number { literal: Token::new(TokenKind::Number, text, 0) }
}

fn identifier(name: &str) -> Expr {
    Expr::Identifier { name: Token::new(TokenKind::Identifier, name, 0) }
}

fn operator(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, 0)
}

fn unary(kind: TokenKind, text: &str, right: Expr) -> Expr {
    Expr::Unary { right:    Box::new(right),
                  operator: operator(kind, text), }
}

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Func { name: name.to_string(),
                 args }
}

#[test]
fn numbers_are_parsed_at_evaluation_time() {
    assert_eq!(eval(&number("42")).unwrap(), 42.0);
    assert_eq!(eval(&number("0.125")).unwrap(), 0.125);
    assert_eq!(eval(&number("7.")).unwrap(), 7.0);
    assert_eq!(eval(&number("1.2.3")).unwrap_err(),
               EvalError::MalformedNumber { literal: "1.2.3".to_string() });
}

#[test]
fn literals_beyond_f64_range_are_malformed() {
    let huge = format!("1{}", "0".repeat(400));
    assert_eq!(eval(&number(&huge)).unwrap_err(),
               EvalError::MalformedNumber { literal: huge });
    assert_eq!(eval(&number(&format!("1{}", "0".repeat(300)))).unwrap(), 1e300);
    assert_eq!(eval(&number(&format!("0.{}1", "0".repeat(400)))).unwrap(), 0.0);
}

#[test]
fn binary_dispatches_on_operator_kind() {
    let apply = |kind, text| {
        eval(&Expr::binary(number("6"), operator(kind, text), number("3"))).unwrap()
    };

    assert_eq!(apply(TokenKind::Plus, "+"), 9.0);
    assert_eq!(apply(TokenKind::Minus, "-"), 3.0);
    assert_eq!(apply(TokenKind::Multiply, "*"), 18.0);
    assert_eq!(apply(TokenKind::Divide, "/"), 2.0);
    assert_eq!(apply(TokenKind::Power, "**"), 216.0);
}

#[test]
fn binary_with_non_arithmetic_operator_is_unsupported() {
    let expr = Expr::binary(number("1"), operator(TokenKind::Equal, "="), number("1"));
    assert_eq!(eval(&expr).unwrap_err(),
               EvalError::UnsupportedOperator { operator: TokenKind::Equal });
}

#[test]
fn left_error_wins_over_right_error() {
    let expr = Expr::binary(identifier("left"), operator(TokenKind::Plus, "+"), number("1..2"));
    assert_eq!(eval(&expr).unwrap_err(),
               EvalError::UndefinedVariable { name: "left".to_string() });

    let expr = Expr::binary(number("1"), operator(TokenKind::Plus, "+"), identifier("right"));
    assert_eq!(eval(&expr).unwrap_err(),
               EvalError::UndefinedVariable { name: "right".to_string() });
}

#[test]
fn operand_errors_win_over_operator_errors() {
    let expr = Expr::binary(identifier("nope"), operator(TokenKind::Comma, ","), number("1"));
    assert_eq!(eval(&expr).unwrap_err(),
               EvalError::UndefinedVariable { name: "nope".to_string() });
}

#[test]
fn unary_nodes_are_still_evaluated() {
    assert_eq!(eval(&unary(TokenKind::Minus, "-", number("5"))).unwrap(), -5.0);
    assert_eq!(eval(&unary(TokenKind::Plus, "+", number("5"))).unwrap(), 5.0);
    assert_eq!(eval(&unary(TokenKind::Minus, "-", unary(TokenKind::Minus, "-", identifier("pi")))).unwrap(),
               std::f64::consts::PI);
    assert_eq!(eval(&unary(TokenKind::Divide, "/", number("5"))).unwrap_err(),
               EvalError::UnsupportedOperator { operator: TokenKind::Divide });
    assert_eq!(eval(&unary(TokenKind::Minus, "-", identifier("x"))).unwrap_err(),
               EvalError::UndefinedVariable { name: "x".to_string() });
}

#[test]
fn identifiers_resolve_to_constants() {
    assert_eq!(eval(&identifier("e")).unwrap(), std::f64::consts::E);
    assert_eq!(eval(&identifier("Pi")).unwrap_err(),
               EvalError::UndefinedVariable { name: "Pi".to_string() });
}

#[test]
fn calls_apply_the_function_to_the_first_argument() {
    assert_eq!(eval(&call("sqrt", vec![number("81")])).unwrap(), 9.0);
    assert_eq!(eval(&call("abs", vec![number("2"), identifier("unused")])).unwrap(), 2.0);
}

#[test]
fn call_errors() {
    assert_eq!(eval(&call("nope", vec![number("1")])).unwrap_err(),
               EvalError::UnknownFunction { name: "nope".to_string() });
    assert_eq!(eval(&call("nope", vec![identifier("bad")])).unwrap_err(),
               EvalError::UnknownFunction { name: "nope".to_string() });
    assert_eq!(eval(&call("sin", vec![])).unwrap_err(),
               EvalError::MissingArgument { function: "sin".to_string() });
    assert_eq!(eval(&call("sin", vec![identifier("bad")])).unwrap_err(),
               EvalError::UndefinedVariable { name: "bad".to_string() });
}

#[test]
fn only_the_first_statement_is_evaluated() {
    let program = Program { statements: vec![number("1"), identifier("never")] };
    assert_eq!(evaluate(&program).unwrap(), 1.0);
}

#[test]
fn empty_program_is_an_error() {
    assert_eq!(evaluate(&Program::default()).unwrap_err(), EvalError::EmptyProgram);
}

#[test]
fn eval_error_messages() {
    assert_eq!(EvalError::UndefinedVariable { name: "foo".to_string() }.to_string(),
               "Undefined variable 'foo'.");
    assert_eq!(EvalError::MalformedNumber { literal: "1.2.3".to_string() }.to_string(),
               "Malformed number '1.2.3'.");
    assert_eq!(EvalError::EmptyProgram.to_string(), "Nothing to evaluate.");
}
