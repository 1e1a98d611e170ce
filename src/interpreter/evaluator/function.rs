use tracing::trace;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, eval},
        registry,
    },
};

/// Evaluates a function call.
///
/// The name is resolved first, so an unknown function is reported even when
/// its argument would also fail. Every builtin takes one argument: only the
/// first argument is evaluated, and any further ones are ignored without being
/// evaluated.
///
/// # Errors
/// - `UnknownFunction` if the name is not registered.
/// - `MissingArgument` for an empty argument list.
/// - Any error raised by the first argument.
///
/// # Example
/// ```
/// use calc::interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse};
///
/// let program = parse(&tokenize("sqrt(16, nope)").unwrap()).unwrap();
/// assert_eq!(evaluate(&program).unwrap(), 4.0);
/// ```
pub fn eval_function_call(name: &str, args: &[Expr]) -> EvalResult<f64> {
    let func = registry::function(name).ok_or_else(|| {
                                           EvalError::UnknownFunction { name: name.to_string() }
                                       })?;

    let first = args.first().ok_or_else(|| {
                                 EvalError::MissingArgument { function: name.to_string() }
                             })?;

    if args.len() > 1 {
        trace!(name, ignored = args.len() - 1, "extra arguments are not evaluated");
    }

    Ok(func(eval(first)?))
}
