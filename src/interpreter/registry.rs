use std::{collections::HashMap, sync::LazyLock};

/// Signature of a builtin function: one `f64` in, one `f64` out.
pub type BuiltinFn = fn(f64) -> f64;

/// Defines a registry by generating a static table and its lookup map.
///
/// Each entry maps a name to a value. The macro produces:
/// - a private static slice holding the entries in declaration order,
/// - a `LazyLock<HashMap>` built from that slice on first access.
macro_rules! registry {
    (
        $table:ident, $map:ident : $ty:ty {
            $( $name:literal => $value:expr ),* $(,)?
        }
    ) => {
        static $table: &[(&str, $ty)] = &[
            $( ($name, $value), )*
        ];
        static $map: LazyLock<HashMap<&'static str, $ty>> =
            LazyLock::new(|| $table.iter().copied().collect());
    };
}

registry! {
    CONSTANT_TABLE, CONSTANTS: f64 {
        "pi"  => std::f64::consts::PI,
        "e"   => std::f64::consts::E,
        "tau" => std::f64::consts::TAU,
    }
}

registry! {
    FUNCTION_TABLE, FUNCTIONS: BuiltinFn {
        "sin"     => f64::sin,
        "cos"     => f64::cos,
        "tan"     => f64::tan,
        "asin"    => f64::asin,
        "acos"    => f64::acos,
        "atan"    => f64::atan,
        "sinh"    => f64::sinh,
        "cosh"    => f64::cosh,
        "tanh"    => f64::tanh,
        "sqrt"    => f64::sqrt,
        "cbrt"    => f64::cbrt,
        "log"     => f64::ln,
        "ln"      => f64::ln,
        "log10"   => f64::log10,
        "log2"    => f64::log2,
        "exp"     => f64::exp,
        "abs"     => f64::abs,
        "ceil"    => f64::ceil,
        "floor"   => f64::floor,
        "round"   => f64::round,
        "trunc"   => f64::trunc,
        "radians" => f64::to_radians,
        "degrees" => f64::to_degrees,
    }
}

/// Looks up a named constant.
///
/// Names are matched exactly and case-sensitively.
///
/// # Example
/// ```
/// use calc::interpreter::registry::constant;
///
/// assert_eq!(constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(constant("PI"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

/// Looks up a named single-argument function.
///
/// # Example
/// ```
/// use calc::interpreter::registry::function;
///
/// let sqrt = function("sqrt").unwrap();
/// assert_eq!(sqrt(9.0), 3.0);
/// assert!(function("nope").is_none());
/// ```
#[must_use]
pub fn function(name: &str) -> Option<BuiltinFn> {
    FUNCTIONS.get(name).copied()
}

/// Names of all constants, sorted.
#[must_use]
pub fn constant_names() -> Vec<&'static str> {
    sorted_names(CONSTANT_TABLE)
}

/// Names of all functions, sorted.
#[must_use]
pub fn function_names() -> Vec<&'static str> {
    sorted_names(FUNCTION_TABLE)
}

fn sorted_names<T>(table: &[(&'static str, T)]) -> Vec<&'static str> {
    let mut names: Vec<_> = table.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}
