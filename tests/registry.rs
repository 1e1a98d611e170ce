use std::thread;

use calc::{
    calculate,
    interpreter::registry::{constant, constant_names, function, function_names},
};

#[test]
fn required_constants_are_present() {
    assert_eq!(constant("pi"), Some(std::f64::consts::PI));
    assert_eq!(constant("e"), Some(std::f64::consts::E));
    assert_eq!(constant("tau"), Some(std::f64::consts::TAU));
}

#[test]
fn required_functions_are_present() {
    for name in ["sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "log", "exp", "abs",
                 "ceil", "floor", "round", "trunc"]
    {
        assert!(function(name).is_some(), "missing function {name}");
    }
}

#[test]
fn lookups_are_exact_and_case_sensitive() {
    assert!(constant("PI").is_none());
    assert!(constant("p").is_none());
    assert!(function("Sin").is_none());
    assert!(function("sine").is_none());
    assert!(function("").is_none());
}

#[test]
fn functions_behave_like_their_math_counterparts() {
    let apply = |name: &str, x: f64| function(name).unwrap()(x);

    assert!((apply("log", std::f64::consts::E) - 1.0).abs() < 1e-15);
    assert_eq!(apply("round", 2.5), 3.0);
    assert_eq!(apply("round", -2.5), -3.0);
    assert_eq!(apply("trunc", -1.7), -1.0);
    assert_eq!(apply("floor", -1.2), -2.0);
    assert_eq!(apply("ceil", -1.2), -1.0);
    assert_eq!(apply("abs", -4.0), 4.0);
    assert!(apply("sqrt", -1.0).is_nan());
}

#[test]
fn names_are_sorted() {
    let constants = constant_names();
    assert_eq!(constants, ["e", "pi", "tau"]);

    let functions = function_names();
    assert!(functions.windows(2).all(|w| w[0] < w[1]));
    assert!(functions.contains(&"sqrt"));
}

#[test]
fn registries_are_shared_between_threads() {
    let handles: Vec<_> = (0..8u32).map(|i| {
                                       thread::spawn(move || {
                                           calculate(&format!("sqrt({i} * {i}) * (pi / pi)")).unwrap()
                                       })
                                   })
                                   .collect();

    for (i, handle) in (0..8u32).zip(handles) {
        assert_eq!(handle.join().unwrap(), f64::from(i));
    }
}
