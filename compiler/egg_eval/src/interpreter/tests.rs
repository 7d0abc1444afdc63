//! Interpreter tests.
//!
//! The core ships no runtime, so these tests build a small one: a handful of
//! special forms (`if`, `do`, `define`, `set`, `while`, `fun`) and arithmetic
//! functions, registered the way an embedding would register them.

use std::cell::RefCell;
use std::rc::Rc;

use egg_ir::Expr;
use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{check_arg_count, type_mismatch, wrong_arg_count, EvalErrorKind};
use crate::{EvalError, FunctionValue, InterpreterBuilder, SpecialForms};

fn truthy(value: &Value) -> Result<bool, EvalError> {
    Ok(value.as_number()? != 0.0)
}

fn flag(b: bool) -> Value {
    Value::Number(if b { 1.0 } else { 0.0 })
}

fn word_arg<'a>(form: &str, arg: &'a Expr) -> Result<&'a str, EvalError> {
    arg.as_word()
        .ok_or_else(|| type_mismatch(&format!("word as first argument to {form}"), arg.kind_name()))
}

fn test_forms() -> SpecialForms {
    let mut forms = SpecialForms::new();

    forms.register("if", |interp, args, scope| {
        check_arg_count("if", args, 3)?;
        if truthy(&interp.evaluate(&args[0], scope)?)? {
            interp.evaluate(&args[1], scope)
        } else {
            interp.evaluate(&args[2], scope)
        }
    });

    forms.register("do", |interp, args, scope| {
        let mut last = Value::Number(0.0);
        for arg in args {
            last = interp.evaluate(arg, scope)?;
        }
        Ok(last)
    });

    forms.register("define", |interp, args, scope| {
        check_arg_count("define", args, 2)?;
        let name = word_arg("define", &args[0])?;
        let value = interp.evaluate(&args[1], scope)?;
        scope.borrow_mut().define(name, value.clone());
        Ok(value)
    });

    forms.register("set", |interp, args, scope| {
        check_arg_count("set", args, 2)?;
        let name = word_arg("set", &args[0])?;
        let value = interp.evaluate(&args[1], scope)?;
        scope
            .borrow_mut()
            .assign(name, value.clone())
            .map_err(|_| EvalError::new(format!("cannot set undefined binding {name}")))?;
        Ok(value)
    });

    forms.register("while", |interp, args, scope| {
        check_arg_count("while", args, 2)?;
        while truthy(&interp.evaluate(&args[0], scope)?)? {
            interp.evaluate(&args[1], scope)?;
        }
        Ok(Value::Number(0.0))
    });

    forms.register("fun", |_, args, scope| {
        let Some((body, params)) = args.split_last() else {
            return Err(EvalError::new("fun needs a body"));
        };
        let params = params
            .iter()
            .map(|p| word_arg("fun", p).map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;
        let body = body.clone();
        let closure = scope.clone();
        Ok(Value::Function(FunctionValue::new(
            "fun",
            move |interp, values| {
                check_arg_count("fun", values, params.len())?;
                let mut local = Scope::with_parent(closure.clone());
                for (param, value) in params.iter().zip(values) {
                    local.define(param.as_str(), value.clone());
                }
                interp.evaluate(&body, &local.into_local())
            },
        )))
    });

    forms
}

fn binary(name: &'static str, op: fn(f64, f64) -> Value) -> (&'static str, Value) {
    let func = FunctionValue::new(name, move |_, args| {
        check_arg_count(name, args, 2)?;
        Ok(op(args[0].as_number()?, args[1].as_number()?))
    });
    (name, Value::Function(func))
}

fn test_scope() -> LocalScope<Scope> {
    Scope::from_iter([
        binary("+", |a, b| Value::Number(a + b)),
        binary("-", |a, b| Value::Number(a - b)),
        binary("*", |a, b| Value::Number(a * b)),
        binary("<", |a, b| flag(a < b)),
        binary("==", |a, b| flag((a - b).abs() < f64::EPSILON)),
    ])
    .into_local()
}

fn test_interpreter() -> Interpreter {
    Interpreter::builder().special_forms(test_forms()).build()
}

fn run(source: &str) -> EvalResult {
    let expr = egg_parse::parse(source).unwrap();
    test_interpreter().evaluate(&expr, &test_scope())
}

fn empty_scope() -> LocalScope<Scope> {
    LocalScope::default()
}

/// A function that records each argument it sees, then returns it.
fn recorder() -> (FunctionValue, Rc<RefCell<Vec<Value>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let func = FunctionValue::new("log", move |_, args| {
        check_arg_count("log", args, 1)?;
        sink.borrow_mut().push(args[0].clone());
        Ok(args[0].clone())
    });
    (func, log)
}

// Dispatch on expression kinds

#[test]
fn literal_evaluates_to_itself() {
    let interp = Interpreter::new();
    assert_eq!(
        interp.evaluate(&Expr::number(42.0), &empty_scope()),
        Ok(Value::Number(42.0))
    );
    assert_eq!(
        interp.evaluate(&Expr::string("hi"), &empty_scope()),
        Ok(Value::from("hi"))
    );
}

#[test]
fn bound_word_returns_bound_value() {
    let (func, _) = recorder();
    let scope = Scope::from_iter([
        ("n", Value::Number(3.0)),
        ("f", Value::Function(func.clone())),
    ])
    .into_local();
    let interp = Interpreter::new();

    assert_eq!(interp.evaluate(&Expr::word("n"), &scope), Ok(Value::Number(3.0)));
    // Same closure, not a copy of it.
    assert_eq!(
        interp.evaluate(&Expr::word("f"), &scope),
        Ok(Value::Function(func))
    );
}

#[test]
fn unbound_word_is_error() {
    let err = Interpreter::new()
        .evaluate(&Expr::word("y"), &empty_scope())
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedBinding {
            name: "y".to_string()
        }
    );
}

#[test]
fn word_resolves_through_parent_scope() {
    let parent = Scope::from_iter([("x", Value::Number(1.0))]).into_local();
    let child = Scope::with_parent(parent).into_local();
    assert_eq!(
        Interpreter::new().evaluate(&Expr::word("x"), &child),
        Ok(Value::Number(1.0))
    );
}

// Ordinary application

#[test]
fn applying_a_number_is_error() {
    let expr = Expr::apply(Expr::number(5.0), vec![]);
    let err = Interpreter::new().evaluate(&expr, &empty_scope()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NotCallable {
            type_name: "number".to_string()
        }
    );
}

#[test]
fn applying_a_string_is_error() {
    let err = run("\"text\"(1)").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NotCallable {
            type_name: "string".to_string()
        }
    );
}

#[test]
fn non_callable_detected_before_arguments() {
    // The argument is unbound, but the operator is checked first.
    let err = run("1(missing)").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotCallable { .. }));
}

#[test]
fn unbound_operator_is_undefined_binding() {
    let err = run("nothing(1)").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedBinding {
            name: "nothing".to_string()
        }
    );
}

#[test]
fn call_passes_arguments_in_order() {
    assert_eq!(run("-(10, 3)"), Ok(Value::Number(7.0)));
    assert_eq!(run("-(3, 10)"), Ok(Value::Number(-7.0)));
}

#[test]
fn nested_calls() {
    assert_eq!(run("+(*(2, 3), -(10, 4))"), Ok(Value::Number(12.0)));
}

#[test]
fn arguments_evaluated_left_to_right() {
    let (log_fn, log) = recorder();
    let list = FunctionValue::new("list", |_, args| Ok(Value::Number(args.len() as f64)));
    let scope = Scope::from_iter([
        ("log", Value::Function(log_fn)),
        ("list", Value::Function(list)),
    ])
    .into_local();

    let expr = egg_parse::parse("list(log(1), log(\"two\"), log(3))").unwrap();
    let result = Interpreter::new().evaluate(&expr, &scope);

    assert_eq!(result, Ok(Value::Number(3.0)));
    assert_eq!(
        *log.borrow(),
        vec![Value::Number(1.0), Value::from("two"), Value::Number(3.0)]
    );
}

#[test]
fn argument_error_stops_evaluation() {
    let (log_fn, log) = recorder();
    let scope = Scope::from_iter([("log", Value::Function(log_fn))]).into_local();
    let expr = egg_parse::parse("log(log(missing))").unwrap();

    let err = Interpreter::new().evaluate(&expr, &scope).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UndefinedBinding { .. }));
    assert!(log.borrow().is_empty());
}

#[test]
fn chained_application() {
    let adder = FunctionValue::new("adder", |_, args| {
        let n = args[0].as_number()?;
        Ok(Value::Function(FunctionValue::new("add_n", move |_, args| {
            Ok(Value::Number(n + args[0].as_number()?))
        })))
    });
    let scope = Scope::from_iter([("adder", Value::Function(adder))]).into_local();
    let expr = egg_parse::parse("adder(2)(40)").unwrap();
    assert_eq!(
        Interpreter::new().evaluate(&expr, &scope),
        Ok(Value::Number(42.0))
    );
}

#[test]
fn function_errors_propagate() {
    let err = run("+(1, \"x\")").unwrap_err();
    assert_eq!(err, type_mismatch("number", "string"));
    assert_eq!(run("+(1)").unwrap_err(), wrong_arg_count("+", 2, 1));
}

// Special forms

#[test]
fn special_form_gets_unevaluated_arguments() {
    // The untaken branch names nothing; evaluating it would fail.
    assert_eq!(run("if(1, \"yes\", undefined_thing)"), Ok(Value::from("yes")));
    assert_eq!(run("if(0, undefined_thing, \"no\")"), Ok(Value::from("no")));
}

#[test]
fn special_form_sees_raw_expressions() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let interp = Interpreter::builder()
        .special_form("quote_all", move |_, args, _| {
            sink.borrow_mut().extend(args.iter().cloned());
            Ok(Value::Number(args.len() as f64))
        })
        .build();

    let expr = egg_parse::parse("quote_all(x, f(1), \"s\")").unwrap();
    assert_eq!(interp.evaluate(&expr, &empty_scope()), Ok(Value::Number(3.0)));
    assert_eq!(
        *seen.borrow(),
        vec![
            Expr::word("x"),
            Expr::apply(Expr::word("f"), vec![Expr::number(1.0)]),
            Expr::string("s"),
        ]
    );
}

#[test]
fn special_form_takes_precedence_over_binding() {
    let scope = test_scope();
    scope
        .borrow_mut()
        .define("if", Value::from("not a function"));
    let expr = egg_parse::parse("if(1, 2, 3)").unwrap();
    assert_eq!(
        test_interpreter().evaluate(&expr, &scope),
        Ok(Value::Number(2.0))
    );
}

#[test]
fn special_form_only_matches_word_operator() {
    // `do(1)` evaluates to 1, which is then applied: an ordinary call.
    let err = run("do(1)(2)").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotCallable { .. }));
}

#[test]
fn special_form_errors_propagate() {
    assert_eq!(run("if(1, 2)").unwrap_err(), wrong_arg_count("if", 3, 2));
}

#[test]
fn define_mutates_scope() {
    let scope = test_scope();
    let expr = egg_parse::parse("define(x, +(1, 2))").unwrap();
    assert_eq!(
        test_interpreter().evaluate(&expr, &scope),
        Ok(Value::Number(3.0))
    );
    assert_eq!(scope.borrow().lookup("x"), Some(Value::Number(3.0)));
}

#[test]
fn loop_program() {
    let program = r"
        do(define(total, 0),
           define(count, 1),
           while(<(count, 11),
                 do(define(total, +(total, count)),
                    define(count, +(count, 1)))),
           total)
    ";
    assert_eq!(run(program), Ok(Value::Number(55.0)));
}

#[test]
fn user_functions_and_recursion() {
    let program = r"
        do(define(pow, fun(base, exp,
             if(==(exp, 0),
                1,
                *(base, pow(base, -(exp, 1)))))),
           pow(2, 10))
    ";
    assert_eq!(run(program), Ok(Value::Number(1024.0)));
}

#[test]
fn function_scope_shadows_without_leaking() {
    let program = r"
        do(define(x, 1),
           define(f, fun(x, +(x, 100))),
           define(y, f(5)),
           +(x, y))
    ";
    assert_eq!(run(program), Ok(Value::Number(106.0)));
}

#[test]
fn set_updates_enclosing_binding() {
    let program = r"
        do(define(counter, 0),
           define(bump, fun(set(counter, +(counter, 1)))),
           bump(), bump(), bump(),
           counter)
    ";
    assert_eq!(run(program), Ok(Value::Number(3.0)));
}

// Configuration and limits

#[test]
fn default_interpreter_has_no_special_forms() {
    let interp = Interpreter::new();
    assert!(interp.special_forms().is_empty());
    assert_eq!(interp.max_depth(), MAX_EVAL_DEPTH);

    // Without a registered `if`, the word is just an unbound name.
    let expr = egg_parse::parse("if(1, 2, 3)").unwrap();
    let err = interp.evaluate(&expr, &empty_scope()).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UndefinedBinding { .. }));
}

#[test]
fn interpreters_have_independent_tables() {
    let mut a = Interpreter::new();
    let b = Interpreter::new();
    a.special_forms_mut()
        .register("seven", |_, _, _| Ok(Value::Number(7.0)));

    let expr = egg_parse::parse("seven()").unwrap();
    assert_eq!(a.evaluate(&expr, &empty_scope()), Ok(Value::Number(7.0)));
    assert!(b.evaluate(&expr, &empty_scope()).is_err());
}

#[test]
fn runaway_recursion_hits_limit() {
    let interp = InterpreterBuilder::new()
        .special_forms(test_forms())
        .max_depth(64)
        .build();
    let expr = egg_parse::parse("do(define(spin, fun(spin())), spin())").unwrap();
    let err = interp.evaluate(&expr, &test_scope()).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { limit: 64 });
}

#[test]
fn depth_resets_after_error() {
    let interp = InterpreterBuilder::new()
        .special_forms(test_forms())
        .max_depth(64)
        .build();
    let scope = test_scope();
    let spin = egg_parse::parse("do(define(spin, fun(spin())), spin())").unwrap();
    assert!(interp.evaluate(&spin, &scope).is_err());

    let ok = egg_parse::parse("+(1, 2)").unwrap();
    assert_eq!(interp.evaluate(&ok, &scope), Ok(Value::Number(3.0)));
}

#[test]
fn free_evaluate_uses_default_interpreter() {
    let scope = Scope::from_iter([("x", Value::from("bound"))]).into_local();
    assert_eq!(
        crate::evaluate(&Expr::word("x"), &scope),
        Ok(Value::from("bound"))
    );
}
