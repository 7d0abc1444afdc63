use super::*;
use crate::Value;
use pretty_assertions::assert_eq;

fn constant(n: f64) -> impl Fn(&Interpreter, &[Expr], &LocalScope<Scope>) -> EvalResult {
    move |_, _, _| Ok(Value::Number(n))
}

#[test]
fn starts_empty() {
    let forms = SpecialForms::new();
    assert!(forms.is_empty());
    assert_eq!(forms.len(), 0);
    assert!(forms.get("if").is_none());
}

#[test]
fn register_and_get() {
    let mut forms = SpecialForms::new();
    assert!(forms.register("one", constant(1.0)).is_none());
    assert!(forms.contains("one"));

    let interpreter = Interpreter::new();
    let scope = LocalScope::<Scope>::default();
    let result = forms
        .get("one")
        .map(|form| form.invoke(&interpreter, &[], &scope));
    assert_eq!(result, Some(Ok(Value::Number(1.0))));
}

#[test]
fn register_replaces_existing() {
    let mut forms = SpecialForms::new();
    forms.register("n", constant(1.0));
    assert!(forms.register("n", constant(2.0)).is_some());
    assert_eq!(forms.len(), 1);

    let interpreter = Interpreter::new();
    let scope = LocalScope::<Scope>::default();
    let result = forms.get("n").map(|form| form.invoke(&interpreter, &[], &scope));
    assert_eq!(result, Some(Ok(Value::Number(2.0))));
}

#[test]
fn unregister_removes() {
    let mut forms = SpecialForms::new();
    forms.register("gone", constant(0.0));
    assert!(forms.unregister("gone").is_some());
    assert!(!forms.contains("gone"));
    assert!(forms.unregister("gone").is_none());
}

#[test]
fn names_sorted_in_debug() {
    let mut forms = SpecialForms::new();
    forms.register("while", constant(0.0));
    forms.register("do", constant(0.0));
    forms.register("if", constant(0.0));
    assert_eq!(forms.names(), vec!["do", "if", "while"]);
    assert_eq!(format!("{forms:?}"), r#"{"do", "if", "while"}"#);
}
