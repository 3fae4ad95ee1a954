use super::*;
use crate::fixtures::Jdk;

#[test]
fn test_invariant_arguments() {
    let mut jdk = Jdk::new();
    let integers = jdk.list_of(jdk.integer);
    let numbers = jdk.list_of(jdk.number);

    assert!(!jdk.assignable(numbers, integers));
    assert!(!jdk.assignable(integers, numbers));
}

#[test]
fn test_extends_wildcard_is_covariant() {
    let mut jdk = Jdk::new();
    let extends_number = jdk.extends(jdk.number);
    let readable = jdk.list_of(extends_number);
    let integers = jdk.list_of(jdk.integer);
    let strings = jdk.list_of(jdk.string);

    assert!(jdk.assignable(readable, integers));
    assert!(!jdk.assignable(readable, strings));
    assert!(!jdk.assignable(integers, readable));
}

#[test]
fn test_super_wildcard_is_contravariant() {
    let mut jdk = Jdk::new();
    let super_integer = jdk.super_of(jdk.integer);
    let writable = jdk.list_of(super_integer);
    let numbers = jdk.list_of(jdk.number);
    let objects = jdk.list_of(jdk.object);
    let longs = jdk.list_of(jdk.long);

    assert!(jdk.assignable(writable, numbers));
    assert!(jdk.assignable(writable, objects));
    assert!(!jdk.assignable(writable, longs));
}

#[test]
fn test_unbounded_wildcard_accepts_any_argument() {
    let mut jdk = Jdk::new();
    let unbounded = jdk.unbounded();
    let anything = jdk.list_of(unbounded);
    let strings = jdk.list_of(jdk.string);
    let extends_number = jdk.extends(jdk.number);
    let readable = jdk.list_of(extends_number);

    assert!(jdk.assignable(anything, strings));
    assert!(jdk.assignable(anything, readable));
    assert!(!jdk.assignable(strings, anything));
}

#[test]
fn test_wildcard_to_wildcard() {
    let mut jdk = Jdk::new();
    let extends_number = jdk.extends(jdk.number);
    let extends_integer = jdk.extends(jdk.integer);
    let super_integer = jdk.super_of(jdk.integer);
    let super_number = jdk.super_of(jdk.number);
    let unbounded = jdk.unbounded();

    // List<? extends Number> <- List<? extends Integer>
    assert!(jdk.assignable(extends_number, extends_integer));
    assert!(!jdk.assignable(extends_integer, extends_number));
    // List<? super Integer> <- List<? super Number>
    assert!(jdk.assignable(super_integer, super_number));
    assert!(!jdk.assignable(super_number, super_integer));
    // Variance must match.
    assert!(!jdk.assignable(extends_number, super_integer));
    // An unbounded source never fits a bounded target.
    assert!(!jdk.assignable(extends_number, unbounded));
    assert!(jdk.assignable(unbounded, extends_number));
}

#[test]
fn test_wildcards_nested_in_parameterized_arguments() {
    let mut jdk = Jdk::new();
    let extends_number = jdk.extends(jdk.number);
    let extends_integer = jdk.extends(jdk.integer);
    let readable_numbers = jdk.list_of(extends_number);
    let readable_integers = jdk.list_of(extends_integer);

    assert!(jdk.assignable(readable_numbers, readable_integers));
    assert!(!jdk.assignable(readable_integers, readable_numbers));
}

#[test]
fn test_declared_variable_as_source() {
    let mut jdk = Jdk::new();
    let t = jdk.var("T", &[jdk.integer]);
    let u = jdk.var("U", &[]);

    assert!(jdk.assignable(jdk.number, t));
    assert!(jdk.assignable(jdk.integer, t));
    assert!(!jdk.assignable(jdk.string, t));
    // An unbounded variable is only known to be an Object.
    assert!(jdk.assignable(jdk.object, u));
    assert!(!jdk.assignable(jdk.string, u));
}

#[test]
fn test_declared_variable_as_target() {
    let mut jdk = Jdk::new();
    let t = jdk.var("T", &[jdk.number]);

    assert!(jdk.assignable(t, jdk.integer));
    assert!(!jdk.assignable(t, jdk.string));
    assert!(jdk.assignable(t, TypeId::INT));
}

#[test]
fn test_same_named_variables_compare_structurally() {
    let mut jdk = Jdk::new();
    let t = jdk.var("T", &[jdk.number]);
    let t_again = jdk.var("T", &[jdk.number]);
    let t_other_bound = jdk.var("T", &[jdk.string]);

    assert!(jdk.assignable(t, t_again));
    assert!(!jdk.assignable(t, t_other_bound));
}

#[test]
fn test_differently_named_variables_go_through_bounds() {
    let mut jdk = Jdk::new();
    let t = jdk.var("T", &[jdk.number]);
    // U extends T
    let u = jdk.var("U", &[t]);
    let v = jdk.var("V", &[]);
    let w = jdk.var("W", &[jdk.string]);

    assert!(jdk.assignable(t, u));
    assert!(!jdk.assignable(t, v));
    assert!(!jdk.assignable(t, w));
}

#[test]
fn test_multiple_bounds_use_one_cached_intersection() {
    let mut jdk = Jdk::new();
    // T extends Number & Comparable<T>
    let t = jdk.var("T", &[]);
    let comparable_t = jdk.param(jdk.comparable, &[t]);
    jdk.store
        .unsafe_set_bounds(t, vec![jdk.number, comparable_t])
        .unwrap();

    let mut compat = jdk.compat();
    assert!(compat.is_assignable_to(jdk.number, t));
    assert!(compat.is_assignable_to(jdk.serializable, t));
    assert!(!compat.is_assignable_to(jdk.string, t));
    assert_eq!(compat.context().local_count(), 1);
}

#[test]
fn test_multi_bound_target_needs_every_bound() {
    let mut jdk = Jdk::new();
    // T extends Serializable & CharSequence
    let t = jdk.var("T", &[jdk.serializable, jdk.char_sequence]);

    assert!(jdk.assignable(t, jdk.string));
    assert!(!jdk.assignable(t, jdk.integer));
}

#[test]
fn test_contravariant_source_variable() {
    let mut jdk = Jdk::new();
    let super_integer = jdk.super_of(jdk.integer);

    // A `? super Integer` value is only known to be a supertype of Integer.
    assert!(jdk.assignable(jdk.object, super_integer));
    assert!(!jdk.assignable(jdk.number, super_integer));
}

#[test]
fn test_generic_method_result_in_infer_mode() {
    let mut jdk = Jdk::new();
    // <T extends Number> List<T> numbers()
    let t = jdk.var("T", &[jdk.number]);
    let list_of_t = jdk.list_of(t);
    let method = jdk.store.method(MethodDetails::new(
        jdk.object,
        "numbers",
        Signature::new(list_of_t, vec![]),
    ));
    let integers = jdk.list_of(jdk.integer);

    assert!(!jdk.compat().is_assignable_to(method, integers));
    assert!(jdk.infer_compat().is_assignable_to(method, integers));
}

#[test]
fn test_infer_flips_side_under_super_wildcard() {
    let mut jdk = Jdk::new();
    // List<? super List<T>> <- List<List<String>>
    let t = jdk.var("T", &[]);
    let list_of_t = jdk.list_of(t);
    let super_list_of_t = jdk.super_of(list_of_t);
    let consumer = jdk.list_of(super_list_of_t);
    let list_of_string = jdk.list_of(jdk.string);
    let nested = jdk.list_of(list_of_string);

    // After `? super` the operands swap and `T` sits on the inferred side.
    assert!(!jdk.compat().is_assignable_to(consumer, nested));
    assert!(jdk.infer_compat().is_assignable_to(consumer, nested));
}
