use super::*;
use crate::fixtures::Jdk;

#[test]
fn test_assignable_to_name_walks_the_hierarchy() {
    let mut jdk = Jdk::new();
    let array_list_of_string = jdk.param(jdk.array_list, &[jdk.string]);

    let mut compat = jdk.compat();
    assert!(compat.is_assignable_to_name("java.lang.Number", jdk.integer));
    assert!(compat.is_assignable_to_name("java.lang.Object", jdk.integer));
    assert!(compat.is_assignable_to_name("java.lang.Iterable", array_list_of_string));
    assert!(compat.is_assignable_to_name("java.lang.Throwable", jdk.illegal_argument));
    assert!(!compat.is_assignable_to_name("java.io.IOException", jdk.illegal_argument));
    assert!(!compat.is_assignable_to_name("java.lang.Number", jdk.string));
    assert!(!compat.is_assignable_to_name("java.lang.Number", None));
}

#[test]
fn test_assignable_to_name_boxes_primitives() {
    let jdk = Jdk::new();
    let mut compat = jdk.compat();
    assert!(compat.is_assignable_to_name("java.lang.Comparable", TypeId::INT));
    assert!(compat.is_assignable_to_name("java.lang.Number", TypeId::DOUBLE));
    assert!(compat.is_assignable_to_name("java.lang.CharSequence", TypeId::STRING));
    assert!(!compat.is_assignable_to_name("java.lang.Number", TypeId::BOOLEAN));
    assert!(!compat.is_assignable_to_name("java.lang.Object", TypeId::NULL));
}

#[test]
fn test_assignable_to_name_through_variables_and_composites() {
    let mut jdk = Jdk::new();
    let t = jdk.var("T", &[jdk.integer]);
    let u = jdk.var("U", &[]);
    let both = jdk.store.intersection(vec![jdk.serializable, jdk.char_sequence]);
    let caught = jdk
        .store
        .multi_catch(vec![jdk.io_exception, jdk.illegal_argument]);
    let ints = jdk.store.array(TypeId::INT);

    let mut compat = jdk.compat();
    assert!(compat.is_assignable_to_name("java.lang.Number", t));
    assert!(compat.is_assignable_to_name("java.lang.Object", u));
    assert!(!compat.is_assignable_to_name("java.lang.Number", u));
    assert!(compat.is_assignable_to_name("java.lang.CharSequence", both));
    assert!(compat.is_assignable_to_name("java.lang.Exception", caught));
    assert!(!compat.is_assignable_to_name("java.lang.RuntimeException", caught));
    assert!(compat.is_assignable_to_name("java.lang.Cloneable", ints));
    assert!(!compat.is_assignable_to_name("java.util.List", ints));
}

#[test]
fn test_assignable_to_name_on_cyclic_declarations() {
    let jdk = Jdk::new();
    let mut compat = jdk.compat();
    assert!(compat.is_assignable_to_name("java.lang.Comparable", jdk.color));
    assert!(compat.is_assignable_to_name("com.example.Node", jdk.node_t));
    assert!(!compat.is_assignable_to_name("java.lang.Runnable", jdk.node_t));
}

#[test]
fn test_assignable_to_name_is_separator_lenient() {
    let jdk = Jdk::new();
    let mut compat = jdk.compat();
    assert!(compat.is_assignable_to_name("java.util.Map.Entry", jdk.map_entry));
    assert!(compat.is_assignable_to_name("java.util.Map$Entry", jdk.map_entry));
}

#[test]
fn test_is_of_class_type() {
    let mut jdk = Jdk::new();
    let list_of_string = jdk.list_of(jdk.string);
    let first = jdk.store.method(MethodDetails::new(
        jdk.list,
        "getFirst",
        Signature::new(list_of_string, vec![]),
    ));
    let t = jdk.var("T", &[jdk.list]);

    let store = &jdk.store;
    assert!(store.is_of_class_type(list_of_string, "java.util.List"));
    assert!(store.is_of_class_type(jdk.list, "java.util.List"));
    assert!(store.is_of_class_type(first, "java.util.List"));
    assert!(store.is_of_class_type(jdk.map_entry, "java.util.Map.Entry"));
    assert!(store.is_of_class_type(TypeId::STRING, "java.lang.String"));
    assert!(!store.is_of_class_type(t, "java.util.List"));
    assert!(!store.is_of_class_type(TypeId::INT, "java.lang.Integer"));
    assert!(!store.is_of_class_type(jdk.array_list, "java.util.List"));
}

#[test]
fn test_unbox_sees_through_normalization() {
    let mut jdk = Jdk::new();
    let field = jdk
        .store
        .variable(Some(jdk.object), "boxed", jdk.long, Flags::PRIVATE);

    assert_eq!(jdk.store.unbox(field), Some(PrimitiveKind::Long));
    assert_eq!(jdk.store.unbox(jdk.number), None);
    assert_eq!(
        jdk.store.box_primitive(PrimitiveKind::Void),
        Some(jdk.store.well_known().void)
    );
}
