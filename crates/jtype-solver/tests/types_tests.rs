use super::*;
use crate::TypeStore;

#[test]
fn test_fixed_ids() {
    assert!(TypeId::UNKNOWN.is_unknown());
    assert!(!TypeId::UNKNOWN.is_primitive());
    assert!(TypeId::BOOLEAN.is_primitive());
    assert!(TypeId::NONE.is_primitive());
    assert!(!TypeId(TypeId::FIRST_ALLOCATED).is_primitive());

    let local = TypeId::new_context_local(3);
    assert!(local.is_context_local());
    assert!(!local.is_primitive());
    assert_eq!(local.context_local_index(), Some(3));
    assert_eq!(TypeId::INT.context_local_index(), None);
}

#[test]
fn test_primitive_ids() {
    for kind in PrimitiveKind::ALL {
        assert_eq!(PrimitiveKind::from_type_id(kind.type_id()), Some(kind));
    }
    assert_eq!(PrimitiveKind::from_type_id(TypeId::UNKNOWN), None);
    assert_eq!(PrimitiveKind::from_type_id(TypeId(TypeId::FIRST_ALLOCATED)), None);
}

#[test]
fn test_keywords() {
    assert_eq!(PrimitiveKind::from_keyword("int"), Some(PrimitiveKind::Int));
    assert_eq!(PrimitiveKind::from_keyword("String"), Some(PrimitiveKind::String));
    assert_eq!(PrimitiveKind::from_keyword("Integer"), None);
    assert_eq!(PrimitiveKind::Char.keyword(), "char");
}

#[test]
fn test_boxing_names() {
    assert_eq!(
        PrimitiveKind::from_boxed_name("java.lang.Integer"),
        Some(PrimitiveKind::Int)
    );
    assert_eq!(
        PrimitiveKind::from_boxed_name("java.lang.Character"),
        Some(PrimitiveKind::Char)
    );
    assert_eq!(
        PrimitiveKind::from_boxed_name("java.lang.Void"),
        Some(PrimitiveKind::Void)
    );
    // String is the canonical class, not a wrapper.
    assert_eq!(PrimitiveKind::from_boxed_name("java.lang.String"), None);
    assert_eq!(PrimitiveKind::from_boxed_name("java.lang.Number"), None);
    assert_eq!(PrimitiveKind::Null.boxed_name(), None);
    assert_eq!(PrimitiveKind::None.boxed_name(), None);
}

#[test]
fn test_numeric_kinds() {
    let numeric: Vec<_> = PrimitiveKind::ALL
        .into_iter()
        .filter(|kind| kind.is_numeric())
        .collect();
    assert_eq!(numeric.len(), 7);
    assert!(PrimitiveKind::Char.is_numeric());
    assert!(!PrimitiveKind::Boolean.is_numeric());
    assert!(!PrimitiveKind::String.is_numeric());
}

#[test]
fn test_categories() {
    let mut store = TypeStore::new();
    let object = store.well_known().object;
    let list = store.class("java.util.List", ClassKind::Interface);
    let list_of_object = store.parameterized(list, vec![object]);
    let array = store.array(object);

    assert_eq!(store.get(list).category(), "class");
    assert_eq!(store.get(list_of_object).category(), "parameterized");
    assert_eq!(store.get(array).category(), "array");
    assert!(store.get(list_of_object).is_fully_qualified());
    assert!(!store.get(array).is_fully_qualified());
    assert!(store.get(TypeId::LONG).is_primitive());
    assert!(store.get(array).as_generic_type_variable().is_none());
}

#[test]
fn test_fully_qualified_view_delegates_to_class() {
    let mut store = TypeStore::new();
    let wk = *store.well_known();
    let comparable_integer = store.parameterized(wk.comparable, vec![wk.integer]);

    let raw = store.as_fully_qualified(wk.integer).unwrap();
    assert_eq!(raw.kind(), ClassKind::Class);
    assert!(raw.type_arguments().is_empty());
    assert!(raw.members().is_empty());

    let parameterized = store.as_fully_qualified(comparable_integer).unwrap();
    assert_eq!(parameterized.name(), raw_name(&store, wk.comparable));
    assert_eq!(parameterized.kind(), ClassKind::Interface);
    assert_eq!(parameterized.type_arguments(), &[wk.integer]);
    assert!(parameterized.methods().is_empty());
    assert_eq!(parameterized.owning_class(), None);
}

fn raw_name(store: &TypeStore, class: TypeId) -> Atom {
    store
        .as_fully_qualified(class)
        .map(FullyQualified::name)
        .unwrap()
}

#[test]
fn test_flags() {
    let flags = Flags::PUBLIC | Flags::STATIC | Flags::FINAL;
    assert!(flags.contains(Flags::STATIC));
    assert!(!flags.contains(Flags::ABSTRACT));
    assert_eq!(Flags::default(), Flags::empty());
}
