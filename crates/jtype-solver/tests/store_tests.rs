use super::*;

#[test]
fn test_builtins() {
    let store = TypeStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(TypeId::UNKNOWN), &TypeData::Unknown);
    for kind in PrimitiveKind::ALL {
        assert_eq!(store.get(kind.type_id()), &TypeData::Primitive(kind));
    }
    // Foreign and context-local ids read as Unknown.
    assert!(store.get(TypeId(1_000_000)).is_unknown());
    assert!(store.get(TypeId::new_context_local(0)).is_unknown());
}

#[test]
fn test_well_known_classes() {
    let store = TypeStore::new();
    let wk = *store.well_known();

    assert_eq!(store.lookup_class("java.lang.Integer"), Some(wk.integer));
    assert_eq!(store.fully_qualified_name(wk.string), Some("java.lang.String"));
    assert_eq!(store.lookup_class("java.util.List"), None);

    let integer = store.as_fully_qualified(wk.integer).unwrap();
    assert_eq!(integer.supertype(), Some(wk.number));
    assert!(integer.flags().contains(Flags::FINAL));
    assert_eq!(integer.interfaces().len(), 1);

    let string = store.as_fully_qualified(wk.string).unwrap();
    assert!(string.interfaces().contains(&wk.char_sequence));
    assert!(string.interfaces().contains(&wk.serializable));
}

#[test]
fn test_classes_are_shared_by_name() {
    let mut store = TypeStore::new();
    let list = store.class("java.util.List", ClassKind::Interface);
    assert!(!store.is_empty());
    assert_eq!(store.class("java.util.List", ClassKind::Interface), list);

    let snapshot = store.new_class("java.util.List", ClassKind::Interface, Flags::PUBLIC);
    assert_ne!(snapshot, list);
    assert_eq!(store.lookup_class("java.util.List"), Some(list));
    assert_eq!(store.fully_qualified_name(snapshot), Some("java.util.List"));
}

#[test]
fn test_two_phase_fill_in() {
    let mut store = TypeStore::new();
    let wk = *store.well_known();
    let list = store.class("java.util.List", ClassKind::Interface);
    let e = store.generic_type_variable("E", Variance::Invariant, vec![]);
    let list_of_e = store.parameterized(list, vec![]);

    store.unsafe_set_type_arguments(list_of_e, vec![e]).unwrap();
    store
        .unsafe_set_class(list, ClassDetails::new().with_type_parameters(vec![e]))
        .unwrap();
    store.unsafe_set_bounds(e, vec![wk.object]).unwrap();

    let fq = store.as_fully_qualified(list_of_e).unwrap();
    assert_eq!(fq.type_arguments(), &[e]);
    assert_eq!(fq.kind(), ClassKind::Interface);
    assert_eq!(store.name(fq.name()), "java.util.List");
    match store.get(e) {
        TypeData::GenericTypeVariable(var) => assert_eq!(var.bounds, vec![wk.object]),
        other => panic!("expected a type variable, got {other:?}"),
    }
}

#[test]
fn test_fill_in_rejects_wrong_categories() {
    let mut store = TypeStore::new();
    let class = store.class("com.example.A", ClassKind::Class);
    let array = store.array(class);
    let foreign = TypeId(1_000_000);

    assert_eq!(
        store.unsafe_set_class(array, ClassDetails::new()),
        Err(GraphError::NotAClass(array))
    );
    assert_eq!(
        store.unsafe_set_bounds(class, vec![]),
        Err(GraphError::NotAGenericTypeVariable(class))
    );
    assert_eq!(
        store.unsafe_set_type_arguments(class, vec![]),
        Err(GraphError::NotAParameterized(class))
    );
    assert_eq!(
        store.unsafe_set_resolved_signature(class, Signature::default()),
        Err(GraphError::NotAMethod(class))
    );
    assert_eq!(
        store.unsafe_set_variable_type(class, TypeId::INT),
        Err(GraphError::NotAVariable(class))
    );
    assert_eq!(
        store.unsafe_set_flags(foreign, Flags::PUBLIC),
        Err(GraphError::UnknownTypeId(foreign))
    );
    let local = TypeId::new_context_local(0);
    assert_eq!(
        store.unsafe_set_class(local, ClassDetails::new()),
        Err(GraphError::UnknownTypeId(local))
    );
    assert_eq!(
        GraphError::NotAClass(TypeId(20)).to_string(),
        "type id TypeId(20) is not a class"
    );
}

#[test]
fn test_methods() {
    let mut store = TypeStore::new();
    let wk = *store.well_known();
    let list = store.class("java.util.List", ClassKind::Interface);
    let e = store.generic_type_variable("E", Variance::Invariant, vec![]);

    let get = store.method(
        MethodDetails::new(list, "get", Signature::new(e, vec![TypeId::INT]))
            .with_flags(Flags::PUBLIC | Flags::ABSTRACT)
            .with_parameter_names(&["index"]),
    );
    let TypeData::Method(method) = store.get(get) else {
        panic!("expected a method");
    };
    assert_eq!(method.resolved_signature, method.generic_signature);
    assert_eq!(store.name(method.parameter_names[0]), "index");

    store
        .unsafe_set_resolved_signature(get, Signature::new(wk.string, vec![TypeId::INT]))
        .unwrap();
    store
        .unsafe_set_thrown_exceptions(get, vec![wk.object])
        .unwrap();
    let TypeData::Method(method) = store.get(get) else {
        panic!("expected a method");
    };
    assert_eq!(method.resolved_signature.return_type, wk.string);
    assert_eq!(method.generic_signature.return_type, e);
    assert_eq!(method.thrown_exceptions, vec![wk.object]);
}

#[test]
fn test_variables() {
    let mut store = TypeStore::new();
    let wk = *store.well_known();
    let field = store.variable(Some(wk.object), "name", TypeId::UNKNOWN, Flags::PRIVATE);

    store.unsafe_set_variable_type(field, wk.string).unwrap();
    store.unsafe_set_flags(field, Flags::PRIVATE | Flags::FINAL).unwrap();

    let TypeData::Variable(variable) = store.get(field) else {
        panic!("expected a variable");
    };
    assert_eq!(variable.type_id, wk.string);
    assert_eq!(variable.flags, Flags::PRIVATE | Flags::FINAL);
    assert_eq!(variable.owner, Some(wk.object));
}

#[test]
fn test_wildcards_and_variables_share_a_category() {
    let mut store = TypeStore::new();
    let wk = *store.well_known();
    let wildcard = store.wildcard(Variance::Covariant, vec![wk.number]);
    let t = store.generic_type_variable("T", Variance::Invariant, vec![]);

    let as_wildcard = store.get(wildcard).as_generic_type_variable().unwrap();
    let as_variable = store.get(t).as_generic_type_variable().unwrap();
    assert!(store.is_wildcard(as_wildcard));
    assert!(!store.is_wildcard(as_variable));
    assert_eq!(store.name(store.wildcard_name()), "?");

    let fq = store.as_fully_qualified(t).unwrap();
    assert_eq!(store.name(fq.name()), "T");
    assert_eq!(fq.supertype(), None);
    assert!(fq.class().is_none());
    assert!(store.as_fully_qualified(TypeId::INT).is_none());
}
