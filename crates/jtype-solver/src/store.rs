//! Type graph storage and two-phase construction.
//!
//! The producer (a parser / attribution front end) builds the graph in two
//! passes:
//!
//! 1. **Allocate** every declaration shell it knows about (`class`,
//!    `generic_type_variable`, ...). Allocation never looks at other types.
//! 2. **Fill in** the references with the `unsafe_set_*` family. These are
//!    the only mutators of an allocated type, and only the producer calls
//!    them; after that the store is shared read-only (`&TypeStore` is `Sync`).
//!
//! This is what makes self-referential declarations expressible:
//!
//! ```
//! use jtype_solver::{ClassDetails, ClassKind, TypeStore, Variance};
//!
//! let mut store = TypeStore::new();
//! // class Node<T extends Node<T>>
//! let node = store.class("com.example.Node", ClassKind::Class);
//! let t = store.generic_type_variable("T", Variance::Invariant, vec![]);
//! let node_of_t = store.parameterized(node, vec![t]);
//! store.unsafe_set_bounds(t, vec![node_of_t]).unwrap();
//! store
//!     .unsafe_set_class(node, ClassDetails::new().with_type_parameters(vec![t]))
//!     .unwrap();
//! ```

use crate::types::{
    ArrayType, ClassKind, ClassType, Flags, FullyQualified, GenericTypeVariable,
    IntersectionType, MethodType, MultiCatchType, ParameterizedType, PrimitiveKind, Signature,
    TypeData, TypeId, VariableType, Variance,
};
use jtype_common::{Atom, Interner};
use rustc_hash::FxHashMap;
use tracing::trace;

static UNKNOWN: TypeData = TypeData::Unknown;

/// Producer contract violations reported by the fill-in API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("type id {0:?} does not belong to this store")]
    UnknownTypeId(TypeId),
    #[error("type id {0:?} is not a class")]
    NotAClass(TypeId),
    #[error("type id {0:?} is not a parameterized type")]
    NotAParameterized(TypeId),
    #[error("type id {0:?} is not a generic type variable")]
    NotAGenericTypeVariable(TypeId),
    #[error("type id {0:?} is not a method")]
    NotAMethod(TypeId),
    #[error("type id {0:?} is not a variable")]
    NotAVariable(TypeId),
}

/// Ids of the `java.lang` / `java.io` classes every store starts with.
#[derive(Clone, Copy, Debug, Default)]
pub struct WellKnownTypes {
    pub object: TypeId,
    pub string: TypeId,
    pub char_sequence: TypeId,
    pub comparable: TypeId,
    pub serializable: TypeId,
    pub cloneable: TypeId,
    pub number: TypeId,
    pub boolean: TypeId,
    pub byte: TypeId,
    pub character: TypeId,
    pub double: TypeId,
    pub float: TypeId,
    pub integer: TypeId,
    pub long: TypeId,
    pub short: TypeId,
    pub void: TypeId,
}

// =============================================================================
// Fill-in payloads
// =============================================================================

/// Everything about a class that refers to other types.
///
/// Passed to [`TypeStore::unsafe_set_class`] once all referenced shells
/// exist.
#[derive(Clone, Debug, Default)]
pub struct ClassDetails {
    pub type_parameters: Vec<TypeId>,
    pub supertype: Option<TypeId>,
    pub owning_class: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
    pub members: Vec<TypeId>,
    pub methods: Vec<TypeId>,
}

impl ClassDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeId>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn with_supertype(mut self, supertype: TypeId) -> Self {
        self.supertype = Some(supertype);
        self
    }

    pub fn with_owning_class(mut self, owning_class: TypeId) -> Self {
        self.owning_class = Some(owning_class);
        self
    }

    pub fn with_interfaces(mut self, interfaces: Vec<TypeId>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn with_members(mut self, members: Vec<TypeId>) -> Self {
        self.members = members;
        self
    }

    pub fn with_methods(mut self, methods: Vec<TypeId>) -> Self {
        self.methods = methods;
        self
    }

    fn apply_to(self, class: &mut ClassType) {
        class.type_parameters = self.type_parameters;
        class.supertype = self.supertype;
        class.owning_class = self.owning_class;
        class.interfaces = self.interfaces;
        class.members = self.members;
        class.methods = self.methods;
    }
}

/// Declaration of a method, passed to [`TypeStore::method`].
#[derive(Clone, Debug)]
pub struct MethodDetails<'s> {
    pub declaring_type: TypeId,
    pub name: &'s str,
    pub flags: Flags,
    pub parameter_names: Vec<&'s str>,
    pub generic_signature: Signature,
    /// Defaults to the generic signature.
    pub resolved_signature: Option<Signature>,
    pub thrown_exceptions: Vec<TypeId>,
}

impl<'s> MethodDetails<'s> {
    pub fn new(declaring_type: TypeId, name: &'s str, generic_signature: Signature) -> Self {
        Self {
            declaring_type,
            name,
            flags: Flags::empty(),
            parameter_names: Vec::new(),
            generic_signature,
            resolved_signature: None,
            thrown_exceptions: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_parameter_names(mut self, names: &[&'s str]) -> Self {
        self.parameter_names = names.to_vec();
        self
    }

    pub fn with_resolved_signature(mut self, signature: Signature) -> Self {
        self.resolved_signature = Some(signature);
        self
    }

    pub fn with_thrown_exceptions(mut self, thrown: Vec<TypeId>) -> Self {
        self.thrown_exceptions = thrown;
        self
    }
}

// =============================================================================
// TypeStore
// =============================================================================

/// Arena owning one type graph.
pub struct TypeStore {
    types: Vec<TypeData>,
    interner: Interner,
    /// First class registered under each fully-qualified name.
    classes_by_name: FxHashMap<Atom, TypeId>,
    well_known: WellKnownTypes,
    wildcard: Atom,
    /// Number of types present before the producer allocates anything.
    builtins: usize,
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeStore")
            .field("types", &self.types.len())
            .field("classes", &self.classes_by_name.len())
            .finish_non_exhaustive()
    }
}

impl TypeStore {
    /// Create a store holding `Unknown`, the primitive singletons and the
    /// well-known JDK classes.
    pub fn new() -> Self {
        let mut interner = Interner::new();
        let wildcard = interner.intern("?");
        interner.intern_common();

        let mut store = Self {
            types: Vec::with_capacity(256),
            interner,
            classes_by_name: FxHashMap::default(),
            well_known: WellKnownTypes::default(),
            wildcard,
            builtins: 0,
        };
        store.types.push(TypeData::Unknown);
        for kind in PrimitiveKind::ALL {
            store.types.push(TypeData::Primitive(kind));
        }
        debug_assert_eq!(store.types.len() as u32, TypeId::FIRST_ALLOCATED);

        store.well_known = store.register_well_known();
        store.builtins = store.types.len();
        trace!(types = store.types.len(), "TypeStore::new");
        store
    }

    fn register_well_known(&mut self) -> WellKnownTypes {
        let object = self.class("java.lang.Object", ClassKind::Class);
        let serializable = self.class("java.io.Serializable", ClassKind::Interface);
        let cloneable = self.class("java.lang.Cloneable", ClassKind::Interface);
        let char_sequence = self.class("java.lang.CharSequence", ClassKind::Interface);

        let comparable = self.class("java.lang.Comparable", ClassKind::Interface);
        let comparable_t = self.generic_type_variable("T", Variance::Invariant, vec![]);
        self.fill_class(
            comparable,
            ClassDetails::new().with_type_parameters(vec![comparable_t]),
        );

        let string = self.class("java.lang.String", ClassKind::Class);
        let comparable_string = self.parameterized(comparable, vec![string]);
        self.fill_class(
            string,
            ClassDetails::new()
                .with_supertype(object)
                .with_interfaces(vec![serializable, comparable_string, char_sequence]),
        );

        let number = self.class("java.lang.Number", ClassKind::Class);
        self.fill_class(
            number,
            ClassDetails::new()
                .with_supertype(object)
                .with_interfaces(vec![serializable]),
        );

        let boxed = |store: &mut Self, fqn: &str, supertype: TypeId| {
            let id = store.class(fqn, ClassKind::Class);
            let comparable_self = store.parameterized(comparable, vec![id]);
            let mut interfaces = vec![comparable_self];
            if supertype == object {
                interfaces.insert(0, serializable);
            }
            store.fill_class(
                id,
                ClassDetails::new()
                    .with_supertype(supertype)
                    .with_interfaces(interfaces),
            );
            id
        };
        let boolean = boxed(self, "java.lang.Boolean", object);
        let character = boxed(self, "java.lang.Character", object);
        let byte = boxed(self, "java.lang.Byte", number);
        let short = boxed(self, "java.lang.Short", number);
        let integer = boxed(self, "java.lang.Integer", number);
        let long = boxed(self, "java.lang.Long", number);
        let float = boxed(self, "java.lang.Float", number);
        let double = boxed(self, "java.lang.Double", number);

        let void = self.class("java.lang.Void", ClassKind::Class);
        self.fill_class(void, ClassDetails::new().with_supertype(object));

        for id in [
            string, boolean, character, byte, short, integer, long, float, double, void,
        ] {
            if let Ok(class) = self.class_mut(id) {
                class.flags = Flags::PUBLIC | Flags::FINAL;
            }
        }

        WellKnownTypes {
            object,
            string,
            char_sequence,
            comparable,
            serializable,
            cloneable,
            number,
            boolean,
            byte,
            character,
            double,
            float,
            integer,
            long,
            short,
            void,
        }
    }

    // -------------------------------------------------------------------------
    // Phase one: allocation
    // -------------------------------------------------------------------------

    fn alloc(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        trace!(type_id = id.0, category = data.category(), "TypeStore::alloc");
        self.types.push(data);
        id
    }

    /// Intern a name in this store's interner.
    pub fn intern(&mut self, s: &str) -> Atom {
        self.interner.intern(s)
    }

    /// Class shell for `fqn`, shared by name: asking twice returns the same id.
    pub fn class(&mut self, fully_qualified_name: &str, kind: ClassKind) -> TypeId {
        if let Some(id) = self.lookup_class(fully_qualified_name) {
            return id;
        }
        self.new_class(fully_qualified_name, kind, Flags::PUBLIC)
    }

    /// Always allocate a new class shell, even if the name is known.
    ///
    /// The name index keeps pointing at the first registration.
    pub fn new_class(&mut self, fully_qualified_name: &str, kind: ClassKind, flags: Flags) -> TypeId {
        let name = self.interner.intern(fully_qualified_name);
        let id = self.alloc(TypeData::Class(ClassType {
            flags,
            fully_qualified_name: name,
            kind,
            type_parameters: Vec::new(),
            supertype: None,
            owning_class: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            methods: Vec::new(),
        }));
        self.classes_by_name.entry(name).or_insert(id);
        id
    }

    pub fn parameterized(&mut self, class: TypeId, arguments: Vec<TypeId>) -> TypeId {
        self.alloc(TypeData::Parameterized(ParameterizedType { class, arguments }))
    }

    pub fn generic_type_variable(
        &mut self,
        name: &str,
        variance: Variance,
        bounds: Vec<TypeId>,
    ) -> TypeId {
        let name = self.interner.intern(name);
        self.alloc(TypeData::GenericTypeVariable(GenericTypeVariable {
            name,
            variance,
            bounds,
        }))
    }

    /// A wildcard: `?` (invariant, no bounds), `? extends X` (covariant) or
    /// `? super X` (contravariant).
    pub fn wildcard(&mut self, variance: Variance, bounds: Vec<TypeId>) -> TypeId {
        self.alloc(TypeData::GenericTypeVariable(GenericTypeVariable {
            name: self.wildcard,
            variance,
            bounds,
        }))
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.alloc(TypeData::Array(ArrayType { element }))
    }

    pub fn intersection(&mut self, bounds: Vec<TypeId>) -> TypeId {
        self.alloc(TypeData::Intersection(IntersectionType { bounds }))
    }

    pub fn multi_catch(&mut self, throwable_types: Vec<TypeId>) -> TypeId {
        self.alloc(TypeData::MultiCatch(MultiCatchType { throwable_types }))
    }

    pub fn method(&mut self, details: MethodDetails<'_>) -> TypeId {
        let name = self.interner.intern(details.name);
        let parameter_names = details
            .parameter_names
            .iter()
            .map(|n| self.interner.intern(n))
            .collect();
        let resolved_signature = details
            .resolved_signature
            .unwrap_or_else(|| details.generic_signature.clone());
        self.alloc(TypeData::Method(MethodType {
            flags: details.flags,
            declaring_type: details.declaring_type,
            name,
            parameter_names,
            generic_signature: details.generic_signature,
            resolved_signature,
            thrown_exceptions: details.thrown_exceptions,
        }))
    }

    pub fn variable(
        &mut self,
        owner: Option<TypeId>,
        name: &str,
        type_id: TypeId,
        flags: Flags,
    ) -> TypeId {
        let name = self.interner.intern(name);
        self.alloc(TypeData::Variable(VariableType {
            flags,
            owner,
            name,
            type_id,
        }))
    }

    // -------------------------------------------------------------------------
    // Phase two: unsafe fill-in (producer only)
    // -------------------------------------------------------------------------

    fn slot_mut(&mut self, id: TypeId) -> Result<&mut TypeData, GraphError> {
        if id.is_context_local() {
            return Err(GraphError::UnknownTypeId(id));
        }
        self.types
            .get_mut(id.0 as usize)
            .ok_or(GraphError::UnknownTypeId(id))
    }

    fn class_mut(&mut self, id: TypeId) -> Result<&mut ClassType, GraphError> {
        match self.slot_mut(id)? {
            TypeData::Class(class) => Ok(class),
            _ => Err(GraphError::NotAClass(id)),
        }
    }

    fn fill_class(&mut self, id: TypeId, details: ClassDetails) {
        if let Ok(class) = self.class_mut(id) {
            details.apply_to(class);
        }
    }

    /// Set everything a class refers to.
    pub fn unsafe_set_class(&mut self, id: TypeId, details: ClassDetails) -> Result<(), GraphError> {
        trace!(type_id = id.0, "TypeStore::unsafe_set_class");
        details.apply_to(self.class_mut(id)?);
        Ok(())
    }

    pub fn unsafe_set_flags(&mut self, id: TypeId, flags: Flags) -> Result<(), GraphError> {
        match self.slot_mut(id)? {
            TypeData::Class(class) => class.flags = flags,
            TypeData::Method(method) => method.flags = flags,
            TypeData::Variable(variable) => variable.flags = flags,
            _ => return Err(GraphError::NotAClass(id)),
        }
        Ok(())
    }

    pub fn unsafe_set_type_arguments(
        &mut self,
        id: TypeId,
        arguments: Vec<TypeId>,
    ) -> Result<(), GraphError> {
        trace!(type_id = id.0, arity = arguments.len(), "TypeStore::unsafe_set_type_arguments");
        match self.slot_mut(id)? {
            TypeData::Parameterized(p) => {
                p.arguments = arguments;
                Ok(())
            }
            _ => Err(GraphError::NotAParameterized(id)),
        }
    }

    pub fn unsafe_set_bounds(&mut self, id: TypeId, bounds: Vec<TypeId>) -> Result<(), GraphError> {
        trace!(type_id = id.0, bounds = bounds.len(), "TypeStore::unsafe_set_bounds");
        match self.slot_mut(id)? {
            TypeData::GenericTypeVariable(var) => {
                var.bounds = bounds;
                Ok(())
            }
            _ => Err(GraphError::NotAGenericTypeVariable(id)),
        }
    }

    pub fn unsafe_set_resolved_signature(
        &mut self,
        id: TypeId,
        signature: Signature,
    ) -> Result<(), GraphError> {
        match self.slot_mut(id)? {
            TypeData::Method(method) => {
                method.resolved_signature = signature;
                Ok(())
            }
            _ => Err(GraphError::NotAMethod(id)),
        }
    }

    pub fn unsafe_set_thrown_exceptions(
        &mut self,
        id: TypeId,
        thrown: Vec<TypeId>,
    ) -> Result<(), GraphError> {
        match self.slot_mut(id)? {
            TypeData::Method(method) => {
                method.thrown_exceptions = thrown;
                Ok(())
            }
            _ => Err(GraphError::NotAMethod(id)),
        }
    }

    /// Attach a type to a variable that was allocated before its type was
    /// resolved.
    pub fn unsafe_set_variable_type(&mut self, id: TypeId, type_id: TypeId) -> Result<(), GraphError> {
        match self.slot_mut(id)? {
            TypeData::Variable(variable) => {
                variable.type_id = type_id;
                Ok(())
            }
            _ => Err(GraphError::NotAVariable(id)),
        }
    }

    // -------------------------------------------------------------------------
    // Read API
    // -------------------------------------------------------------------------

    /// Look up a type. Ids from another store or a checker context read as
    /// `Unknown`.
    #[inline]
    pub fn get(&self, id: TypeId) -> &TypeData {
        self.types.get(id.0 as usize).unwrap_or(&UNKNOWN)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the producer has allocated anything beyond the built-ins.
    pub fn is_empty(&self) -> bool {
        self.types.len() == self.builtins
    }

    pub fn well_known(&self) -> &WellKnownTypes {
        &self.well_known
    }

    pub fn lookup_class(&self, fully_qualified_name: &str) -> Option<TypeId> {
        let atom = self.interner.get(fully_qualified_name)?;
        self.classes_by_name.get(&atom).copied()
    }

    /// Resolve an interned name.
    #[inline]
    pub fn name(&self, atom: Atom) -> &str {
        self.interner.resolve(atom)
    }

    /// Atom of a name, if anything in this store uses it.
    pub fn atom(&self, s: &str) -> Option<Atom> {
        self.interner.get(s)
    }

    pub fn wildcard_name(&self) -> Atom {
        self.wildcard
    }

    #[inline]
    pub fn is_wildcard(&self, var: &GenericTypeVariable) -> bool {
        var.name == self.wildcard
    }

    pub fn as_fully_qualified(&self, id: TypeId) -> Option<FullyQualified<'_>> {
        self.fully_qualified_of(self.get(id))
    }

    pub(crate) fn fully_qualified_of<'s>(&'s self, data: &'s TypeData) -> Option<FullyQualified<'s>> {
        match data {
            TypeData::Class(class) => Some(FullyQualified::Class(class)),
            TypeData::Parameterized(p) => match self.get(p.class) {
                TypeData::Class(class) => Some(FullyQualified::Parameterized(p, class)),
                _ => None,
            },
            TypeData::GenericTypeVariable(var) => Some(FullyQualified::GenericTypeVariable(var)),
            _ => None,
        }
    }

    pub fn fully_qualified_name(&self, id: TypeId) -> Option<&str> {
        self.as_fully_qualified(id).map(|fq| self.name(fq.name()))
    }
}

#[cfg(test)]
#[path = "../tests/store_tests.rs"]
mod tests;
