//! Type graph data model.
//!
//! Every type in the graph is a [`TypeData`] stored in a
//! [`TypeStore`](crate::TypeStore) and addressed by a [`TypeId`]. Reference
//! identity is `TypeId` equality; the partial, name-based equality the Java
//! model defines lives in [`TypeStore::type_equals`](crate::TypeStore::type_equals).
//!
//! Graphs may be cyclic (`T extends Comparable<T>`): a type only ever refers
//! to other types by id, so building one is a two-phase affair (allocate the
//! shell, then fill in the references) and nothing in this module recurses.

use bitflags::bitflags;
use jtype_common::Atom;

// =============================================================================
// TypeId
// =============================================================================

/// Handle to a type in a [`TypeStore`](crate::TypeStore).
///
/// The first thirteen ids are fixed: [`TypeId::UNKNOWN`] followed by one
/// singleton per [`PrimitiveKind`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const UNKNOWN: TypeId = TypeId(0);
    pub const BOOLEAN: TypeId = TypeId(1);
    pub const BYTE: TypeId = TypeId(2);
    pub const CHAR: TypeId = TypeId(3);
    pub const DOUBLE: TypeId = TypeId(4);
    pub const FLOAT: TypeId = TypeId(5);
    pub const INT: TypeId = TypeId(6);
    pub const LONG: TypeId = TypeId(7);
    pub const SHORT: TypeId = TypeId(8);
    pub const VOID: TypeId = TypeId(9);
    pub const STRING: TypeId = TypeId(10);
    pub const NULL: TypeId = TypeId(11);
    pub const NONE: TypeId = TypeId(12);

    /// First id handed out for non-primitive types.
    pub const FIRST_ALLOCATED: u32 = 13;

    /// Tag bit for types synthesized by a checker context rather than stored
    /// in the shared graph.
    const CONTEXT_LOCAL_BIT: u32 = 1 << 31;

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    /// Whether this id is one of the primitive singletons.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 >= Self::BOOLEAN.0 && self.0 <= Self::NONE.0
    }

    #[inline]
    pub const fn is_context_local(self) -> bool {
        (self.0 & Self::CONTEXT_LOCAL_BIT) != 0
    }

    pub(crate) const fn new_context_local(index: u32) -> Self {
        Self(Self::CONTEXT_LOCAL_BIT | index)
    }

    pub(crate) const fn context_local_index(self) -> Option<usize> {
        if !self.is_context_local() {
            return None;
        }
        Some((self.0 & !Self::CONTEXT_LOCAL_BIT) as usize)
    }
}

// =============================================================================
// Primitives
// =============================================================================

/// The closed set of Java primitive kinds.
///
/// `String` is dual-natured: the front end may report a string literal as a
/// primitive, but every check treats it as `java.lang.String`. `Null` is the
/// type of the `null` literal and `None` marks "no type" (for example the
/// return type of a constructor).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
    String,
    Null,
    None,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 12] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Short,
        PrimitiveKind::Void,
        PrimitiveKind::String,
        PrimitiveKind::Null,
        PrimitiveKind::None,
    ];

    /// The singleton id of this primitive.
    pub const fn type_id(self) -> TypeId {
        match self {
            PrimitiveKind::Boolean => TypeId::BOOLEAN,
            PrimitiveKind::Byte => TypeId::BYTE,
            PrimitiveKind::Char => TypeId::CHAR,
            PrimitiveKind::Double => TypeId::DOUBLE,
            PrimitiveKind::Float => TypeId::FLOAT,
            PrimitiveKind::Int => TypeId::INT,
            PrimitiveKind::Long => TypeId::LONG,
            PrimitiveKind::Short => TypeId::SHORT,
            PrimitiveKind::Void => TypeId::VOID,
            PrimitiveKind::String => TypeId::STRING,
            PrimitiveKind::Null => TypeId::NULL,
            PrimitiveKind::None => TypeId::NONE,
        }
    }

    pub fn from_type_id(id: TypeId) -> Option<Self> {
        if !id.is_primitive() {
            return None;
        }
        Self::ALL.get((id.0 - TypeId::BOOLEAN.0) as usize).copied()
    }

    /// Source keyword. `None` has no keyword and maps to the empty string.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Void => "void",
            PrimitiveKind::String => "String",
            PrimitiveKind::Null => "null",
            PrimitiveKind::None => "",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Fully-qualified name of the class this primitive boxes to.
    pub const fn boxed_name(self) -> Option<&'static str> {
        match self {
            PrimitiveKind::Boolean => Some("java.lang.Boolean"),
            PrimitiveKind::Byte => Some("java.lang.Byte"),
            PrimitiveKind::Char => Some("java.lang.Character"),
            PrimitiveKind::Double => Some("java.lang.Double"),
            PrimitiveKind::Float => Some("java.lang.Float"),
            PrimitiveKind::Int => Some("java.lang.Integer"),
            PrimitiveKind::Long => Some("java.lang.Long"),
            PrimitiveKind::Short => Some("java.lang.Short"),
            PrimitiveKind::Void => Some("java.lang.Void"),
            PrimitiveKind::String => Some("java.lang.String"),
            PrimitiveKind::Null | PrimitiveKind::None => None,
        }
    }

    /// Unboxing: the primitive a wrapper class holds.
    ///
    /// `java.lang.String` is deliberately absent: it is the canonical form
    /// of the `String` primitive, not a wrapper around it.
    pub fn from_boxed_name(name: &str) -> Option<Self> {
        match name {
            "java.lang.String" => None,
            _ => Self::ALL
                .into_iter()
                .find(|kind| kind.boxed_name() == Some(name)),
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::Char
                | PrimitiveKind::Double
                | PrimitiveKind::Float
                | PrimitiveKind::Int
                | PrimitiveKind::Long
                | PrimitiveKind::Short
        )
    }

    /// Primitive widening: can a value of kind `from` be stored in `self`?
    ///
    /// | to      | accepts (besides itself)          |
    /// |---------|-----------------------------------|
    /// | short   | byte, char                        |
    /// | int     | byte, char, short                 |
    /// | long    | byte, char, short, int            |
    /// | float   | byte, char, short, int, long      |
    /// | double  | every kind except boolean         |
    ///
    /// Every other kind only accepts itself. Relation checks answer `null`
    /// and `String` sources before consulting this table.
    pub const fn is_assignable_from(self, from: PrimitiveKind) -> bool {
        use PrimitiveKind::*;
        if self as u8 == from as u8 {
            return true;
        }
        match self {
            Short => matches!(from, Byte | Char),
            Int => matches!(from, Byte | Char | Short),
            Long => matches!(from, Byte | Char | Short | Int),
            Float => matches!(from, Byte | Char | Short | Int | Long),
            Double => !matches!(from, Boolean),
            Boolean | Byte | Char | Void | String | Null | None => false,
        }
    }
}

// =============================================================================
// Flags, kinds, variance
// =============================================================================

bitflags! {
    /// Java modifiers carried by classes, methods and variables.
    ///
    /// Bit positions follow the class-file access flags where one exists.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const SYNCHRONIZED = 1 << 5;
        const VOLATILE = 1 << 6;
        const TRANSIENT = 1 << 7;
        const NATIVE = 1 << 8;
        const ABSTRACT = 1 << 10;
        const STRICTFP = 1 << 11;
        const VARARGS = 1 << 12;
        const DEFAULT = 1 << 13;
        const SEALED = 1 << 14;
        const NON_SEALED = 1 << 15;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassKind {
    #[default]
    Class,
    Enum,
    Interface,
    Annotation,
    Record,
    Value,
}

/// Variance of a generic type variable.
///
/// Wildcards carry it explicitly: `? extends X` is covariant, `? super X`
/// contravariant. Declared variables (`T extends X`) and `?` are invariant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variance {
    #[default]
    Invariant,
    Covariant,
    Contravariant,
}

// =============================================================================
// Type categories
// =============================================================================

/// A class, interface, enum, record or annotation declaration.
///
/// Equality is by fully-qualified name only; everything else is filled in
/// after allocation by the producer.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassType {
    pub flags: Flags,
    pub fully_qualified_name: Atom,
    pub kind: ClassKind,
    /// Declared type parameters (each a `GenericTypeVariable`).
    pub type_parameters: Vec<TypeId>,
    pub supertype: Option<TypeId>,
    pub owning_class: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
    /// Fields (each a `Variable`).
    pub members: Vec<TypeId>,
    /// Methods (each a `Method`).
    pub methods: Vec<TypeId>,
}

/// A generic class applied to type arguments (`List<String>`).
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterizedType {
    /// The underlying `Class`.
    pub class: TypeId,
    pub arguments: Vec<TypeId>,
}

/// A type variable or wildcard.
///
/// The name `?` marks a wildcard. Empty bounds mean an implicit `Object`
/// bound for a declared variable, or an unbounded wildcard.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericTypeVariable {
    pub name: Atom,
    pub variance: Variance,
    pub bounds: Vec<TypeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayType {
    pub element: TypeId,
}

/// Multi-bound view of a type variable: a value must satisfy every bound.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionType {
    pub bounds: Vec<TypeId>,
}

/// The caught type of a multi-catch clause: any one of the alternatives.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiCatchType {
    pub throwable_types: Vec<TypeId>,
}

/// Return and parameter types of a method.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signature {
    pub return_type: TypeId,
    pub parameter_types: Vec<TypeId>,
}

impl Signature {
    pub fn new(return_type: TypeId, parameter_types: Vec<TypeId>) -> Self {
        Self {
            return_type,
            parameter_types,
        }
    }
}

/// A method as declared (`generic_signature`) and as seen at one call site
/// after substitution (`resolved_signature`).
#[derive(Clone, Debug, PartialEq)]
pub struct MethodType {
    pub flags: Flags,
    pub declaring_type: TypeId,
    pub name: Atom,
    pub parameter_names: Vec<Atom>,
    pub generic_signature: Signature,
    pub resolved_signature: Signature,
    pub thrown_exceptions: Vec<TypeId>,
}

/// A field, local or parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableType {
    pub flags: Flags,
    pub owner: Option<TypeId>,
    pub name: Atom,
    pub type_id: TypeId,
}

/// One node of the type graph.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeData {
    Unknown,
    Primitive(PrimitiveKind),
    Class(ClassType),
    Parameterized(ParameterizedType),
    GenericTypeVariable(GenericTypeVariable),
    Array(ArrayType),
    Intersection(IntersectionType),
    MultiCatch(MultiCatchType),
    Method(MethodType),
    Variable(VariableType),
}

impl TypeData {
    /// Short category name used in trace output.
    pub const fn category(&self) -> &'static str {
        match self {
            TypeData::Unknown => "unknown",
            TypeData::Primitive(_) => "primitive",
            TypeData::Class(_) => "class",
            TypeData::Parameterized(_) => "parameterized",
            TypeData::GenericTypeVariable(_) => "generic",
            TypeData::Array(_) => "array",
            TypeData::Intersection(_) => "intersection",
            TypeData::MultiCatch(_) => "multi-catch",
            TypeData::Method(_) => "method",
            TypeData::Variable(_) => "variable",
        }
    }

    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, TypeData::Unknown)
    }

    #[inline]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, TypeData::Primitive(_))
    }

    /// Class, Parameterized and GenericTypeVariable share the
    /// fully-qualified capability.
    #[inline]
    pub const fn is_fully_qualified(&self) -> bool {
        matches!(
            self,
            TypeData::Class(_) | TypeData::Parameterized(_) | TypeData::GenericTypeVariable(_)
        )
    }

    pub const fn as_generic_type_variable(&self) -> Option<&GenericTypeVariable> {
        match self {
            TypeData::GenericTypeVariable(var) => Some(var),
            _ => None,
        }
    }
}

// =============================================================================
// FullyQualified view
// =============================================================================

/// Borrowed view over the fully-qualified capability.
///
/// A parameterized type answers every question through its underlying class
/// except [`type_arguments`](Self::type_arguments). A type variable's name is
/// its fully-qualified name and it has no supertype, interfaces or members.
#[derive(Copy, Clone, Debug)]
pub enum FullyQualified<'a> {
    Class(&'a ClassType),
    Parameterized(&'a ParameterizedType, &'a ClassType),
    GenericTypeVariable(&'a GenericTypeVariable),
}

impl<'a> FullyQualified<'a> {
    pub fn name(self) -> Atom {
        match self {
            FullyQualified::Class(class) | FullyQualified::Parameterized(_, class) => {
                class.fully_qualified_name
            }
            FullyQualified::GenericTypeVariable(var) => var.name,
        }
    }

    pub fn class(self) -> Option<&'a ClassType> {
        match self {
            FullyQualified::Class(class) | FullyQualified::Parameterized(_, class) => Some(class),
            FullyQualified::GenericTypeVariable(_) => None,
        }
    }

    pub fn flags(self) -> Flags {
        self.class().map(|c| c.flags).unwrap_or_default()
    }

    pub fn kind(self) -> ClassKind {
        self.class().map(|c| c.kind).unwrap_or_default()
    }

    pub fn supertype(self) -> Option<TypeId> {
        self.class().and_then(|c| c.supertype)
    }

    pub fn owning_class(self) -> Option<TypeId> {
        self.class().and_then(|c| c.owning_class)
    }

    pub fn interfaces(self) -> &'a [TypeId] {
        self.class().map(|c| c.interfaces.as_slice()).unwrap_or(&[])
    }

    pub fn members(self) -> &'a [TypeId] {
        self.class().map(|c| c.members.as_slice()).unwrap_or(&[])
    }

    pub fn methods(self) -> &'a [TypeId] {
        self.class().map(|c| c.methods.as_slice()).unwrap_or(&[])
    }

    /// Arguments of a parameterized type; empty for raw classes and
    /// type variables.
    pub fn type_arguments(self) -> &'a [TypeId] {
        match self {
            FullyQualified::Parameterized(p, _) => &p.arguments,
            _ => &[],
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
