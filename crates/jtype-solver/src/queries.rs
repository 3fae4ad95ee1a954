//! Name-based convenience queries.
//!
//! Small predicates a consumer of the type graph reaches for next to the two
//! relation checks: "is this a `java.util.List`?", "what does `Integer`
//! unbox to?", "does this type inherit from `java.io.Closeable`?".

use crate::relations::RelationChecker;
use crate::store::TypeStore;
use crate::types::{PrimitiveKind, TypeData, TypeId};
use rustc_hash::FxHashSet;
use smallvec::{SmallVec, smallvec};

/// `$` (binary nested-class separator) and `.` (source separator) compare
/// equal.
#[inline]
pub(crate) fn canonical_separator(c: char) -> char {
    if c == '$' { '.' } else { c }
}

/// Fully-qualified name equality, lenient about the nested-class separator:
/// `java.util.Map$Entry` equals `java.util.Map.Entry`.
pub fn fully_qualified_names_are_equal(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .chars()
            .map(canonical_separator)
            .eq(b.chars().map(canonical_separator))
}

impl TypeStore {
    /// Whether `id` normalizes to a raw or parameterized class named `fqn`.
    pub fn is_of_class_type(&self, id: TypeId, fully_qualified_name: &str) -> bool {
        let id = self.normalize(id);
        match self.get(id) {
            TypeData::Class(_) | TypeData::Parameterized(_) => self
                .fully_qualified_name(id)
                .is_some_and(|name| fully_qualified_names_are_equal(name, fully_qualified_name)),
            _ => false,
        }
    }

    pub fn is_object(&self, id: TypeId) -> bool {
        self.is_of_class_type(id, "java.lang.Object")
    }

    /// `java.lang.String`, in either its class or its primitive spelling.
    pub fn is_string(&self, id: TypeId) -> bool {
        self.is_of_class_type(id, "java.lang.String")
    }

    /// The wrapper class for `kind`; `None` for `null` and "no type".
    pub fn box_primitive(&self, kind: PrimitiveKind) -> Option<TypeId> {
        self.lookup_class(kind.boxed_name()?)
    }

    /// The primitive a wrapper class unboxes to.
    pub fn unbox(&self, id: TypeId) -> Option<PrimitiveKind> {
        let id = self.normalize(id);
        match self.get(id) {
            TypeData::Class(_) | TypeData::Parameterized(_) => {
                PrimitiveKind::from_boxed_name(self.fully_qualified_name(id)?)
            }
            _ => None,
        }
    }
}

impl RelationChecker<'_, '_> {
    /// Whether `from` is, or inherits from, the class named
    /// `fully_qualified_name`. Type arguments are ignored.
    pub(crate) fn inherits_from_name(&self, fully_qualified_name: &str, from: TypeId) -> bool {
        let store = self.store;
        let object = store.well_known().object;
        let mut pending: SmallVec<[TypeId; 8]> = smallvec![from];
        let mut seen = FxHashSet::default();

        while let Some(id) = pending.pop() {
            let id = self.normalize(id);
            if id.is_unknown() || !seen.insert(id) {
                continue;
            }
            let data = self.data(id);
            match &*data {
                TypeData::Primitive(kind) => pending.extend(store.box_primitive(*kind)),
                TypeData::Class(_) | TypeData::Parameterized(_) => {
                    let Some(fq) = store.fully_qualified_of(&data) else {
                        continue;
                    };
                    if fully_qualified_names_are_equal(store.name(fq.name()), fully_qualified_name)
                    {
                        return true;
                    }
                    // Without a declared supertype every class still ends at Object.
                    pending.push(fq.supertype().unwrap_or(object));
                    pending.extend(fq.interfaces().iter().copied());
                }
                TypeData::GenericTypeVariable(var) => {
                    if var.bounds.is_empty() {
                        pending.push(object);
                    } else {
                        pending.extend(var.bounds.iter().copied());
                    }
                }
                TypeData::Intersection(intersection) => {
                    pending.extend(intersection.bounds.iter().copied());
                }
                TypeData::MultiCatch(multi) => {
                    if !multi.throwable_types.is_empty()
                        && multi
                            .throwable_types
                            .iter()
                            .all(|&alternative| self.inherits_from_name(fully_qualified_name, alternative))
                    {
                        return true;
                    }
                }
                TypeData::Array(_) => {
                    if ["java.lang.Object", "java.io.Serializable", "java.lang.Cloneable"]
                        .iter()
                        .any(|name| fully_qualified_names_are_equal(name, fully_qualified_name))
                    {
                        return true;
                    }
                }
                TypeData::Unknown | TypeData::Method(_) | TypeData::Variable(_) => {}
            }
        }
        false
    }
}
