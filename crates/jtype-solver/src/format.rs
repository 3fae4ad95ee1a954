//! Java-like rendering of types for trace output and test messages.
//!
//! Declared type variables print by name only because their bounds may
//! refer back to them. Wildcard bounds are printed, with nesting capped at
//! `MAX_FORMAT_DEPTH`.

use crate::store::TypeStore;
use crate::types::{PrimitiveKind, TypeData, TypeId, Variance};
use jtype_common::limits::MAX_FORMAT_DEPTH;
use std::fmt;

pub struct TypeFormatter<'a> {
    store: &'a TypeStore,
    depth: u32,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(store: &'a TypeStore) -> Self {
        Self { store, depth: 0 }
    }

    pub fn format(&mut self, id: TypeId) -> String {
        let mut out = String::new();
        self.write(&mut out, id);
        out
    }

    fn write(&mut self, out: &mut String, id: TypeId) {
        if self.depth >= MAX_FORMAT_DEPTH {
            out.push_str("...");
            return;
        }
        self.depth += 1;
        self.write_data(out, id);
        self.depth -= 1;
    }

    fn write_data(&mut self, out: &mut String, id: TypeId) {
        let store = self.store;
        match store.get(id) {
            TypeData::Unknown => out.push_str("<unknown>"),
            TypeData::Primitive(PrimitiveKind::None) => out.push_str("<none>"),
            TypeData::Primitive(kind) => out.push_str(kind.keyword()),
            TypeData::Class(class) => out.push_str(store.name(class.fully_qualified_name)),
            TypeData::Parameterized(p) => {
                match store.get(p.class) {
                    TypeData::Class(class) => out.push_str(store.name(class.fully_qualified_name)),
                    _ => out.push_str("<unknown>"),
                }
                out.push('<');
                self.write_list(out, &p.arguments, ", ");
                out.push('>');
            }
            TypeData::GenericTypeVariable(var) => {
                out.push_str(store.name(var.name));
                if store.is_wildcard(var) && !var.bounds.is_empty() {
                    out.push_str(match var.variance {
                        Variance::Contravariant => " super ",
                        Variance::Covariant | Variance::Invariant => " extends ",
                    });
                    self.write_list(out, &var.bounds, " & ");
                }
            }
            TypeData::Array(array) => {
                self.write(out, array.element);
                out.push_str("[]");
            }
            TypeData::Intersection(intersection) => {
                self.write_list(out, &intersection.bounds, " & ");
            }
            TypeData::MultiCatch(multi) => self.write_list(out, &multi.throwable_types, " | "),
            TypeData::Method(method) => {
                self.write(out, method.declaring_type);
                out.push('{');
                out.push_str(store.name(method.name));
                out.push('(');
                self.write_list(out, &method.resolved_signature.parameter_types, ", ");
                out.push_str(")}");
            }
            TypeData::Variable(variable) => {
                if let Some(owner) = variable.owner {
                    self.write(out, owner);
                    out.push('{');
                    out.push_str(store.name(variable.name));
                    out.push('}');
                } else {
                    out.push_str(store.name(variable.name));
                }
            }
        }
    }

    fn write_list(&mut self, out: &mut String, ids: &[TypeId], separator: &str) {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write(out, id);
        }
    }
}

/// `Display` adapter returned by [`TypeStore::display`].
pub struct TypeDisplay<'a> {
    store: &'a TypeStore,
    id: TypeId,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TypeFormatter::new(self.store).format(self.id))
    }
}

impl TypeStore {
    pub fn display(&self, id: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { store: self, id }
    }
}
