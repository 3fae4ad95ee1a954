//! Normalizer: collapse wrapper categories to the type they carry.
//!
//! - `Method` becomes its resolved return type
//! - `Variable` becomes its declared type
//! - the `String` primitive becomes `java.lang.String`
//!
//! Every public check normalizes both operands on entry, so the recursive
//! rules never see a method, a variable or the primitive spelling of
//! `String`.

use crate::store::TypeStore;
use crate::types::{PrimitiveKind, TypeData, TypeId};
use jtype_common::limits::MAX_NORMALIZE_STEPS;
use tracing::debug;

impl TypeStore {
    /// Normalize `id`. Context-local ids are already normal.
    pub fn normalize(&self, id: TypeId) -> TypeId {
        let mut current = id;
        for _ in 0..MAX_NORMALIZE_STEPS {
            if current.is_context_local() {
                return current;
            }
            current = match self.get(current) {
                TypeData::Method(method) => method.resolved_signature.return_type,
                TypeData::Variable(variable) => variable.type_id,
                TypeData::Primitive(PrimitiveKind::String) => return self.well_known().string,
                _ => return current,
            };
        }
        debug!(type_id = id.0, "normalize: wrapper chain too long");
        TypeId::UNKNOWN
    }
}
