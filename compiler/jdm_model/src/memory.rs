//! Thread-safe in-memory program store.
//!
//! Types map to their members in declaration order. Readers take a shared
//! lock for one lookup and clone the declaration out, so no lock is held
//! once a resolving query has its snapshot.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::handle::{MethodHandle, TypeRef};
use crate::store::{Declaration, ProgramStore, StoreError};

struct Member {
    handle: MethodHandle,
    declaration: Declaration,
}

/// Store backed by a hash map behind a read-write lock.
///
/// Mutations go through `&self`, so one store can be shared (e.g. in an
/// `Arc`) between threads that resolve handles and a thread that edits.
#[derive(Default)]
pub struct InMemoryStore {
    types: RwLock<FxHashMap<TypeRef, Vec<Member>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty type. Returns `false` if it already existed.
    pub fn add_type(&self, ty: TypeRef) -> bool {
        let mut types = self.types.write();
        if types.contains_key(&ty) {
            return false;
        }
        tracing::debug!(%ty, "type added");
        types.insert(ty, Vec::new());
        true
    }

    pub fn contains_type(&self, ty: &TypeRef) -> bool {
        self.types.read().contains_key(ty)
    }

    /// Declare a member, creating its enclosing type if needed.
    ///
    /// A member with the same identity is replaced in place, keeping its
    /// position in the enumeration order.
    pub fn declare(&self, handle: MethodHandle, declaration: Declaration) -> MethodHandle {
        let mut types = self.types.write();
        let members = types.entry(handle.enclosing_type().clone()).or_default();
        if let Some(member) = members.iter_mut().find(|m| m.handle == handle) {
            member.declaration = declaration;
        } else {
            members.push(Member {
                handle: handle.clone(),
                declaration,
            });
        }
        tracing::debug!(method = %handle, "member declared");
        handle
    }

    /// Handles for every member of `ty`, in declaration order. Empty when
    /// the type is unknown.
    pub fn members(&self, ty: &TypeRef) -> Vec<MethodHandle> {
        self.types.read().get(ty).map_or_else(Vec::new, |members| {
            members.iter().map(|m| m.handle.clone()).collect()
        })
    }

    /// Swap the declaration behind an existing member. Returns `false` when
    /// no member matches.
    pub fn replace(&self, handle: &MethodHandle, declaration: Declaration) -> bool {
        let mut types = self.types.write();
        let Some(member) = types
            .get_mut(handle.enclosing_type())
            .and_then(|members| members.iter_mut().find(|m| &m.handle == handle))
        else {
            return false;
        };
        member.declaration = declaration;
        tracing::debug!(method = %handle, "member replaced");
        true
    }

    pub fn remove_member(&self, handle: &MethodHandle) -> bool {
        let mut types = self.types.write();
        let Some(members) = types.get_mut(handle.enclosing_type()) else {
            return false;
        };
        let before = members.len();
        members.retain(|m| &m.handle != handle);
        let removed = members.len() != before;
        if removed {
            tracing::debug!(method = %handle, "member removed");
        }
        removed
    }

    /// Remove a type and all its members.
    pub fn remove_type(&self, ty: &TypeRef) -> bool {
        let removed = self.types.write().remove(ty).is_some();
        if removed {
            tracing::debug!(%ty, "type removed");
        }
        removed
    }
}

impl ProgramStore for InMemoryStore {
    fn lookup_declaration(
        &self,
        enclosing: &TypeRef,
        name: &str,
        parameter_types: &[String],
    ) -> Result<Option<Declaration>, StoreError> {
        let types = self.types.read();
        let Some(members) = types.get(enclosing) else {
            tracing::trace!(%enclosing, "enclosing type not found");
            return Ok(None);
        };
        Ok(members
            .iter()
            .find(|m| {
                m.handle.element_name() == name
                    && m.handle.raw_parameter_signatures() == parameter_types
            })
            .map(|m| m.declaration.clone()))
    }
}
