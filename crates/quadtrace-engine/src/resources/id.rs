use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Small integer identifying a resource type within one [`TypeRegistry`].
///
/// Ids are handed out in first-request order starting at 0 and never change
/// for the lifetime of the registry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ResourceTypeId(u32);

impl ResourceTypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ResourceTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Maps Rust types to [`ResourceTypeId`]s, keyed by `TypeId`.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    ids: HashMap<TypeId, ResourceTypeId>,
    names: Vec<&'static str>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `T`, assigning the next free one on first request.
    pub fn id_of<T: 'static>(&mut self) -> ResourceTypeId {
        if let Some(id) = self.ids.get(&TypeId::of::<T>()) {
            return *id;
        }

        let id = ResourceTypeId(self.names.len() as u32);
        self.ids.insert(TypeId::of::<T>(), id);
        self.names.push(type_name::<T>());

        log::trace!("registered resource type {} as {id}", type_name::<T>());
        id
    }

    /// Returns the id for `T` without registering it.
    pub fn lookup<T: 'static>(&self) -> Option<ResourceTypeId> {
        self.ids.get(&TypeId::of::<T>()).copied()
    }

    /// Type name recorded when `id` was assigned.
    pub fn type_name(&self, id: ResourceTypeId) -> Option<&'static str> {
        self.names.get(id.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mesh;
    struct Texture;
    struct Sound;

    #[test]
    fn ids_follow_first_request_order() {
        let mut reg = TypeRegistry::new();
        assert_eq!(reg.id_of::<Texture>().index(), 0);
        assert_eq!(reg.id_of::<Mesh>().index(), 1);
        assert_eq!(reg.id_of::<Sound>().index(), 2);
    }

    #[test]
    fn ids_are_stable_across_queries() {
        let mut reg = TypeRegistry::new();
        let a = reg.id_of::<Mesh>();
        let b = reg.id_of::<Texture>();
        assert_eq!(reg.id_of::<Mesh>(), a);
        assert_eq!(reg.id_of::<Texture>(), b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn distinct_types_get_distinct_ids() {
        let mut reg = TypeRegistry::new();
        assert_ne!(reg.id_of::<Mesh>(), reg.id_of::<Texture>());
        // Generic instantiations are distinct types.
        assert_ne!(reg.id_of::<Vec<u8>>(), reg.id_of::<Vec<u16>>());
    }

    #[test]
    fn lookup_does_not_register() {
        let mut reg = TypeRegistry::new();
        assert!(reg.lookup::<Mesh>().is_none());
        assert!(reg.is_empty());

        let id = reg.id_of::<Mesh>();
        assert_eq!(reg.lookup::<Mesh>(), Some(id));
    }

    #[test]
    fn type_name_is_recorded() {
        let mut reg = TypeRegistry::new();
        let id = reg.id_of::<Sound>();
        assert!(reg.type_name(id).unwrap().ends_with("Sound"));
    }
}
