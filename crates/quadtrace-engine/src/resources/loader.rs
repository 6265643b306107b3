use std::any::{type_name, Any};

use super::error::ResourceError;
use super::id::{ResourceTypeId, TypeRegistry};
use super::pool::{ResourcePool, SlotIndex, DEFAULT_CAPACITY};

/// A type the loader can construct from one or two files.
///
/// `Context` carries whatever the constructor needs beyond file paths (a GPU
/// device for shaders, `()` for plain data). Construction errors are reported
/// through `Error`; the loader never wraps them. Pool failures are converted
/// into `Error` through its `From<ResourceError>` impl.
pub trait Resource: Sized + 'static {
    type Context<'a>;
    type Error: From<ResourceError>;

    fn load(ctx: Self::Context<'_>, paths: &ResourcePaths) -> Result<Self, Self::Error>;
}

/// File paths handed to [`Resource::load`].
///
/// Paths reaching a resource have already been prefixed with the loader's
/// resource root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePaths {
    One(String),
    Two(String, String),
}

impl ResourcePaths {
    pub fn first(&self) -> &str {
        match self {
            ResourcePaths::One(p) | ResourcePaths::Two(p, _) => p,
        }
    }

    pub fn second(&self) -> Option<&str> {
        match self {
            ResourcePaths::One(_) => None,
            ResourcePaths::Two(_, p) => Some(p),
        }
    }

    fn prefixed(self, root: &str) -> Self {
        match self {
            ResourcePaths::One(a) => ResourcePaths::One(format!("{root}{a}")),
            ResourcePaths::Two(a, b) => {
                ResourcePaths::Two(format!("{root}{a}"), format!("{root}{b}"))
            }
        }
    }
}

impl From<&str> for ResourcePaths {
    fn from(p: &str) -> Self {
        ResourcePaths::One(p.to_owned())
    }
}

impl From<String> for ResourcePaths {
    fn from(p: String) -> Self {
        ResourcePaths::One(p)
    }
}

impl From<(&str, &str)> for ResourcePaths {
    fn from((a, b): (&str, &str)) -> Self {
        ResourcePaths::Two(a.to_owned(), b.to_owned())
    }
}

impl From<(String, String)> for ResourcePaths {
    fn from((a, b): (String, String)) -> Self {
        ResourcePaths::Two(a, b)
    }
}

/// Registry of one [`ResourcePool`] per resource type.
///
/// Pools are created on first use of their type and live as long as the
/// loader. Every relative path passed to [`ResourceLoader::load`] is prefixed
/// verbatim with the resource root (no separator is inserted).
pub struct ResourceLoader {
    root: String,
    capacity: usize,
    types: TypeRegistry,
    pools: Vec<Option<Box<dyn Any>>>,
}

impl ResourceLoader {
    pub fn new(root: impl Into<String>) -> Self {
        Self::with_capacity(root, DEFAULT_CAPACITY)
    }

    /// Creates a loader whose pools hold `capacity` slots each.
    pub fn with_capacity(root: impl Into<String>, capacity: usize) -> Self {
        Self {
            root: root.into(),
            capacity,
            types: TypeRegistry::new(),
            pools: Vec::new(),
        }
    }

    pub fn resource_root(&self) -> &str {
        &self.root
    }

    pub fn set_resource_root(&mut self, root: impl Into<String>) {
        self.root = root.into();
        log::debug!("resource root set to {:?}", self.root);
    }

    /// Prefixes `path` with the resource root.
    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    /// Id of `T` in this loader, assigned on first request.
    pub fn resource_type_id<T: 'static>(&mut self) -> ResourceTypeId {
        self.types.id_of::<T>()
    }

    /// Number of pools created so far.
    pub fn pool_count(&self) -> usize {
        self.pools.iter().filter(|p| p.is_some()).count()
    }

    /// Constructs a `T` from `paths` and stores it under `key`.
    ///
    /// Loading a key that is already present replaces its value in place; the
    /// previous value is dropped. Capacity is checked before `T` is built, so a
    /// full pool never triggers file I/O.
    pub fn load<T: Resource>(
        &mut self,
        key: &str,
        ctx: T::Context<'_>,
        paths: impl Into<ResourcePaths>,
    ) -> Result<SlotIndex, T::Error> {
        let paths = paths.into().prefixed(&self.root);

        let pool = self.pool_for::<T>();
        if !pool.has_room_for(key) {
            return Err(ResourceError::CapacityExceeded {
                type_name: type_name::<T>(),
                capacity: pool.capacity(),
                key: key.to_owned(),
            }
            .into());
        }
        let reload = pool.contains(key);

        let value = T::load(ctx, &paths)?;

        let slot = self.pool_for::<T>().insert(key, value)?;
        if reload {
            log::info!("reloaded {} `{key}` from {paths:?}", type_name::<T>());
        } else {
            log::debug!("loaded {} `{key}` into slot {slot} from {paths:?}", type_name::<T>());
        }
        Ok(slot)
    }

    /// Returns the resource stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if no `T` was ever loaded (the pool does not exist) or if `key`
    /// is not loaded. Use [`ResourceLoader::try_get`] to handle either case.
    pub fn get<T: 'static>(&self, key: &str) -> &T {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_get<T: 'static>(&self, key: &str) -> Result<&T, ResourceError> {
        self.pool::<T>()
            .ok_or(ResourceError::UnregisteredType { type_name: type_name::<T>() })?
            .get(key)
            .ok_or_else(|| ResourceError::NotLoaded {
                type_name: type_name::<T>(),
                key: key.to_owned(),
            })
    }

    pub fn get_mut<T: 'static>(&mut self, key: &str) -> Result<&mut T, ResourceError> {
        self.pool_mut::<T>()
            .ok_or(ResourceError::UnregisteredType { type_name: type_name::<T>() })?
            .get_mut(key)
            .ok_or_else(|| ResourceError::NotLoaded {
                type_name: type_name::<T>(),
                key: key.to_owned(),
            })
    }

    /// Removes `key` from `T`'s pool and returns its value.
    ///
    /// Follows [`ResourcePool::release`]: a mapped but empty slot is freed and
    /// yields `None`.
    pub fn release<T: 'static>(&mut self, key: &str) -> Option<T> {
        let pool = self.pool_mut::<T>()?;
        if !pool.contains(key) {
            return None;
        }
        let value = pool.release(key);
        log::debug!(
            "released {} `{key}`{}",
            type_name::<T>(),
            if value.is_some() { "" } else { " (slot was empty)" }
        );
        value
    }

    /// Pool for `T`, if one has been created.
    pub fn pool<T: 'static>(&self) -> Option<&ResourcePool<T>> {
        let id = self.types.lookup::<T>()?;
        self.pools.get(id.index())?.as_ref()?.downcast_ref()
    }

    fn pool_mut<T: 'static>(&mut self) -> Option<&mut ResourcePool<T>> {
        let id = self.types.lookup::<T>()?;
        self.pools.get_mut(id.index())?.as_mut()?.downcast_mut()
    }

    /// Pool for `T`, created on first request.
    pub fn pool_for<T: 'static>(&mut self) -> &mut ResourcePool<T> {
        let id = self.types.id_of::<T>();
        if self.pools.len() <= id.index() {
            self.pools.resize_with(id.index() + 1, || None);
        }

        let capacity = self.capacity;
        let name = self.types.type_name(id).unwrap_or("?");
        self.pools[id.index()]
            .get_or_insert_with(|| {
                log::debug!("created resource pool {id} for {name} ({capacity} slots)");
                let pool: Box<dyn Any> = Box::new(ResourcePool::<T>::with_capacity(capacity));
                pool
            })
            .downcast_mut()
            .expect("pool stored under a type id always has that type")
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Records the paths it was built from.
    #[derive(Debug)]
    struct Recorded {
        paths: ResourcePaths,
    }

    impl Resource for Recorded {
        type Context<'a> = ();
        type Error = ResourceError;

        fn load(_: (), paths: &ResourcePaths) -> Result<Self, Self::Error> {
            Ok(Recorded { paths: paths.clone() })
        }
    }

    /// Reads its bytes from an in-memory file table.
    #[derive(Debug)]
    struct Blob {
        bytes: Vec<u8>,
    }

    #[derive(Debug, thiserror::Error)]
    enum BlobError {
        #[error("no such file: {0}")]
        Missing(String),
        #[error(transparent)]
        Pool(#[from] ResourceError),
    }

    impl Resource for Blob {
        type Context<'a> = &'a HashMap<String, Vec<u8>>;
        type Error = BlobError;

        fn load(files: Self::Context<'_>, paths: &ResourcePaths) -> Result<Self, Self::Error> {
            let mut bytes = files
                .get(paths.first())
                .cloned()
                .ok_or_else(|| BlobError::Missing(paths.first().to_owned()))?;
            if let Some(second) = paths.second() {
                bytes.extend(
                    files
                        .get(second)
                        .ok_or_else(|| BlobError::Missing(second.to_owned()))?,
                );
            }
            Ok(Blob { bytes })
        }
    }

    fn files() -> HashMap<String, Vec<u8>> {
        let mut files = HashMap::new();
        files.insert("res/a.bin".to_string(), vec![1, 2]);
        files.insert("res/b.bin".to_string(), vec![3]);
        files
    }

    // ── paths ─────────────────────────────────────────────────────────────

    #[test]
    fn paths_are_prefixed_verbatim() {
        let mut loader = ResourceLoader::new("Resources/");
        loader.load::<Recorded>("one", (), "shader.vs").unwrap();
        loader.load::<Recorded>("two", (), ("a.vs", "b.fs")).unwrap();

        assert_eq!(
            loader.get::<Recorded>("one").paths,
            ResourcePaths::One("Resources/shader.vs".into())
        );
        assert_eq!(
            loader.get::<Recorded>("two").paths,
            ResourcePaths::Two("Resources/a.vs".into(), "Resources/b.fs".into())
        );
    }

    #[test]
    fn root_is_not_normalised() {
        let mut loader = ResourceLoader::new("assets");
        assert_eq!(loader.resolve("x.fs"), "assetsx.fs");

        loader.set_resource_root("./a/../b/");
        loader.load::<Recorded>("k", (), "c").unwrap();
        assert_eq!(loader.get::<Recorded>("k").paths.first(), "./a/../b/c");
    }

    // ── load / get ────────────────────────────────────────────────────────

    #[test]
    fn load_then_get_round_trips() {
        let files = files();
        let mut loader = ResourceLoader::new("res/");
        loader.load::<Blob>("joined", &files, ("a.bin", "b.bin")).unwrap();
        assert_eq!(loader.get::<Blob>("joined").bytes, vec![1, 2, 3]);
    }

    #[test]
    fn construction_error_is_propagated_unchanged() {
        let files = files();
        let mut loader = ResourceLoader::new("res/");
        let err = loader.load::<Blob>("k", &files, "nope.bin").unwrap_err();
        assert!(matches!(err, BlobError::Missing(ref p) if p == "res/nope.bin"));

        // A failed construction leaves nothing behind.
        let pool = loader.pool::<Blob>().unwrap();
        assert!(!pool.contains("k"));
        assert_eq!(pool.high_water(), 0);
    }

    #[test]
    fn reload_replaces_value_in_same_slot() {
        let mut files = files();
        let mut loader = ResourceLoader::new("res/");
        let first = loader.load::<Blob>("k", &files, "a.bin").unwrap();

        files.insert("res/a.bin".to_string(), vec![9]);
        let second = loader.load::<Blob>("k", &files, "a.bin").unwrap();

        assert_eq!(first, second);
        assert_eq!(loader.get::<Blob>("k").bytes, vec![9]);
        assert_eq!(loader.pool::<Blob>().unwrap().len(), 1);
    }

    #[test]
    fn get_mut_modifies_stored_value() {
        let files = files();
        let mut loader = ResourceLoader::new("res/");
        loader.load::<Blob>("k", &files, "b.bin").unwrap();
        loader.get_mut::<Blob>("k").unwrap().bytes.push(4);
        assert_eq!(loader.get::<Blob>("k").bytes, vec![3, 4]);
    }

    #[test]
    #[should_panic(expected = "no resource pool exists")]
    fn get_before_any_load_panics() {
        let loader = ResourceLoader::new("");
        let _ = loader.get::<Recorded>("anything");
    }

    #[test]
    fn try_get_reports_missing_pool_and_missing_key() {
        let mut loader = ResourceLoader::new("");
        assert!(matches!(
            loader.try_get::<Recorded>("k"),
            Err(ResourceError::UnregisteredType { .. })
        ));

        loader.load::<Recorded>("other", (), "p").unwrap();
        assert!(matches!(
            loader.try_get::<Recorded>("k"),
            Err(ResourceError::NotLoaded { ref key, .. }) if key == "k"
        ));
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn default_capacity_loads_then_fails() {
        let mut loader = ResourceLoader::new("");
        for i in 0..DEFAULT_CAPACITY {
            loader.load::<Recorded>(&format!("r{i}"), (), "p").unwrap();
        }

        let err = loader.load::<Recorded>("overflow", (), "p").unwrap_err();
        assert!(matches!(
            err,
            ResourceError::CapacityExceeded { capacity: DEFAULT_CAPACITY, .. }
        ));

        // Reloading an existing key is still allowed when full.
        assert!(loader.load::<Recorded>("r0", (), "q").is_ok());
    }

    #[test]
    fn capacity_error_converts_into_resource_error_type() {
        let files = files();
        let mut loader = ResourceLoader::with_capacity("res/", 1);
        loader.load::<Blob>("a", &files, "a.bin").unwrap();
        let err = loader.load::<Blob>("b", &files, "b.bin").unwrap_err();
        assert!(matches!(err, BlobError::Pool(ResourceError::CapacityExceeded { .. })));
    }

    #[test]
    fn release_frees_slot_for_next_load() {
        let mut loader = ResourceLoader::with_capacity("", 2);
        assert_eq!(loader.load::<Recorded>("a", (), "p").unwrap(), 0);
        assert_eq!(loader.load::<Recorded>("b", (), "p").unwrap(), 1);
        assert!(loader.load::<Recorded>("c", (), "p").is_err());

        assert!(loader.release::<Recorded>("a").is_some());
        assert_eq!(loader.load::<Recorded>("d", (), "p").unwrap(), 0);
        assert_eq!(loader.pool::<Recorded>().unwrap().index_of("d"), Some(0));
        assert!(loader.try_get::<Recorded>("a").is_err());
    }

    // ── pools / type ids ──────────────────────────────────────────────────

    #[test]
    fn pools_are_created_lazily_per_type() {
        let files = files();
        let mut loader = ResourceLoader::new("res/");
        assert_eq!(loader.pool_count(), 0);
        assert!(loader.pool::<Recorded>().is_none());

        loader.load::<Recorded>("r", (), "p").unwrap();
        loader.load::<Blob>("b", &files, "a.bin").unwrap();
        assert_eq!(loader.pool_count(), 2);

        let _ = loader.pool_for::<u64>();
        assert_eq!(loader.pool_count(), 3);
        assert_eq!(loader.pool::<u64>().unwrap().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn type_ids_match_first_use_order() {
        let files = files();
        let mut loader = ResourceLoader::new("res/");
        loader.load::<Blob>("b", &files, "a.bin").unwrap();
        loader.load::<Recorded>("r", (), "p").unwrap();

        assert_eq!(loader.resource_type_id::<Blob>().index(), 0);
        assert_eq!(loader.resource_type_id::<Recorded>().index(), 1);
        assert_eq!(loader.resource_type_id::<Blob>().index(), 0);
    }

    #[test]
    fn release_of_reserved_key_frees_slot() {
        let mut loader = ResourceLoader::with_capacity("", 1);
        loader.pool_for::<Recorded>().slot_for("reserved").unwrap();

        assert!(loader.release::<Recorded>("reserved").is_none());
        assert_eq!(loader.load::<Recorded>("real", (), "p").unwrap(), 0);
    }

    #[test]
    fn failed_reload_keeps_previous_value() {
        let mut files = files();
        let mut loader = ResourceLoader::new("res/");
        loader.load::<Blob>("k", &files, "a.bin").unwrap();

        files.remove("res/a.bin");
        assert!(loader.load::<Blob>("k", &files, "a.bin").is_err());
        assert_eq!(loader.get::<Blob>("k").bytes, vec![1, 2]);
    }

    #[test]
    fn release_of_unknown_type_is_none() {
        let mut loader = ResourceLoader::new("");
        assert!(loader.release::<Recorded>("x").is_none());
        assert_eq!(loader.pool_count(), 0);
    }
}
