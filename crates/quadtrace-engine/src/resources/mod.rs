//! Resource subsystem.
//!
//! Responsibilities:
//! - assign a stable small integer to every resource type (`TypeRegistry`)
//! - store same-typed resources in fixed-capacity, string-keyed slot pools
//! - construct resources from files under a configurable resource root
//!
//! The loader is an explicit context object owned by the application; there is
//! no process-wide registry.

mod error;
mod id;
mod loader;
mod pool;

pub use error::ResourceError;
pub use id::{ResourceTypeId, TypeRegistry};
pub use loader::{Resource, ResourceLoader, ResourcePaths};
pub use pool::{ResourcePool, SlotIndex, DEFAULT_CAPACITY};
