use thiserror::Error;

/// Errors raised by resource pools and the loader itself.
///
/// Failures inside a resource's own constructor are reported through that
/// resource's error type; see [`super::Resource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No free slot is left and the pool has reached its fixed capacity.
    #[error("resource pool for `{type_name}` is full ({capacity} slots); cannot allocate `{key}`")]
    CapacityExceeded {
        type_name: &'static str,
        capacity: usize,
        key: String,
    },

    /// A lookup was made for a type that never had a pool created.
    #[error("no resource pool exists for `{type_name}`; load a resource of this type first")]
    UnregisteredType { type_name: &'static str },

    /// The pool exists but nothing is loaded under `key`.
    #[error("resource `{key}` of type `{type_name}` is not loaded")]
    NotLoaded { type_name: &'static str, key: String },
}
