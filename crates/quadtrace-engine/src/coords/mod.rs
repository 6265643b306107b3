//! Coordinate and camera types shared by the runtime and renderers.
//!
//! World space is right-handed with +Y up; the camera looks down -Z when its
//! rotation is zero.

mod transform;
mod viewport;

pub use transform::Transform;
pub use viewport::Viewport;
