//! GPU rendering subsystem.
//!
//! The only geometry is a full-screen quad; everything visible is computed by
//! the fragment stage of a [`Shader`] loaded through the resource loader.
//!
//! Convention:
//! - quad vertices are already in NDC (`-1..1`), no transform is applied
//! - per-frame values reach shaders through a single [`FrameUniforms`] block
//!   at `@group(0) @binding(0)`

mod ctx;
mod quad;
mod shader;
mod uniforms;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::ScreenQuad;
pub use shader::{Shader, ShaderCtx, ShaderError, FRAGMENT_ENTRY, VERTEX_ENTRY};
pub use uniforms::FrameUniforms;
