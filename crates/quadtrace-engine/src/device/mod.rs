//! GPU device and window surface.
//!
//! One [`Gpu`] per window: it owns the wgpu device and queue, keeps the
//! surface configured across resizes, and hands out one [`GpuFrame`] per
//! redraw.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
