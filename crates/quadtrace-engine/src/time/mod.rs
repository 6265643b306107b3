//! Time subsystem.
//!
//! Provides testable frame timing without coupling to the runtime.
//! The runtime owns one `FrameClock` and calls `tick()` once per redraw;
//! applications read the resulting `FrameTime` from their frame context.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
