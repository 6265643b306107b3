//! quadtrace engine crate.
//!
//! Platform + GPU runtime for full-screen shader programs, plus the typed
//! resource loader that owns those programs.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod resources;
