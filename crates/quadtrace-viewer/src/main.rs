//! quadtrace viewer: a raytracer running in a fragment shader over a
//! full-screen quad, with a free-flying camera.
//!
//! Controls: WASD move, Space/Ctrl up/down, Shift faster, mouse looks,
//! R reloads the shader, Esc quits.

mod camera;
mod config;
mod fps;
mod viewer;

use anyhow::Result;
use winit::dpi::LogicalSize;

use quadtrace_engine::device::GpuInit;
use quadtrace_engine::logging::{init_logging, LoggingConfig};
use quadtrace_engine::window::{Runtime, RuntimeConfig};

use crate::config::ViewerConfig;
use crate::viewer::Viewer;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::from_env();
    log::info!("resource root: {:?}", config.resource_root);

    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.width, config.height),
        ..Default::default()
    };

    Runtime::run(runtime, GpuInit::default(), Viewer::new(config))
}
