use std::sync::Once;

use log::LevelFilter;

/// GPU stack modules that are noisy at `info`.
const GPU_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Logger settings for binaries.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string; takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,

    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,

    /// Cap for the GPU stack's own logging under the default level.
    pub gpu_level: LevelFilter,

    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            gpu_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
                for module in GPU_MODULES {
                    builder.filter_module(module, config.gpu_level);
                }
            }
        }

        builder.write_style(config.write_style);

        // Leaves a logger installed by a test harness in place.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
