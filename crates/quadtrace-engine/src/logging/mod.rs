//! Logger setup. Library code only uses the `log` macros.

mod init;

pub use init::{init_logging, LoggingConfig};
