//! Logging utilities.
//!
//! Centralizes logger initialization. Engine code only depends on the `log`
//! facade; `env_logger` is the backend wired up here.

mod init;

pub use init::{init_logging, LoggingConfig};
