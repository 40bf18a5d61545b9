//! Logging utilities.
//!
//! Skins log through the `log` facade; this module only wires up the
//! `env_logger` backend for binaries and tests that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
