//! Logging bootstrap for hosts that do not configure their own logger.

mod init;

pub use init::{LoggingConfig, init_logging};
