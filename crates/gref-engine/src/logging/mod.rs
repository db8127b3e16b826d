//! Logging setup.
//!
//! The engine itself only talks to the `log` facade; this module installs
//! `env_logger` as the backend for binaries that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
