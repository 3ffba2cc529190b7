//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only talks to the `log`
//! facade; the backend is chosen here.

mod init;

pub use init::{init_logging, LoggingConfig};
