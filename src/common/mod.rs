//! Shared utilities used by the string and export modules.
pub mod config;
pub mod error;
pub mod log;

pub use config::ExportCfg;
pub use error::{ExportError, ExportResult};
