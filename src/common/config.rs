//! Compile-time configuration for exported strings.
//!
//! Nothing is read from the environment: an export's behavior is fixed when the
//! library is built.

/// Snapshot of the values one string export is built from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ExportCfg {
    /// Literal handed to the caller on every call.
    pub text: &'static str,
}

impl ExportCfg {
    /// The greeting returned by `SayHelloFromNative`.
    pub const GREETING: Self = Self::new("Hello");

    /// Configuration for an export returning `text`.
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }
}
