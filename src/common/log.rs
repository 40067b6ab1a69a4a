//! Logging helpers for the export seam, one line per event.
//!
//! Records go through the `log` facade only. The library never installs a
//! logger, and a `cdylib` carries its own copy of `log`, so a managed host
//! cannot install one for it either: outside this crate's own tests these
//! records are dropped.

use log::Level;

/// Target used for every record emitted by this crate.
pub const TARGET: &str = "native_greeting";

/// Emit a single event line in the `ev=... sym=... units=...` shape.
pub fn log_event(level: Level, event: &str, symbol: &str, units: usize) {
    log::log!(target: TARGET, level, "ev={event} sym={symbol} units={units}");
}

/// A string left the library; ownership now sits with the caller.
pub fn exported(symbol: &str, units: usize) {
    log_event(Level::Trace, "exported", symbol, units);
}

/// The allocator refused the request and the null sentinel is returned.
pub fn allocation_failed(symbol: &str, units: usize) {
    log_event(Level::Warn, "alloc_failed", symbol, units);
}

/// A panic was stopped at the boundary instead of unwinding into the caller.
pub fn panic_contained(symbol: &str) {
    log::error!(target: TARGET, "ev=panic_contained sym={symbol}");
}
