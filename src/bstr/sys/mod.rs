//! Platform allocation primitives for BSTR blocks.

#[cfg(not(windows))]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
pub use unix::{allocate, release};
#[cfg(windows)]
pub use windows::{allocate, release};
