//! Native library returning automation strings (BSTR) to managed callers.
#![warn(missing_docs)]

pub mod api;
pub mod bstr;
pub mod common;
pub mod greeting;

pub use api::ffi::{native_greeting_free, SayHelloFromNative};
pub use bstr::{Bstr, OwnedBstr};
