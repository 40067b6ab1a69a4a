//! String exports: fixed literals handed to foreign callers as BSTRs.

pub mod service;

pub use service::{produce_greeting, StringExport, GREETING};
