//! Length-prefixed UTF-16 automation strings (BSTR).
//!
//! Building blocks for the export seam: the binary layout, the allocator
//! seam with its platform implementation, and the owned handle.

pub mod alloc;
pub mod domain;
pub mod layout;
mod sys;
#[cfg(test)]
pub mod testing;

pub use alloc::{BstrAllocator, SystemAllocator};
pub use domain::{Bstr, OwnedBstr};
