//! Producing exported strings.

use crate::bstr::{BstrAllocator, OwnedBstr, SystemAllocator};
use crate::common::config::ExportCfg;
use crate::common::error::ExportResult;

/// One string export, parameterized by the literal it returns.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StringExport {
    cfg: ExportCfg,
}

/// The greeting behind `SayHelloFromNative`.
pub const GREETING: StringExport = StringExport::new(ExportCfg::GREETING);

impl StringExport {
    /// An export returning the literal in `cfg`.
    pub const fn new(cfg: ExportCfg) -> Self {
        Self { cfg }
    }

    /// Allocate a fresh, independently owned copy of the literal.
    pub fn produce(&self) -> ExportResult<OwnedBstr> {
        self.produce_in(SystemAllocator)
    }

    /// Like [`StringExport::produce`], drawing the allocation from `alloc`.
    pub fn produce_in<A: BstrAllocator>(&self, alloc: A) -> ExportResult<OwnedBstr<A>> {
        OwnedBstr::from_text_in(self.cfg.text, alloc)
    }
}

/// Allocate the greeting as a system BSTR. Backs `SayHelloFromNative`.
pub fn produce_greeting() -> ExportResult<OwnedBstr> {
    GREETING.produce()
}
