//! Owned automation string handed across the export boundary.

use std::fmt;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;
use std::slice;

use crate::common::error::{ExportError, ExportResult};

use super::alloc::{BstrAllocator, SystemAllocator};
use super::layout;

/// Raw BSTR as seen by foreign code: a pointer to the first UTF-16 code unit.
pub type Bstr = *const u16;

/// A BSTR owned by this side of the boundary.
///
/// The allocation is released exactly once, on drop, through the allocator
/// it came from. [`OwnedBstr::into_raw`] gives ownership away for good.
pub struct OwnedBstr<A: BstrAllocator = SystemAllocator> {
    ptr: NonNull<u16>,
    alloc: A,
}

// The payload is exclusively owned and never mutated after construction.
unsafe impl<A: BstrAllocator + Send> Send for OwnedBstr<A> {}
unsafe impl<A: BstrAllocator + Sync> Sync for OwnedBstr<A> {}

impl OwnedBstr {
    /// Encode `text` into a new system BSTR.
    #[cfg(test)]
    pub fn from_text(text: &str) -> ExportResult<Self> {
        Self::from_text_in(text, SystemAllocator)
    }

    /// Take ownership of a BSTR allocated by the system allocator.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live BSTR from the system allocator that nobody
    /// else will release.
    pub unsafe fn from_raw(raw: Bstr) -> Option<Self> {
        Self::from_raw_in(raw, SystemAllocator)
    }
}

impl<A: BstrAllocator> OwnedBstr<A> {
    /// Encode `text` into a BSTR from `alloc` with a single allocation.
    pub fn from_text_in(text: &str, alloc: A) -> ExportResult<Self> {
        let units = text.encode_utf16().count();
        unsafe { Self::from_units_in(units, text.encode_utf16(), alloc) }
    }

    /// Copy `encoded` into a BSTR of `units` code units from `alloc`.
    ///
    /// Lengths the prefix cannot describe fail before `alloc` is asked.
    ///
    /// # Safety
    ///
    /// `encoded` must yield at least `units` code units.
    unsafe fn from_units_in(
        units: usize,
        encoded: impl Iterator<Item = u16>,
        alloc: A,
    ) -> ExportResult<Self> {
        let len = layout::checked_units(units).ok_or(ExportError::allocation_failure(units))?;
        let ptr = alloc
            .allocate(len)
            .ok_or(ExportError::allocation_failure(units))?;
        for (idx, unit) in encoded.take(units).enumerate() {
            ptr.as_ptr().add(idx).write(unit);
        }
        Ok(Self { ptr, alloc })
    }

    /// Take ownership of a BSTR allocated by `alloc`.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live BSTR from `alloc` that nobody else will
    /// release.
    pub unsafe fn from_raw_in(raw: Bstr, alloc: A) -> Option<Self> {
        NonNull::new(raw.cast_mut()).map(|ptr| Self { ptr, alloc })
    }

    /// Give up ownership. The caller must release the pointer with the
    /// matching allocator; this handle will not.
    pub fn into_raw(self) -> Bstr {
        let this = ManuallyDrop::new(self);
        this.ptr.as_ptr()
    }

    /// Payload pointer; ownership stays with this handle.
    pub fn as_ptr(&self) -> Bstr {
        self.ptr.as_ptr()
    }

    /// Length in bytes, as stored in the prefix.
    pub fn byte_len(&self) -> u32 {
        unsafe { layout::byte_len(self.ptr) }
    }

    /// Length in UTF-16 code units, excluding the terminator.
    pub fn len(&self) -> usize {
        self.byte_len() as usize / 2
    }

    /// Whether the string has no code units. It is still a live allocation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The code units, without the terminator.
    pub fn as_wide(&self) -> &[u16] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len()) }
    }

    /// Decode into a `String`, replacing unpaired surrogates.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_wide())
    }
}

impl<A: BstrAllocator> Drop for OwnedBstr<A> {
    fn drop(&mut self) {
        unsafe { self.alloc.release(self.ptr) }
    }
}

impl<A: BstrAllocator> fmt::Debug for OwnedBstr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBstr")
            .field("ptr", &self.ptr)
            .field("text", &self.to_string_lossy())
            .finish()
    }
}

#[cfg(test)]
impl<A: BstrAllocator> PartialEq<str> for OwnedBstr<A> {
    fn eq(&self, other: &str) -> bool {
        self.as_wide().iter().copied().eq(other.encode_utf16())
    }
}
