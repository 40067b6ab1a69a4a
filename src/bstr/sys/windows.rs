//! OLE automation allocator.

use std::ptr::{self, NonNull};

use windows_sys::Win32::Foundation::{SysAllocStringLen, SysFreeString};

/// Allocate an uninitialized BSTR of `units` code units.
pub fn allocate(units: u32) -> Option<NonNull<u16>> {
    // A null source leaves the payload uninitialized; prefix and terminator
    // are still written by the system.
    let raw = unsafe { SysAllocStringLen(ptr::null(), units) };
    NonNull::new(raw.cast_mut())
}

/// # Safety
///
/// `bstr` must come from [`allocate`] and must not be used afterwards.
pub unsafe fn release(bstr: NonNull<u16>) {
    SysFreeString(bstr.as_ptr());
}
