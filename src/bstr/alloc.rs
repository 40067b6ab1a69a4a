//! Allocator seam for BSTR blocks.

use std::ptr::NonNull;

use super::sys;

/// Source and sink of BSTR allocations.
///
/// # Safety
///
/// `allocate` must return a payload pointer whose prefix holds `units * 2`,
/// with a NUL code unit at index `units` and room for `units` code units
/// before it. `release` must accept every pointer `allocate` returned, once.
pub unsafe trait BstrAllocator {
    /// Allocate a BSTR with an uninitialized payload of `units` code units,
    /// or `None` when memory is exhausted.
    fn allocate(&self, units: u32) -> Option<NonNull<u16>>;

    /// Release a BSTR previously returned by [`BstrAllocator::allocate`].
    ///
    /// # Safety
    ///
    /// `bstr` must come from this allocator and must not be used afterwards.
    unsafe fn release(&self, bstr: NonNull<u16>);
}

unsafe impl<A: BstrAllocator + ?Sized> BstrAllocator for &A {
    fn allocate(&self, units: u32) -> Option<NonNull<u16>> {
        (**self).allocate(units)
    }

    unsafe fn release(&self, bstr: NonNull<u16>) {
        (**self).release(bstr)
    }
}

/// The platform's own BSTR allocator: `SysAllocStringLen`/`SysFreeString` on
/// Windows, the runtime-compatible `malloc` layout elsewhere.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemAllocator;

unsafe impl BstrAllocator for SystemAllocator {
    fn allocate(&self, units: u32) -> Option<NonNull<u16>> {
        sys::allocate(units)
    }

    unsafe fn release(&self, bstr: NonNull<u16>) {
        sys::release(bstr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bstr::layout;
    use pretty_assertions::assert_eq;

    #[test]
    fn system_allocator_writes_prefix_and_terminator() {
        let bstr = SystemAllocator.allocate(3).unwrap();
        unsafe {
            assert_eq!(layout::byte_len(bstr), 6);
            assert_eq!(bstr.as_ptr().add(3).read(), 0);
            SystemAllocator.release(bstr);
        }
    }

    #[test]
    fn empty_allocation_is_not_null() {
        let bstr = SystemAllocator.allocate(0).unwrap();
        unsafe {
            assert_eq!(layout::byte_len(bstr), 0);
            assert_eq!(bstr.as_ptr().read(), 0);
            SystemAllocator.release(bstr);
        }
    }
}
