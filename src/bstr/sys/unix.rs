//! `malloc` backed allocator using the .NET platform layer's BSTR layout, so
//! managed callers release results with their own `SysFreeString`.

use std::ptr::NonNull;

use crate::bstr::layout;

/// Allocate an uninitialized BSTR of `units` code units.
pub fn allocate(units: u32) -> Option<NonNull<u16>> {
    let size = layout::block_size(units)?;
    let block = NonNull::new(unsafe { libc::malloc(size) }.cast::<u8>())?;
    Some(unsafe { layout::init_block(block, units) })
}

/// # Safety
///
/// `bstr` must come from [`allocate`] and must not be used afterwards.
pub unsafe fn release(bstr: NonNull<u16>) {
    libc::free(layout::block_start(bstr).as_ptr().cast());
}
