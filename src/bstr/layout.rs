//! Binary layout of an automation string (BSTR).
//!
//! ```text
//!   block                      payload (the BSTR pointer)
//!   |                          |
//!   [ pad ][ u32 byte count ]  [ u16 ... u16 ][ 0u16 ]
//!   <-- HEADER_SIZE bytes -->  <-- byte count -->
//! ```
//!
//! The byte count excludes the terminator. On 64-bit targets the header is
//! pointer sized and the leading pad is zeroed, matching the .NET runtime's
//! platform layer so its `SysFreeString` releases `payload - HEADER_SIZE`.

use std::mem;
use std::ptr::NonNull;

/// Bytes between the start of a block and the payload.
pub const HEADER_SIZE: usize = mem::size_of::<usize>();

/// Blocks are rounded up to this many bytes.
pub const BLOCK_ALIGN: usize = 16;

const PREFIX_SIZE: usize = mem::size_of::<u32>();
const UNIT_SIZE: usize = mem::size_of::<u16>();

/// Number of code units as the `u32` the prefix can describe, or `None` when
/// the byte count would overflow it.
pub fn checked_units(units: usize) -> Option<u32> {
    let bytes = units.checked_mul(UNIT_SIZE)?;
    u32::try_from(bytes).ok()?;
    u32::try_from(units).ok()
}

/// Total block size for a string of `units` code units.
#[cfg_attr(all(windows, not(test)), allow(dead_code))]
pub fn block_size(units: u32) -> Option<usize> {
    let payload = (units as usize).checked_mul(UNIT_SIZE)?;
    u32::try_from(payload).ok()?;
    let total = HEADER_SIZE
        .checked_add(payload)?
        .checked_add(UNIT_SIZE)?
        .checked_add(BLOCK_ALIGN - 1)?;
    Some(total & !(BLOCK_ALIGN - 1))
}

/// Write the header and terminator into a fresh block and return the payload.
///
/// The payload itself is left uninitialized.
///
/// # Safety
///
/// `block` must point to at least `block_size(units)` writable bytes aligned
/// to `align_of::<usize>()`.
#[cfg_attr(all(windows, not(test)), allow(dead_code))]
pub unsafe fn init_block(block: NonNull<u8>, units: u32) -> NonNull<u16> {
    let base = block.as_ptr();
    base.write_bytes(0, HEADER_SIZE - PREFIX_SIZE);
    base.add(HEADER_SIZE - PREFIX_SIZE)
        .cast::<u32>()
        .write_unaligned(units * UNIT_SIZE as u32);
    let payload = base.add(HEADER_SIZE).cast::<u16>();
    payload.add(units as usize).write(0);
    NonNull::new_unchecked(payload)
}

/// Start of the block that owns `payload`.
///
/// # Safety
///
/// `payload` must have been produced by [`init_block`].
#[cfg_attr(all(windows, not(test)), allow(dead_code))]
pub unsafe fn block_start(payload: NonNull<u16>) -> NonNull<u8> {
    NonNull::new_unchecked(payload.as_ptr().cast::<u8>().sub(HEADER_SIZE))
}

/// Byte count stored in the prefix.
///
/// # Safety
///
/// `payload` must be a live BSTR.
pub unsafe fn byte_len(payload: NonNull<u16>) -> u32 {
    payload
        .as_ptr()
        .cast::<u8>()
        .sub(PREFIX_SIZE)
        .cast::<u32>()
        .read_unaligned()
}
