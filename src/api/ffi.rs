//! C-compatible API consumed by managed runtimes.
//!
//! Every string export returns a BSTR the caller owns. Release it with the
//! platform's `SysFreeString` (what `[return: MarshalAs(UnmanagedType.BStr)]`
//! does automatically) or with [`native_greeting_free`]. A null return means
//! the allocation failed; nothing needs releasing in that case.

use std::panic::{self, AssertUnwindSafe};
use std::ptr::{self, NonNull};

use crate::bstr::{layout, Bstr, BstrAllocator, OwnedBstr};
use crate::common::error::{ExportError, ExportResult};
use crate::common::log;
use crate::greeting;

/// ABI version to coordinate with the host.
pub const API_VERSION: u32 = 1;

/// Declare a C-linkage function handing the result of `$produce` to the
/// caller as a BSTR.
macro_rules! export_bstr {
    ($(#[$meta:meta])* $symbol:ident => $produce:path) => {
        $(#[$meta])*
        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn $symbol() -> Bstr {
            export_seam(stringify!($symbol), $produce)
        }
    };
}

export_bstr!(
    /// Returns `"Hello"`. The caller owns the result.
    SayHelloFromNative => greeting::produce_greeting
);

/// Run `produce` and hand ownership of its string to the caller, or return
/// null.
///
/// Failures and panics stop here; nothing unwinds into foreign frames.
pub(crate) fn export_seam<A, F>(symbol: &str, produce: F) -> Bstr
where
    A: BstrAllocator,
    F: FnOnce() -> ExportResult<OwnedBstr<A>>,
{
    match panic::catch_unwind(AssertUnwindSafe(produce)) {
        Ok(Ok(bstr)) => {
            log::exported(symbol, bstr.len());
            bstr.into_raw()
        }
        Ok(Err(ExportError::AllocationFailure { units })) => {
            log::allocation_failed(symbol, units);
            ptr::null()
        }
        Err(_) => {
            log::panic_contained(symbol);
            ptr::null()
        }
    }
}

/// ABI version of this library.
#[no_mangle]
pub extern "C" fn native_greeting_api_version() -> u32 {
    API_VERSION
}

/// Release a BSTR returned by this library. Null is ignored.
///
/// # Safety
///
/// `bstr` must be null or a BSTR returned by this library (or allocated with
/// the platform's `SysAllocString` family) that has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn native_greeting_free(bstr: Bstr) {
    drop(OwnedBstr::from_raw(bstr));
}

/// Length in UTF-16 code units, like `SysStringLen`. Null has length zero.
///
/// # Safety
///
/// `bstr` must be null or a live BSTR.
#[no_mangle]
pub unsafe extern "C" fn native_greeting_len(bstr: Bstr) -> u32 {
    NonNull::new(bstr.cast_mut()).map_or(0, |bstr| layout::byte_len(bstr) / 2)
}
