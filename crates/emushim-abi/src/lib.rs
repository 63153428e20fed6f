//! Exported libc-shadowing symbols.
//!
//! Each entry point here shares the name, signature, and observable
//! contract of a libc routine, but issues the raw kernel syscall an
//! older emulated kernel supports instead of whatever the host libc's
//! wrapper would do. Release builds export the un-mangled names for
//! `LD_PRELOAD`; debug (and therefore test) builds keep mangled names
//! so they never collide with the host libc's own definitions.

use std::ffi::c_int;

pub mod sem_abi;
pub mod time_abi;

/// Store an errno value into the *host* libc's errno.
///
/// These shims coexist with the real libc rather than replacing it,
/// so failures must land where the shadowed function's callers look.
#[inline]
pub(crate) unsafe fn set_host_errno(val: c_int) {
    // SAFETY: `__errno_location` returns a valid thread-local slot.
    unsafe { *libc::__errno_location() = val };
}

/// Map a core syscall result to the shadowed function's convention:
/// the value on success, -1 with host errno set on failure.
#[inline]
pub(crate) unsafe fn syscall_ret_int(res: Result<usize, i32>) -> c_int {
    match res {
        Ok(n) => n as c_int,
        Err(e) => {
            // SAFETY: errno slot is always writable.
            unsafe { set_host_errno(e) };
            -1
        }
    }
}
