//! Shims for the `<time.h>`/`<sys/stat.h>` symbols `futimens` and
//! `clock_gettime`.
//!
//! Newer libc internals route these through 64-bit time syscalls (and
//! the vDSO for `clock_gettime`) that the target emulated kernel does
//! not provide. Both overrides go straight to the classic syscall
//! numbers.

use std::ffi::{c_int, c_void};
use std::ptr;

use emushim_core::syscall;

/// POSIX `futimens` — set the access and modification times of the
/// file open on `fd`.
///
/// Issued as the raw `utimensat` syscall with a NULL path and zero
/// flags, which is the kernel's fd form. `times` may be NULL ("set
/// both to now") and is forwarded untouched.
///
/// # Safety
///
/// `times` must be NULL or point to two valid `timespec` records.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn futimens(fd: c_int, times: *const libc::timespec) -> c_int {
    // SAFETY: caller enforces syscall argument validity.
    let res = unsafe { syscall::sys_utimensat(fd, ptr::null(), times as *const c_void, 0) };
    // SAFETY: errno store only.
    unsafe { crate::syscall_ret_int(res) }
}

/// POSIX `clock_gettime` — read `clock_id` into `*tp`.
///
/// Every call traps; nothing is served from the vDSO. Bad clock ids
/// and bad pointers get the kernel's verdict (`EINVAL`, `EFAULT`) as
/// -1 with host errno, exactly like the shadowed wrapper.
///
/// # Safety
///
/// `tp` must be valid for a `timespec` write.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn clock_gettime(clock_id: libc::clockid_t, tp: *mut libc::timespec) -> c_int {
    // SAFETY: caller enforces syscall argument validity.
    let res = unsafe { syscall::sys_clock_gettime(clock_id, tp as *mut c_void) };
    // SAFETY: errno store only.
    unsafe { crate::syscall_ret_int(res) }
}
