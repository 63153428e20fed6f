//! Shim for the `<sys/sem.h>` symbol `semop`.
//!
//! glibc 2.31 implements `semop()` as `semtimedop()` with a NULL
//! timeout. qemu 3.1 user mode does not implement `semtimedop`, so
//! this override issues the plain `semop` syscall the emulator does
//! support.

use std::ffi::{c_int, c_void};

use emushim_core::syscall;

/// POSIX `semop` — perform `nsops` operations on semaphore set
/// `semid`, blocking until they can all complete.
///
/// Arguments are forwarded to the kernel untouched; the kernel's
/// verdict comes back as -1 with host errno on failure.
///
/// # Safety
///
/// `sops` must point to `nsops` valid `sembuf` records.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn semop(semid: c_int, sops: *mut libc::sembuf, nsops: usize) -> c_int {
    // SAFETY: caller enforces syscall argument validity.
    let res = unsafe { syscall::sys_semop(semid, sops as *mut c_void, nsops) };
    // SAFETY: errno store only.
    unsafe { crate::syscall_ret_int(res) }
}
