//! Typed entry points for the shimmed syscalls.
//!
//! Each `sys_*` function issues exactly one raw syscall and decodes
//! the kernel's return: `Ok(value)` on success, `Err(errno)` when the
//! raw return falls in the error-encoded range. No argument is
//! inspected or modified here.

use core::ffi::c_void;

pub mod nr;
pub mod raw;

/// Largest errno value encodable in a raw syscall return. Raw returns
/// in `-4095..=-1` (as `usize`) carry `-errno`.
const MAX_ERRNO: usize = 4095;

#[inline]
fn decode(ret: usize) -> Result<usize, i32> {
    if ret >= MAX_ERRNO.wrapping_neg() {
        Err(ret.wrapping_neg() as i32)
    } else {
        Ok(ret)
    }
}

/// Raw `semop`: perform `nsops` operations on the semaphore set
/// `semid`.
///
/// On x86_64 this is the dedicated `semop` number. aarch64 has no
/// separate `semop`; the direct form there is `semtimedop` with a
/// NULL timeout, which is what a plain `semop` means to the kernel.
///
/// # Safety
///
/// `sops` must point to `nsops` valid `sembuf` records, or the caller
/// must intend to receive the kernel's verdict on the raw pointer.
#[cfg(target_arch = "x86_64")]
pub unsafe fn sys_semop(semid: i32, sops: *mut c_void, nsops: usize) -> Result<usize, i32> {
    // SAFETY: single trap with caller-supplied arguments.
    decode(unsafe { raw::syscall3(nr::SEMOP, semid as usize, sops as usize, nsops) })
}

/// Raw `semop` via `semtimedop` with a NULL timeout (see the x86_64
/// variant for the contract).
///
/// # Safety
///
/// Same as the x86_64 variant.
#[cfg(target_arch = "aarch64")]
pub unsafe fn sys_semop(semid: i32, sops: *mut c_void, nsops: usize) -> Result<usize, i32> {
    // SAFETY: single trap with caller-supplied arguments; NULL timeout
    // means "block indefinitely", identical to semop proper.
    decode(unsafe { raw::syscall4(nr::SEMTIMEDOP, semid as usize, sops as usize, nsops, 0) })
}

/// Raw `utimensat`: set the timestamps named by `dirfd`/`pathname` to
/// `times` (two `timespec` records, or NULL for "now").
///
/// # Safety
///
/// `pathname` and `times` must each be NULL or valid for the kernel's
/// reads; `times` with two records when non-NULL.
pub unsafe fn sys_utimensat(
    dirfd: i32,
    pathname: *const c_void,
    times: *const c_void,
    flags: i32,
) -> Result<usize, i32> {
    // SAFETY: single trap with caller-supplied arguments.
    decode(unsafe {
        raw::syscall4(
            nr::UTIMENSAT,
            dirfd as usize,
            pathname as usize,
            times as usize,
            flags as usize,
        )
    })
}

/// Raw `clock_gettime`: read `clock_id` into `*tp`.
///
/// Always traps; never served from the vDSO.
///
/// # Safety
///
/// `tp` must be valid for a `timespec` write, or the caller must
/// intend to receive the kernel's verdict on the raw pointer.
pub unsafe fn sys_clock_gettime(clock_id: i32, tp: *mut c_void) -> Result<usize, i32> {
    // SAFETY: single trap with caller-supplied arguments.
    decode(unsafe { raw::syscall2(nr::CLOCK_GETTIME, clock_id as usize, tp as usize) })
}
