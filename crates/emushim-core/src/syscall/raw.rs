//! Raw Linux syscall invocation for supported architectures.
//!
//! Each function issues a single trap instruction (`syscall` on
//! x86_64, `svc 0` on aarch64). The return value is the raw kernel
//! return register, error-encoded per the Linux convention; see
//! `super::decode`. Only the argument arities the shims need are
//! provided.

use core::arch::asm;

/// Issue a syscall with 2 arguments.
///
/// # Safety
///
/// The caller must supply a valid syscall number and arguments and
/// accept the kernel's return value semantics.
#[inline]
#[cfg(target_arch = "x86_64")]
pub unsafe fn syscall2(nr: usize, a1: usize, a2: usize) -> usize {
    let ret: usize;
    // SAFETY: Inline asm issues syscall instruction. Caller guarantees validity.
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") nr => ret,
            in("rdi") a1,
            in("rsi") a2,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, preserves_flags),
        );
    }
    ret
}

/// Issue a syscall with 2 arguments.
///
/// # Safety
///
/// The caller must supply a valid syscall number and arguments and
/// accept the kernel's return value semantics.
#[inline]
#[cfg(target_arch = "aarch64")]
pub unsafe fn syscall2(nr: usize, a1: usize, a2: usize) -> usize {
    let ret: usize;
    // SAFETY: Inline asm issues `svc 0`. Caller guarantees validity.
    unsafe {
        asm!(
            "svc 0",
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
            options(nostack),
        );
    }
    ret
}

/// Issue a syscall with 3 arguments.
///
/// # Safety
///
/// The caller must supply a valid syscall number and arguments and
/// accept the kernel's return value semantics.
#[inline]
#[cfg(target_arch = "x86_64")]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> usize {
    let ret: usize;
    // SAFETY: Inline asm issues syscall instruction. Caller guarantees validity.
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") nr => ret,
            in("rdi") a1,
            in("rsi") a2,
            in("rdx") a3,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, preserves_flags),
        );
    }
    ret
}

/// Issue a syscall with 3 arguments.
///
/// # Safety
///
/// The caller must supply a valid syscall number and arguments and
/// accept the kernel's return value semantics.
#[inline]
#[cfg(target_arch = "aarch64")]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> usize {
    let ret: usize;
    // SAFETY: Inline asm issues `svc 0`. Caller guarantees validity.
    unsafe {
        asm!(
            "svc 0",
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
            in("x2") a3,
            options(nostack),
        );
    }
    ret
}

/// Issue a syscall with 4 arguments.
///
/// # Safety
///
/// The caller must supply a valid syscall number and arguments and
/// accept the kernel's return value semantics.
#[inline]
#[cfg(target_arch = "x86_64")]
pub unsafe fn syscall4(nr: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> usize {
    let ret: usize;
    // SAFETY: Inline asm issues syscall instruction. Caller guarantees validity.
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") nr => ret,
            in("rdi") a1,
            in("rsi") a2,
            in("rdx") a3,
            in("r10") a4,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, preserves_flags),
        );
    }
    ret
}

/// Issue a syscall with 4 arguments.
///
/// # Safety
///
/// The caller must supply a valid syscall number and arguments and
/// accept the kernel's return value semantics.
#[inline]
#[cfg(target_arch = "aarch64")]
pub unsafe fn syscall4(nr: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> usize {
    let ret: usize;
    // SAFETY: Inline asm issues `svc 0`. Caller guarantees validity.
    unsafe {
        asm!(
            "svc 0",
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
            in("x2") a3,
            in("x3") a4,
            options(nostack),
        );
    }
    ret
}
