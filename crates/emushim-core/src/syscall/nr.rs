//! Syscall numbers for the calls the shims issue.
//!
//! These are the `__NR_*` values from the Linux tables for the two
//! supported architectures. aarch64 uses the asm-generic table, which
//! has no dedicated `semop` number; its direct form is `semtimedop`.

#[cfg(target_arch = "x86_64")]
mod numbers {
    pub const SEMOP: usize = 65;
    pub const CLOCK_GETTIME: usize = 228;
    pub const UTIMENSAT: usize = 280;
}

#[cfg(target_arch = "aarch64")]
mod numbers {
    pub const UTIMENSAT: usize = 88;
    pub const CLOCK_GETTIME: usize = 113;
    pub const SEMTIMEDOP: usize = 192;
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use numbers::*;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("Unsupported architecture. Currently only aarch64 and x86_64 are supported.");
