//! Syscall plumbing for the emulator compatibility shims.
//!
//! Everything here is pure forwarding: per-architecture syscall
//! numbers, the trap instruction itself, and decoding of the kernel's
//! raw return value. Host types (`sembuf`, `timespec`) never appear at
//! this layer; callers pass raw pointers and get back
//! `Result<usize, errno>`.

pub mod syscall;
