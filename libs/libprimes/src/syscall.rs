//! Raw syscall primitives for freestanding builds
//!
//! This module provides the low-level syscall interface using INT 0x80.
//! Arguments follow the Linux AMD64 calling convention:
//! - Syscall number in RAX
//! - Arguments in RDI, RSI, RDX
//! - Return value in RAX (negated errno on failure)

use core::arch::asm;

/// Syscall numbers. The programs only ever exit and write.
pub mod nr {
    pub const EXIT: u64 = 0;
    pub const WRITE: u64 = 1;
}

/// Raw syscall functions - use `io::write` and `process::exit` instead
pub mod raw {
    use super::*;

    #[inline(always)]
    pub unsafe fn syscall1(num: u64, arg1: u64) -> u64 {
        let ret: u64;
        asm!(
            "int 0x80",
            in("rax") num,
            in("rdi") arg1,
            lateout("rax") ret,
            options(nostack, preserves_flags),
        );
        ret
    }

    #[inline(always)]
    pub unsafe fn syscall3(num: u64, arg1: u64, arg2: u64, arg3: u64) -> u64 {
        let ret: u64;
        asm!(
            "int 0x80",
            in("rax") num,
            in("rdi") arg1,
            in("rsi") arg2,
            in("rdx") arg3,
            lateout("rax") ret,
            options(nostack, preserves_flags),
        );
        ret
    }
}
