//! Process management syscall wrappers

/// Exit the current process with the given exit code.
///
/// This function never returns.
#[cfg(target_os = "none")]
#[inline]
pub fn exit(code: i32) -> ! {
    use crate::syscall::{nr, raw};

    unsafe {
        raw::syscall1(nr::EXIT, code as u64);
    }
    // Should never reach here, but need this for the ! return type
    loop {
        core::hint::spin_loop();
    }
}

/// Exit the current process with the given exit code.
///
/// Uses `_exit`: nothing in the pipeline buffers output, so there is
/// nothing for atexit handlers to flush.
#[cfg(unix)]
#[inline]
pub fn exit(code: i32) -> ! {
    unsafe { libc::_exit(code) }
}
