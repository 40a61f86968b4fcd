//! POSIX errno values
//!
//! These match Linux errno values. Only the values an output write can
//! report are named.

/// Error numbers returned by syscalls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum Errno {
    /// Interrupted system call
    EINTR = 4,
    /// I/O error
    EIO = 5,
    /// Bad file descriptor
    EBADF = 9,
    /// Resource temporarily unavailable
    EAGAIN = 11,
    /// Bad address
    EFAULT = 14,
    /// Invalid argument
    EINVAL = 22,
    /// File too large
    EFBIG = 27,
    /// No space left on device
    ENOSPC = 28,
    /// Broken pipe
    EPIPE = 32,
    /// Function not implemented
    ENOSYS = 38,
}

impl Errno {
    /// Convert a raw syscall return value to Result
    ///
    /// Syscalls return negative errno on error, non-negative on success.
    pub fn from_syscall(ret: i64) -> Result<u64, Errno> {
        if ret >= 0 {
            Ok(ret as u64)
        } else {
            Err(Errno::from_raw(-ret))
        }
    }

    /// Convert raw errno value to Errno enum
    pub fn from_raw(val: i64) -> Errno {
        match val {
            4 => Errno::EINTR,
            5 => Errno::EIO,
            9 => Errno::EBADF,
            11 => Errno::EAGAIN,
            14 => Errno::EFAULT,
            22 => Errno::EINVAL,
            27 => Errno::EFBIG,
            28 => Errno::ENOSPC,
            32 => Errno::EPIPE,
            38 => Errno::ENOSYS,
            _ => Errno::EINVAL, // Unknown error
        }
    }
}
