//! Unified error type for libprimes operations.
//!
//! Every fallible function returns `Result<T, Error>`; only the program
//! entry point decides to terminate the process. Each variant maps to the
//! single line the programs print before exiting with status 1.

use crate::errno::Errno;

/// Unified error type for libprimes operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Wrong number of command-line arguments.
    Usage,
    /// A byte that is not an ASCII decimal digit.
    NonDigit { position: usize, byte: u8 },
    /// A decimal string with no digits.
    EmptyInteger,
    /// The zeroth prime was requested.
    ZeroIndex,
    /// A value does not fit in `u64`.
    Overflow,
    /// The assembled message does not fit the output buffer.
    MessageTooLong,
    /// A POSIX errno from a failed syscall.
    Os(Errno),
}

impl Error {
    /// Convert a raw syscall return value to `Result`.
    ///
    /// Syscalls return negative values on failure (negated errno).
    /// Non-negative values indicate success.
    #[inline]
    pub fn from_syscall(ret: i64) -> Result<u64, Error> {
        Errno::from_syscall(ret).map_err(Error::Os)
    }

    /// The fixed line printed to stdout for this error.
    ///
    /// `Usage` has none: its line names the program and is built by `app`.
    pub fn message(&self) -> Option<&'static str> {
        let line = match self {
            Error::Usage => return None,
            Error::NonDigit { .. } => "Error: non-digit character in integer string\n",
            Error::EmptyInteger => "Error: empty integer string\n",
            Error::ZeroIndex => "Error: n must be at least 1\n",
            Error::Overflow => "Error: integer out of range\n",
            Error::MessageTooLong => "Error: message buffer too small\n",
            Error::Os(_) => "Error: write failed\n",
        };
        Some(line)
    }
}

impl From<Errno> for Error {
    fn from(e: Errno) -> Self {
        Error::Os(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Usage => write!(f, "wrong number of arguments"),
            Error::NonDigit { position, byte } => {
                write!(f, "non-digit byte {:#04x} at position {}", byte, position)
            }
            Error::EmptyInteger => write!(f, "empty integer string"),
            Error::ZeroIndex => write!(f, "prime index 0 requested"),
            Error::Overflow => write!(f, "value exceeds u64"),
            Error::MessageTooLong => write!(f, "message exceeds buffer capacity"),
            Error::Os(e) => write!(f, "{:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_has_no_fixed_line() {
        assert_eq!(Error::Usage.message(), None);
    }

    #[test]
    fn fixed_lines_are_single_terminated_lines() {
        let errors = [
            Error::NonDigit { position: 0, byte: b'x' },
            Error::EmptyInteger,
            Error::ZeroIndex,
            Error::Overflow,
            Error::MessageTooLong,
            Error::Os(Errno::EPIPE),
        ];
        for error in errors {
            let line = error.message().unwrap();
            assert!(line.starts_with("Error: "), "{:?}", error);
            assert!(line.ends_with('\n'), "{:?}", error);
            assert_eq!(line.matches('\n').count(), 1, "{:?}", error);
        }
    }
}
