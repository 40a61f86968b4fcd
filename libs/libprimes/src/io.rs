//! I/O syscall wrappers

use crate::errno::Errno;
use crate::error::Error;
use crate::types::Fd;

#[cfg(target_os = "none")]
#[inline]
fn raw_write(file: Fd, buf: &[u8]) -> i64 {
    use crate::syscall::{nr, raw};

    unsafe { raw::syscall3(nr::WRITE, file.raw(), buf.as_ptr() as u64, buf.len() as u64) as i64 }
}

#[cfg(unix)]
#[inline]
fn raw_write(file: Fd, buf: &[u8]) -> i64 {
    let ret = unsafe { libc::write(file.raw() as libc::c_int, buf.as_ptr().cast(), buf.len()) };
    if ret < 0 {
        -last_errno()
    } else {
        ret as i64
    }
}

/// errno of the last failed libc call, as a positive value.
#[cfg(unix)]
fn last_errno() -> i64 {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    let errno = unsafe { *libc::__errno_location() };
    #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
    let errno = unsafe { *libc::__error() };
    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd"
    )))]
    let errno = libc::EIO;
    errno as i64
}

/// Write bytes to a file descriptor.
///
/// # Returns
/// Number of bytes written. A short count is not an error.
#[inline]
pub fn write(file: Fd, buf: &[u8]) -> Result<usize, Error> {
    Error::from_syscall(raw_write(file, buf)).map(|n| n as usize)
}

/// Write the whole buffer, retrying short writes and `EINTR`.
pub fn write_all(file: Fd, mut buf: &[u8]) -> Result<(), Error> {
    while !buf.is_empty() {
        match write(file, buf) {
            Ok(0) => return Err(Error::Os(Errno::EIO)),
            Ok(n) => buf = &buf[n..],
            Err(Error::Os(Errno::EINTR)) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Destination for the single line a program prints.
///
/// `Stdout` is the real channel; tests substitute a recording sink.
pub trait Console {
    fn print(&mut self, buf: &[u8]) -> Result<(), Error>;
}

/// Standard output writer
pub struct Stdout;

impl Stdout {
    /// Write bytes to stdout
    #[inline]
    pub fn write(&self, buf: &[u8]) -> Result<(), Error> {
        write_all(Fd::STDOUT, buf)
    }
}

impl Console for Stdout {
    fn print(&mut self, buf: &[u8]) -> Result<(), Error> {
        self.write(buf)
    }
}

/// Standard error writer
pub struct Stderr;

impl Stderr {
    /// Write bytes to stderr
    #[inline]
    pub fn write(&self, buf: &[u8]) -> Result<(), Error> {
        write_all(Fd::STDERR, buf)
    }

    /// Write a string to stderr
    #[inline]
    pub fn write_str(&self, s: &str) -> Result<(), Error> {
        self.write(s.as_bytes())
    }
}

/// Get a handle to stdout
#[inline]
pub fn stdout() -> Stdout {
    Stdout
}

/// Get a handle to stderr
#[inline]
pub fn stderr() -> Stderr {
    Stderr
}
