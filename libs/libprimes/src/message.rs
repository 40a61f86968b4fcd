//! Fixed-capacity, NUL-terminated output buffer

use crate::error::Error;

/// A stack buffer that always holds a NUL sentinel right after its contents.
///
/// `CAP` counts the sentinel, so at most `CAP - 1` bytes of text fit.
/// Appends that would overflow fail rather than truncate.
pub struct MessageBuffer<const CAP: usize> {
    bytes: [u8; CAP],
    len: usize,
}

impl<const CAP: usize> MessageBuffer<CAP> {
    pub const fn new() -> Self {
        assert!(CAP > 0, "no room for the sentinel");
        Self {
            bytes: [0; CAP],
            len: 0,
        }
    }

    /// Append `bytes`, moving the sentinel to the new end.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let end = self.len + bytes.len();
        if end >= CAP {
            return Err(Error::MessageTooLong);
        }
        self.bytes[self.len..end].copy_from_slice(bytes);
        self.bytes[end] = 0;
        self.len = end;
        Ok(())
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        self.push(s.as_bytes())
    }

    /// Contents up to the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(self.len);
        &self.bytes[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_terminated() {
        let buf = MessageBuffer::<8>::new();
        assert_eq!(buf.as_bytes(), b"");
        assert_eq!(buf.bytes[0], 0);
    }

    #[test]
    fn appends_fragments_in_order() {
        let mut buf = MessageBuffer::<32>::new();
        buf.push_str("The ").unwrap();
        buf.push(b"5").unwrap();
        buf.push_str("th prime is: ").unwrap();
        buf.push(b"11").unwrap();
        assert_eq!(buf.as_bytes(), b"The 5th prime is: 11");
        assert_eq!(buf.as_bytes().len(), 20);
        assert_eq!(buf.bytes[20], 0);
    }

    #[test]
    fn fills_to_capacity_but_not_past_it() {
        let mut buf = MessageBuffer::<4>::new();
        buf.push(b"abc").unwrap();
        assert_eq!(buf.bytes, *b"abc\0");
        assert_eq!(buf.push(b"d"), Err(Error::MessageTooLong));
        assert_eq!(buf.as_bytes(), b"abc");
    }

    #[test]
    fn rejected_push_leaves_contents_untouched() {
        let mut buf = MessageBuffer::<6>::new();
        buf.push(b"ab").unwrap();
        assert_eq!(buf.push(b"cdef"), Err(Error::MessageTooLong));
        assert_eq!(buf.as_bytes(), b"ab");
        buf.push(b"cde").unwrap();
        assert_eq!(buf.as_bytes(), b"abcde");
    }
}
