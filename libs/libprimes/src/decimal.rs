//! Decimal conversion without the standard library
//!
//! `parse` accumulates digits left to right; `render` emits them least
//! significant first and reverses the span in place.

use crate::error::Error;

/// Bytes `render` needs: the 20 digits of `u64::MAX` plus the NUL sentinel.
pub const RENDER_CAPACITY: usize = 21;

/// Parse an unsigned decimal integer.
///
/// Every byte must be an ASCII digit, so signs and whitespace are rejected.
/// Leading zeros are accepted. A non-digit anywhere takes precedence over
/// overflow.
pub fn parse(digits: &[u8]) -> Result<u64, Error> {
    if digits.is_empty() {
        return Err(Error::EmptyInteger);
    }
    if let Some(position) = digits.iter().position(|b| !b.is_ascii_digit()) {
        return Err(Error::NonDigit {
            position,
            byte: digits[position],
        });
    }

    let mut value: u64 = 0;
    for &byte in digits {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
            .ok_or(Error::Overflow)?;
    }
    Ok(value)
}

/// Parse the NUL-terminated prefix of `bytes`.
///
/// Without a NUL the whole slice is parsed.
pub fn parse_cstr(bytes: &[u8]) -> Result<u64, Error> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    parse(&bytes[..end])
}

/// Render `value` into `buf`, NUL-terminated, and return the digits.
///
/// The returned slice excludes the sentinel. Zero renders as `"0"`.
pub fn render(mut value: u64, buf: &mut [u8; RENDER_CAPACITY]) -> &[u8] {
    let mut len = 0;
    loop {
        buf[len] = b'0' + (value % 10) as u8;
        value /= 10;
        len += 1;
        if value == 0 {
            break;
        }
    }
    buf[len] = 0;
    buf[..len].reverse();
    &buf[..len]
}
