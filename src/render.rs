//! Radix rendering of a buffer's raw bytes.
//!
//! Bytes are printed in descending index order (most significant byte
//! first), each zero-padded to the number of digits its radix needs for a
//! full byte. Purely presentational: consumes the byte view, never the
//! bit-level API.

use crate::errors::RenderError;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How [render] formats a byte slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Radix to print in, 2..=36.
    pub radix: u32,
    /// Insert a space after every this many printed bytes. `None` (or
    /// `Some(0)`) prints no separator.
    pub group_every: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            radix: 16,
            group_every: None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::RenderOptionsDef> for RenderOptions {
    fn from(value: crate::serde::RenderOptionsDef) -> Self {
        RenderOptions {
            radix: value.radix,
            group_every: value.group_every,
        }
    }
}

/// Renders `data` as a digit string, most significant byte first. Fails
/// with [RenderError::InvalidRadix] unless the radix is 2..=36.
pub fn render(data: &[u8], options: &RenderOptions) -> Result<String, RenderError> {
    if options.radix < 2 || options.radix > 36 {
        return Err(RenderError::InvalidRadix);
    }

    let digits = digits_per_byte(options.radix);
    let mut out = String::with_capacity(data.len() * (digits + 1));

    for (printed, &byte) in data.iter().rev().enumerate() {
        if printed > 0 {
            if let Some(group) = options.group_every {
                if group > 0 && printed % group == 0 {
                    out.push(' ');
                }
            }
        }

        push_byte(&mut out, byte, options.radix, digits);
    }

    Ok(out)
}

/// Number of digits `radix` needs to display a full byte: the smallest `d`
/// with `radix^d >= 256`.
fn digits_per_byte(radix: u32) -> usize {
    let mut digits = 1;
    let mut span = radix;

    while span < 256 {
        span *= radix;
        digits += 1;
    }

    digits
}

fn push_byte(out: &mut String, byte: u8, radix: u32, digits: usize) {
    let mut scratch = [0u8; 8];
    let mut value = byte as u32;

    for slot in scratch[..digits].iter_mut().rev() {
        *slot = DIGITS[(value % radix) as usize];
        value /= radix;
    }

    for &digit in &scratch[..digits] {
        out.push(digit as char);
    }
}
