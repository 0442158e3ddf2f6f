//! # bitstride
//!
//! A bit-addressable view over a fixed-size byte buffer.
//!
//! [`buffer::BitBuffer`] reads and writes 1–8 bit fields at arbitrary bit
//! offsets, splitting fields that cross a byte boundary. [`cursor::Cursor`]
//! walks the buffer, advancing by a configurable stride after each access;
//! stride and field width can be locked together or set independently.
//! Bits are addressed LSB-first: byte index 0 is the least significant byte
//! and bit 0 is its low bit.
//!
//! ## Example
//!
//! ```
//! use bitstride::buffer::BitBuffer;
//! use bitstride::cursor::Cursor;
//!
//! let mut buffer = BitBuffer::new(2).unwrap();
//! buffer.set_bits(4, 8, 0xAB).unwrap();
//! assert_eq!(buffer.get_bits(4, 8).unwrap(), 0xAB);
//!
//! let mut cursor = Cursor::new(&mut buffer);
//! cursor.set_stride(4).unwrap();
//! cursor.advance();
//! assert_eq!(cursor.read(), 0xB);
//! assert_eq!(cursor.read(), 0xA);
//! ```

pub mod buffer;
pub mod cursor;
pub mod errors;
pub mod render;
#[cfg(feature = "serde")]
pub mod serde;
