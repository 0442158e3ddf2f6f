//! Error types for buffer access, cursor configuration, and rendering.

/// Errors produced by [crate::buffer::BitBuffer] construction and byte/field access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Requested byte length is zero.
    InvalidLength,
    /// Field width is outside 1..=8.
    InvalidWidth,
    /// Byte index or bit position is beyond the end of the buffer.
    OutOfRange,
}

/// Errors produced by [crate::cursor::Cursor] setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Stride is zero or larger than the buffer's bit length.
    InvalidStride,
    /// Stride width is outside 1..=8.
    InvalidWidth,
    /// Position is beyond the buffer's bit length.
    InvalidPosition,
    /// Stride above 8 requested while stride and width are locked together.
    LockedStride,
}

/// Errors produced by [crate::render::render].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Radix is outside 2..=36.
    InvalidRadix,
}
