use std::fmt;

use crate::config::ReaderOptions;
use crate::error::ReadError;

/// Bounds-checked cursor over an immutable byte buffer.
///
/// The reader borrows the buffer and owns nothing but its position, so any
/// number of readers (including children made with [`slice`](Self::slice))
/// can walk the same bytes at once. Byte views it hands out borrow the
/// buffer for `'a`, not the reader.
///
/// Every operation validates its byte count against what is left before it
/// touches anything. A failed call returns [`ReadError`] and leaves the
/// offset where it was.
///
/// ```text
///  buffer  ┌──────────────────────────────────────────────┐
///          │ consumed          │ remaining()              │
///          └──────────────────────────────────────────────┘
///          0                 tell()                    len()
/// ```
#[derive(Clone)]
pub struct BinaryReader<'a> {
    buf: &'a [u8],
    offset: usize,
    options: ReaderOptions,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_options(buf, ReaderOptions::default())
    }

    pub fn with_options(buf: &'a [u8], options: ReaderOptions) -> Self {
        Self {
            buf,
            offset: 0,
            options,
        }
    }

    /// Create a reader positioned at `offset`.
    ///
    /// # Errors
    ///
    /// [`ReadError::InvalidSeek`] if `offset > buf.len()`.
    pub fn with_offset(buf: &'a [u8], offset: usize) -> Result<Self, ReadError> {
        let mut reader = Self::new(buf);
        reader.seek(offset)?;
        Ok(reader)
    }

    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// The whole buffer this reader is bounded to, regardless of position.
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current offset from the start of the buffer.
    pub fn tell(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn eof(&self) -> bool {
        self.offset == self.buf.len()
    }

    /// Move to an absolute position. `len()` itself is a valid target.
    ///
    /// # Errors
    ///
    /// [`ReadError::InvalidSeek`] if `pos > len()`.
    pub fn seek(&mut self, pos: usize) -> Result<(), ReadError> {
        if pos > self.buf.len() {
            return Err(self.invalid_seek(pos as i128));
        }
        self.offset = pos;
        Ok(())
    }

    /// Move by `delta` bytes from the current position, in either direction.
    ///
    /// # Errors
    ///
    /// [`ReadError::InvalidSeek`] if the target is negative or past `len()`.
    pub fn seek_relative(&mut self, delta: isize) -> Result<(), ReadError> {
        let target = self.offset as i128 + delta as i128;
        match usize::try_from(target) {
            Ok(pos) if pos <= self.buf.len() => {
                self.offset = pos;
                Ok(())
            }
            _ => Err(self.invalid_seek(target)),
        }
    }

    /// Advance by `count` bytes without decoding them.
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than `count` bytes remain.
    pub fn skip(&mut self, count: usize) -> Result<(), ReadError> {
        self.check_bounds(count)?;
        self.offset += count;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Take the next `length` bytes as a view into the buffer.
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8], ReadError> {
        let bytes = self.peek_bytes(length)?;
        self.offset += length;
        Ok(bytes)
    }

    /// Same as [`read_bytes`](Self::read_bytes) without moving the cursor.
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn peek_bytes(&self, length: usize) -> Result<&'a [u8], ReadError> {
        self.check_bounds(length)?;
        Ok(&self.buf[self.offset..self.offset + length])
    }

    /// Take everything that is left and move to EOF. Never fails; at EOF the
    /// view is empty.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let rest = self.rest();
        self.offset = self.buf.len();
        rest
    }

    /// Split off the next `length` bytes as an independent reader.
    ///
    /// The child starts at offset 0 and cannot see anything outside its
    /// `length` bytes. It shares the buffer with `self` but not the
    /// position: moving one never moves the other. `self` advances past the
    /// sliced range immediately.
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn slice(&mut self, length: usize) -> Result<BinaryReader<'a>, ReadError> {
        let start = self.offset;
        let bytes = self.read_bytes(length)?;
        log::trace!("sliced {length} bytes at offset {start}");
        Ok(Self::with_options(bytes, self.options))
    }

    /// Unconsumed bytes, without moving.
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }

    pub(crate) fn peek_array<const N: usize>(&self) -> Result<[u8; N], ReadError> {
        self.check_bounds(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.offset..self.offset + N]);
        Ok(out)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let out = self.peek_array::<N>()?;
        self.offset += N;
        Ok(out)
    }

    pub(crate) fn check_bounds(&self, requested: usize) -> Result<(), ReadError> {
        let remaining = self.remaining();
        if requested > remaining {
            log::debug!(
                "read of {requested} bytes at offset {} exceeds {remaining} remaining",
                self.offset
            );
            return Err(ReadError::OutOfBounds {
                requested,
                remaining,
                offset: self.offset,
            });
        }
        Ok(())
    }

    fn invalid_seek(&self, target: i128) -> ReadError {
        log::debug!("seek to {target} outside buffer of {} bytes", self.buf.len());
        ReadError::InvalidSeek {
            target,
            len: self.buf.len(),
        }
    }
}

// Captured streams run to kilobytes; print the position, not the bytes.
impl fmt::Debug for BinaryReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryReader")
            .field("len", &self.buf.len())
            .field("offset", &self.offset)
            .field("options", &self.options)
            .finish()
    }
}
