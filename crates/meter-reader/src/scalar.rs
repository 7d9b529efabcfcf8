//! Fixed-width scalar accessors.
//!
//! ```text
//! ┌───────────────────────────┬───────┬────────────────────────────────┐
//! │ Accessor                  │ Bytes │ Interpretation                 │
//! ├───────────────────────────┼───────┼────────────────────────────────┤
//! │ u8 / i8                   │ 1     │ as-is                          │
//! │ u16 / i16  _le / _be      │ 2     │ little / big endian            │
//! │ u32 / i32  _le / _be      │ 4     │ little / big endian            │
//! │ u64 / i64  _le / _be      │ 8     │ little / big endian            │
//! │ f32 _le / _be             │ 4     │ IEEE-754 single                │
//! │ f64 _le / _be             │ 8     │ IEEE-754 double                │
//! │ u16, u32, u64, i32        │ same  │ big endian                     │
//! └───────────────────────────┴───────┴────────────────────────────────┘
//! ```
//!
//! Unsuffixed accessors are big endian because that is how the game frames
//! most of its fields. Little endian always has to be asked for by name.

use crate::error::ReadError;
use crate::reader::BinaryReader;

macro_rules! read_scalar {
    ($($name:ident => $ty:ty, $convert:ident;)*) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "` with `", stringify!($convert), "` and advance by its width.")]
            ///
            /// # Errors
            ///
            /// [`ReadError::OutOfBounds`] if not enough bytes remain.
            pub fn $name(&mut self) -> Result<$ty, ReadError> {
                self.read_array().map(<$ty>::$convert)
            }
        )*
    };
}

macro_rules! peek_scalar {
    ($($name:ident => $ty:ty, $convert:ident;)*) => {
        $(
            #[doc = concat!("Decode a `", stringify!($ty), "` with `", stringify!($convert), "` without moving.")]
            ///
            /// # Errors
            ///
            /// [`ReadError::OutOfBounds`] if not enough bytes remain.
            pub fn $name(&self) -> Result<$ty, ReadError> {
                self.peek_array().map(<$ty>::$convert)
            }
        )*
    };
}

impl BinaryReader<'_> {
    read_scalar! {
        read_u8 => u8, from_le_bytes;
        read_i8 => i8, from_le_bytes;

        read_u16_le => u16, from_le_bytes;
        read_u16_be => u16, from_be_bytes;
        read_i16_le => i16, from_le_bytes;
        read_i16_be => i16, from_be_bytes;

        read_u32_le => u32, from_le_bytes;
        read_u32_be => u32, from_be_bytes;
        read_i32_le => i32, from_le_bytes;
        read_i32_be => i32, from_be_bytes;

        read_u64_le => u64, from_le_bytes;
        read_u64_be => u64, from_be_bytes;
        read_i64_le => i64, from_le_bytes;
        read_i64_be => i64, from_be_bytes;

        read_f32_le => f32, from_le_bytes;
        read_f32_be => f32, from_be_bytes;
        read_f64_le => f64, from_le_bytes;
        read_f64_be => f64, from_be_bytes;
    }

    peek_scalar! {
        peek_u8 => u8, from_le_bytes;

        peek_u16_le => u16, from_le_bytes;
        peek_u16_be => u16, from_be_bytes;

        peek_u32_le => u32, from_le_bytes;
        peek_u32_be => u32, from_be_bytes;
        peek_i32_be => i32, from_be_bytes;

        peek_u64_le => u64, from_le_bytes;
        peek_u64_be => u64, from_be_bytes;
    }

    /// Big-endian alias of [`read_u16_be`](Self::read_u16_be).
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        self.read_u16_be()
    }

    /// Big-endian alias of [`read_u32_be`](Self::read_u32_be).
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        self.read_u32_be()
    }

    /// Big-endian alias of [`read_u64_be`](Self::read_u64_be).
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 8 bytes remain.
    pub fn read_u64(&mut self) -> Result<u64, ReadError> {
        self.read_u64_be()
    }

    /// Big-endian alias of [`read_i32_be`](Self::read_i32_be).
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Result<i32, ReadError> {
        self.read_i32_be()
    }

    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 2 bytes remain.
    pub fn peek_u16(&self) -> Result<u16, ReadError> {
        self.peek_u16_be()
    }

    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn peek_u32(&self) -> Result<u32, ReadError> {
        self.peek_u32_be()
    }

    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 8 bytes remain.
    pub fn peek_u64(&self) -> Result<u64, ReadError> {
        self.peek_u64_be()
    }

    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn peek_i32(&self) -> Result<i32, ReadError> {
        self.peek_i32_be()
    }
}
