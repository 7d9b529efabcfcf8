#![warn(clippy::pedantic)]

//! Bounds-checked binary cursor for decoding captured game packets.
//!
//! [`BinaryReader`] walks an immutable byte buffer and decodes the scalar,
//! string and raw-byte fields the wire protocol is built from. Packet
//! parsers compose its calls; a truncated packet surfaces as a
//! [`ReadError`] and never as a panic or a misplaced offset.
//!
//! ```
//! use meter_reader::{BinaryReader, TextEncoding};
//!
//! let packet = [0x00, 0x02, 0x00, 0x01, b'h', b'p', 0x00];
//! let mut reader = BinaryReader::new(&packet);
//! assert_eq!(reader.read_u32()?, 0x0002_0001);
//! assert_eq!(reader.read_cstring(TextEncoding::Utf8)?, "hp");
//! assert!(reader.eof());
//! # Ok::<(), meter_reader::ReadError>(())
//! ```

mod buf;
pub mod config;
pub mod error;
pub mod reader;
mod scalar;
pub mod text;

pub use config::{ReaderOptions, UnterminatedCString};
pub use error::ReadError;
pub use reader::BinaryReader;
pub use text::TextEncoding;
