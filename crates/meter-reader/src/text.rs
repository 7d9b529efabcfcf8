//! String decoding: fixed length, NUL-terminated and length-prefixed.

use std::borrow::Cow;

use base64::Engine as _;
use base64::prelude::{BASE64_STANDARD, BASE64_URL_SAFE_NO_PAD};

use crate::config::UnterminatedCString;
use crate::error::ReadError;
use crate::reader::BinaryReader;

/// Bytes ahead of the text in a length-prefixed string: `u32` LE length,
/// then a 4-byte field the game never uses.
const LENGTH_PREFIX_SIZE: usize = 8;

/// How raw bytes become text.
///
/// Decoding never fails. Byte sequences that are not valid in the chosen
/// encoding are replaced with U+FFFD, so a corrupt name field degrades the
/// display rather than the whole packet.
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────────────┐
/// │ Variant   │ Behavior                                             │
/// ├───────────┼──────────────────────────────────────────────────────┤
/// │ Utf8      │ Borrowed when valid, lossy otherwise                 │
/// │ Ascii     │ High bit of every byte is cleared                    │
/// │ Latin1    │ One byte, one code point                             │
/// │ Utf16Le   │ Little-endian code units, odd trailing byte dropped  │
/// │ Hex       │ Lowercase hex digits, two per byte                   │
/// │ Base64    │ Standard alphabet, padded                            │
/// │ Base64Url │ URL-safe alphabet, unpadded                          │
/// └───────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// [`from_label`](Self::from_label) maps the encoding names the capture
/// tooling passes around (`utf8`, `ucs2`, `binary`, ...) onto variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
    Utf16Le,
    Hex,
    Base64,
    Base64Url,
}

impl TextEncoding {
    /// Look up an encoding by name, case-insensitively.
    ///
    /// Accepts `utf8`/`utf-8`, `ascii`, `latin1`/`binary`,
    /// `utf16le`/`utf-16le`/`ucs2`/`ucs-2`, `hex`, `base64` and `base64url`.
    pub fn from_label(label: &str) -> Option<Self> {
        let encoding = match label.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Self::Utf8,
            "ascii" => Self::Ascii,
            "latin1" | "binary" => Self::Latin1,
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Self::Utf16Le,
            "hex" => Self::Hex,
            "base64" => Self::Base64,
            "base64url" => Self::Base64Url,
            _ => return None,
        };
        Some(encoding)
    }

    /// Decode `bytes` as text.
    pub fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes),
            Self::Ascii => {
                if bytes.is_ascii() {
                    // ASCII bytes are valid UTF-8 as-is.
                    String::from_utf8_lossy(bytes)
                } else {
                    Cow::Owned(bytes.iter().map(|&b| char::from(b & 0x7F)).collect())
                }
            }
            Self::Latin1 => {
                if bytes.is_ascii() {
                    String::from_utf8_lossy(bytes)
                } else {
                    Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
                }
            }
            Self::Utf16Le => {
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                Cow::Owned(
                    char::decode_utf16(units)
                        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                        .collect(),
                )
            }
            Self::Hex => Cow::Owned(hex::encode(bytes)),
            Self::Base64 => Cow::Owned(BASE64_STANDARD.encode(bytes)),
            Self::Base64Url => Cow::Owned(BASE64_URL_SAFE_NO_PAD.encode(bytes)),
        }
    }
}

impl<'a> BinaryReader<'a> {
    /// Read `length` bytes and decode them as text.
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_string(
        &mut self,
        length: usize,
        encoding: TextEncoding,
    ) -> Result<Cow<'a, str>, ReadError> {
        self.read_bytes(length).map(|bytes| encoding.decode(bytes))
    }

    /// Read text up to the next NUL byte and step past the NUL.
    ///
    /// When no NUL is left in the buffer, the reader's
    /// [`UnterminatedCString`] policy decides: `Clamp` decodes everything
    /// that is left and stops at EOF, `Error` fails without moving.
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] with `requested = remaining + 1` when the
    /// string is unterminated under [`UnterminatedCString::Error`].
    pub fn read_cstring(&mut self, encoding: TextEncoding) -> Result<Cow<'a, str>, ReadError> {
        let rest = self.rest();
        let Some(end) = rest.iter().position(|&b| b == 0) else {
            log::debug!(
                "no NUL terminator in {} bytes at offset {}",
                rest.len(),
                self.tell()
            );
            return match self.options().unterminated_cstring {
                UnterminatedCString::Clamp => Ok(encoding.decode(self.read_remaining())),
                UnterminatedCString::Error => Err(ReadError::OutOfBounds {
                    requested: rest.len() + 1,
                    remaining: rest.len(),
                    offset: self.tell(),
                }),
            };
        };

        let text = self.read_string(end, encoding)?;
        self.skip(1)?;
        Ok(text)
    }

    /// Read a string framed as `[u32 LE length][4 ignored bytes][text]`.
    ///
    /// ```text
    /// ┌────────┬─────────┬────────────────────────────────┐
    /// │ Offset │ Size    │ Description                    │
    /// ├────────┼─────────┼────────────────────────────────┤
    /// │ 0x00   │ 4 bytes │ Text length L (u32 LE)         │
    /// │ 0x04   │ 4 bytes │ i32 BE, read and discarded     │
    /// │ 0x08   │ L bytes │ Text                           │
    /// └────────┴─────────┴────────────────────────────────┘
    /// ```
    ///
    /// All `8 + L` bytes are checked before anything is consumed, so a
    /// truncated string leaves the cursor where it was.
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] with `requested = 4` if the length itself
    /// is cut off, or `requested = 8 + L` if the rest is.
    pub fn read_length_prefixed_string(
        &mut self,
        encoding: TextEncoding,
    ) -> Result<Cow<'a, str>, ReadError> {
        let length = self.peek_u32_le()? as usize;
        self.check_bounds(LENGTH_PREFIX_SIZE.saturating_add(length))?;

        self.read_u32_le()?;
        self.read_i32()?;
        self.read_string(length, encoding)
    }
}
