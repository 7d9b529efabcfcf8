#![no_main]

use libfuzzer_sys::fuzz_target;
use meter_reader::{BinaryReader, TextEncoding};

// Fuzz target: string decoders over arbitrary bytes.
//
// Catches bugs in:
// - Length prefixes larger than the buffer (overflow in 8 + L)
// - Unterminated C strings (the default clamp policy never fails)
// - Odd-length UTF-16 input
fuzz_target!(|data: &[u8]| {
    for encoding in [
        TextEncoding::Utf8,
        TextEncoding::Ascii,
        TextEncoding::Latin1,
        TextEncoding::Utf16Le,
        TextEncoding::Hex,
        TextEncoding::Base64,
        TextEncoding::Base64Url,
    ] {
        let mut reader = BinaryReader::new(data);
        while !reader.eof() {
            let before = reader.tell();
            if reader.read_length_prefixed_string(encoding).is_err() {
                assert_eq!(reader.tell(), before);
                break;
            }
        }

        let mut reader = BinaryReader::new(data);
        while !reader.eof() {
            assert!(reader.read_cstring(encoding).is_ok());
            assert!(reader.tell() <= data.len());
        }
    }
});
