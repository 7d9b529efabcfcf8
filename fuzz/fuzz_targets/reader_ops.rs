#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use meter_reader::{BinaryReader, ReaderOptions, TextEncoding, UnterminatedCString};

#[derive(Arbitrary, Debug)]
enum Op {
    U8,
    U16Le,
    U32,
    I32Le,
    U64Le,
    F64Be,
    PeekU32,
    Bytes(u16),
    PeekBytes(u16),
    Skip(u16),
    Seek(u16),
    SeekRelative(i16),
    CString,
    LengthPrefixed,
    Slice(u16),
    Remaining,
    Reset,
}

#[derive(Arbitrary, Debug)]
struct Input {
    strict_cstrings: bool,
    ops: Vec<Op>,
    data: Vec<u8>,
}

// Fuzz target: arbitrary operation sequences against one reader.
//
// Checks after every step:
// - tell() never exceeds the buffer length
// - a failed operation leaves tell() unchanged
// - eof() agrees with tell()
fuzz_target!(|input: Input| {
    let policy = if input.strict_cstrings {
        UnterminatedCString::Error
    } else {
        UnterminatedCString::Clamp
    };
    let mut reader =
        BinaryReader::with_options(&input.data, ReaderOptions::new().unterminated_cstring(policy));

    for op in &input.ops {
        let before = reader.tell();
        let ok = match *op {
            Op::U8 => reader.read_u8().is_ok(),
            Op::U16Le => reader.read_u16_le().is_ok(),
            Op::U32 => reader.read_u32().is_ok(),
            Op::I32Le => reader.read_i32_le().is_ok(),
            Op::U64Le => reader.read_u64_le().is_ok(),
            Op::F64Be => reader.read_f64_be().is_ok(),
            Op::PeekU32 => {
                let ok = reader.peek_u32().is_ok();
                assert_eq!(reader.tell(), before);
                ok
            }
            Op::Bytes(n) => reader.read_bytes(usize::from(n)).is_ok(),
            Op::PeekBytes(n) => {
                let ok = reader.peek_bytes(usize::from(n)).is_ok();
                assert_eq!(reader.tell(), before);
                ok
            }
            Op::Skip(n) => reader.skip(usize::from(n)).is_ok(),
            Op::Seek(pos) => reader.seek(usize::from(pos)).is_ok(),
            Op::SeekRelative(delta) => reader.seek_relative(isize::from(delta)).is_ok(),
            Op::CString => reader.read_cstring(TextEncoding::Utf8).is_ok(),
            Op::LengthPrefixed => reader
                .read_length_prefixed_string(TextEncoding::Latin1)
                .is_ok(),
            Op::Slice(n) => match reader.slice(usize::from(n)) {
                Ok(mut child) => {
                    assert_eq!(child.len(), usize::from(n));
                    let parent_at = reader.tell();
                    child.read_remaining();
                    assert_eq!(reader.tell(), parent_at);
                    true
                }
                Err(_) => false,
            },
            Op::Remaining => {
                reader.read_remaining();
                assert!(reader.eof());
                true
            }
            Op::Reset => {
                reader.reset();
                true
            }
        };

        if !ok {
            assert_eq!(reader.tell(), before, "{op:?} moved the cursor on failure");
        }
        assert!(reader.tell() <= input.data.len());
        assert_eq!(reader.eof(), reader.tell() == input.data.len());
    }
});
