//! Packet parsing composed from reader calls.
//!
//! Mirrors how a downstream decoder uses the cursor: read a frame header,
//! slice the body off as its own reader, decode fields from the slice, and
//! drop truncated frames without losing sync on the outer stream.

use meter_reader::{BinaryReader, ReadError, TextEncoding};
use meter_tests::{DAMAGE_OPCODE, DamageFixture, FRAME_HEADER_SIZE, damage_frame, damage_stream};

#[derive(Debug, PartialEq)]
struct DamageEvent {
    attacker: u64,
    target: u64,
    amount: i64,
    position: (f32, f32),
    crit: bool,
    skill: String,
    zone: String,
}

fn parse_damage(body: &mut BinaryReader<'_>) -> Result<DamageEvent, ReadError> {
    let attacker = body.read_u64()?;
    let target = body.read_u64_le()?;
    let amount = body.read_i64_le()?;
    let position = (body.read_f32_le()?, body.read_f32_le()?);
    let crit = body.read_u8()? & 0x01 != 0;
    let skill = body
        .read_length_prefixed_string(TextEncoding::Utf8)?
        .into_owned();
    let zone = body.read_cstring(TextEncoding::Utf8)?.into_owned();
    Ok(DamageEvent {
        attacker,
        target,
        amount,
        position,
        crit,
        skill,
        zone,
    })
}

/// Read one `[size][opcode][body]` frame, returning the opcode and a reader
/// bounded to the body.
fn next_frame<'a>(stream: &mut BinaryReader<'a>) -> Result<(u16, BinaryReader<'a>), ReadError> {
    let size = stream.peek_u32()? as usize;
    let mut frame = stream.slice(size)?;
    frame.skip(4)?;
    let opcode = frame.read_u16()?;
    let body = frame.slice(size - FRAME_HEADER_SIZE)?;
    Ok((opcode, body))
}

#[test]
fn decodes_a_damage_frame() {
    let fixture = DamageFixture::default();
    let bytes = damage_frame(&fixture, "field-03");
    let mut stream = BinaryReader::new(&bytes);

    let (opcode, mut body) = next_frame(&mut stream).unwrap();
    assert_eq!(opcode, DAMAGE_OPCODE);

    let event = parse_damage(&mut body).unwrap();
    assert_eq!(
        event,
        DamageEvent {
            attacker: fixture.attacker,
            target: fixture.target,
            amount: fixture.amount,
            position: fixture.position,
            crit: fixture.crit,
            skill: fixture.skill.clone(),
            zone: "field-03".to_owned(),
        }
    );
    assert!(body.eof());
    assert!(stream.eof());
}

#[test]
fn walks_a_stream_of_frames() {
    let bytes = damage_stream(5);
    let mut stream = BinaryReader::new(&bytes);

    let mut amounts = Vec::new();
    while !stream.eof() {
        let (opcode, mut body) = next_frame(&mut stream).unwrap();
        assert_eq!(opcode, DAMAGE_OPCODE);
        amounts.push(parse_damage(&mut body).unwrap().amount);
    }
    assert_eq!(amounts, [0, 10, 20, 30, 40]);
}

#[test]
fn truncated_frame_is_dropped_and_stream_stays_put() {
    let mut bytes = damage_stream(2);
    let first_len = bytes.len() / 2;
    bytes.truncate(bytes.len() - 3);

    let mut stream = BinaryReader::new(&bytes);
    let (_, mut body) = next_frame(&mut stream).unwrap();
    parse_damage(&mut body).unwrap();
    assert_eq!(stream.tell(), first_len);

    let err = next_frame(&mut stream).unwrap_err();
    assert_eq!(
        err,
        ReadError::OutOfBounds {
            requested: first_len,
            remaining: first_len - 3,
            offset: first_len,
        }
    );
    assert_eq!(stream.tell(), first_len);
}

#[test]
fn corrupt_body_cannot_read_into_next_frame() {
    let fixture = DamageFixture {
        skill: "Blast".to_owned(),
        ..DamageFixture::default()
    };
    let mut bytes = damage_frame(&fixture, "z");
    let second = damage_frame(&fixture, "z");
    // Inflate the skill name length so it claims the following frame's bytes.
    let skill_len_at = FRAME_HEADER_SIZE + 8 + 8 + 8 + 4 + 4 + 1;
    bytes[skill_len_at..skill_len_at + 4].copy_from_slice(&200u32.to_le_bytes());
    bytes.extend_from_slice(&second);

    let mut stream = BinaryReader::new(&bytes);
    let (_, mut body) = next_frame(&mut stream).unwrap();
    let err = parse_damage(&mut body).unwrap_err();
    assert_eq!(err.requested(), Some(208));

    let (_, mut body) = next_frame(&mut stream).unwrap();
    assert_eq!(parse_damage(&mut body).unwrap().skill, "Blast");
}
