//! Shared byte fixtures for the meter integration tests and benches.
//!
//! Buffers are assembled by hand so each test states the exact wire bytes
//! it decodes.

/// Opcode of the synthetic damage frame built by [`damage_frame`].
pub const DAMAGE_OPCODE: u16 = 0x0031;

/// Bytes of frame header ahead of the body: `u32` BE size, `u16` BE opcode.
pub const FRAME_HEADER_SIZE: usize = 6;

/// Field values for a synthetic damage frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageFixture {
    pub attacker: u64,
    pub target: u64,
    pub amount: i64,
    pub position: (f32, f32),
    pub crit: bool,
    pub skill: String,
}

impl Default for DamageFixture {
    fn default() -> Self {
        Self {
            attacker: 0x0000_0100_0000_002A,
            target: 0x0000_0200_0000_0007,
            amount: 12_345,
            position: (101.5, -48.25),
            crit: true,
            skill: "Gale Thrust".to_owned(),
        }
    }
}

/// `[u32 LE length][4 ignored bytes][text]`.
pub fn length_prefixed(text: &str) -> Vec<u8> {
    let len = u32::try_from(text.len()).expect("fixture text fits in u32");
    let mut out = Vec::with_capacity(8 + text.len());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
    out.extend_from_slice(text.as_bytes());
    out
}

/// A framed damage packet.
///
/// ```text
/// header  u32 BE frame size (header included) | u16 BE opcode
/// body    u64 BE attacker | u64 LE target | i64 LE amount
///         f32 LE x | f32 LE y | u8 flags (bit 0 = crit)
///         length-prefixed skill name
///         NUL-terminated zone tag
/// ```
pub fn damage_frame(fixture: &DamageFixture, zone: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&fixture.attacker.to_be_bytes());
    body.extend_from_slice(&fixture.target.to_le_bytes());
    body.extend_from_slice(&fixture.amount.to_le_bytes());
    body.extend_from_slice(&fixture.position.0.to_le_bytes());
    body.extend_from_slice(&fixture.position.1.to_le_bytes());
    body.push(u8::from(fixture.crit));
    body.extend_from_slice(&length_prefixed(&fixture.skill));
    body.extend_from_slice(zone.as_bytes());
    body.push(0);

    let size = u32::try_from(FRAME_HEADER_SIZE + body.len()).expect("fixture frame fits in u32");
    let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + body.len());
    frame.extend_from_slice(&size.to_be_bytes());
    frame.extend_from_slice(&DAMAGE_OPCODE.to_be_bytes());
    frame.extend_from_slice(&body);
    frame
}

/// `count` damage frames back to back, each with a different amount.
pub fn damage_stream(count: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..count {
        let fixture = DamageFixture {
            amount: i64::try_from(i).expect("fixture count fits in i64") * 10,
            ..DamageFixture::default()
        };
        out.extend_from_slice(&damage_frame(&fixture, "field-03"));
    }
    out
}
