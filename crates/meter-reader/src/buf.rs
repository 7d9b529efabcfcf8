use bytes::Buf;

use crate::reader::BinaryReader;

// Lets packet code written against `bytes::Buf` (get_u16_le, copy_to_bytes,
// chunk readers) drive the same cursor. The Buf getters panic on underflow,
// so the checked inherent methods remain the primary interface.
impl Buf for BinaryReader<'_> {
    fn remaining(&self) -> usize {
        BinaryReader::remaining(self)
    }

    fn chunk(&self) -> &[u8] {
        self.rest()
    }

    /// # Panics
    ///
    /// Panics if `cnt` exceeds the remaining byte count, as `Buf` requires.
    fn advance(&mut self, cnt: usize) {
        if let Err(err) = self.skip(cnt) {
            panic!("cannot advance past end of buffer: {err}");
        }
    }
}
