/// Errors produced by [`BinaryReader`](crate::BinaryReader).
///
/// Both variants are deterministic: retrying the same call against the same
/// buffer and offset fails the same way. The reader never recovers on its
/// own; dropping a truncated packet or resyncing is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// A read, peek or skip needed more bytes than the buffer has left.
    ///
    /// The cursor has not moved. `offset` is the position the failed call
    /// started from.
    #[error("attempted to read {requested} bytes at offset {offset}, but only {remaining} bytes remaining")]
    OutOfBounds {
        requested: usize,
        remaining: usize,
        offset: usize,
    },

    /// A seek targeted a position outside `0..=len`.
    ///
    /// `target` is wide enough to hold any absolute `usize` position as well
    /// as negative results of a relative seek.
    #[error("seek target {target} outside buffer of {len} bytes")]
    InvalidSeek { target: i128, len: usize },
}

impl ReadError {
    /// Bytes the failed call asked for, if this was a bounds failure.
    pub fn requested(&self) -> Option<usize> {
        match self {
            Self::OutOfBounds { requested, .. } => Some(*requested),
            Self::InvalidSeek { .. } => None,
        }
    }
}
