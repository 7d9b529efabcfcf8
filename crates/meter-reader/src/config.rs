/// Options carried by a [`BinaryReader`](crate::BinaryReader).
///
/// Readers created with [`slice`](crate::BinaryReader::slice) inherit the
/// options of their parent, so a policy chosen at the top of a packet holds
/// for every nested structure parsed out of it.
///
/// ```text
/// ┌──────────────────────┬──────────────────────────────────────────────┐
/// │ Field                │ Purpose                                      │
/// ├──────────────────────┼──────────────────────────────────────────────┤
/// │ unterminated_cstring │ What read_cstring does when no NUL is found  │
/// └──────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    pub unterminated_cstring: UnterminatedCString,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for C strings that run to the end of the buffer.
    #[must_use]
    pub fn unterminated_cstring(mut self, policy: UnterminatedCString) -> Self {
        self.unterminated_cstring = policy;
        self
    }
}

/// Policy for a NUL-terminated string with no NUL before end of buffer.
///
/// ```text
/// ┌────────┬──────────────────────────────────────────────────────────┐
/// │ Policy │ Behavior                                                 │
/// ├────────┼──────────────────────────────────────────────────────────┤
/// │ Clamp  │ Decode everything that is left, leave the cursor at EOF. │
/// │ Error  │ Fail with OutOfBounds { requested: remaining + 1 }.      │
/// │        │ The cursor does not move.                                │
/// └────────┴──────────────────────────────────────────────────────────┘
/// ```
///
/// Neither policy ever places the cursor past the end of the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnterminatedCString {
    #[default]
    Clamp,
    Error,
}
