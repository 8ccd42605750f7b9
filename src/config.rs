/// Knobs for [`crate::Uevent::deserialize_with`].
///
/// The defaults accept every well-formed buffer regardless of its size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    strict_seqnum: bool,
    max_size: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `SEQNUM` values with trailing bytes or that overflow `u64`.
    pub fn with_strict_seqnum(mut self, strict: bool) -> Self {
        self.strict_seqnum = strict;
        self
    }

    /// Reject buffers longer than `max_size` bytes before copying anything.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn strict_seqnum(&self) -> bool {
        self.strict_seqnum
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }
}
