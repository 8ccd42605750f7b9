//! Error types for uevent parsing.

/// Result type alias for uevent operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or extending a [`crate::Uevent`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The header line carries no `@` between action and devpath.
    #[error("malformed uevent header: missing '@' separator")]
    MalformedHeader,

    /// An environment token has no `=`.
    #[error("malformed environment entry '{entry}': missing '='")]
    MalformedEnvEntry { entry: String },

    /// No `SEQNUM` entry, or its value holds no digits.
    #[error("uevent carries no usable SEQNUM")]
    MissingSequenceNumber,

    /// `SEQNUM` is present but rejected by strict parsing.
    #[error("invalid SEQNUM value '{value}'")]
    InvalidSequenceNumber { value: String },

    /// The buffer exceeds the configured size limit.
    #[error("uevent buffer too large: {size} > {limit} bytes")]
    BufferTooLarge { size: usize, limit: usize },
}

impl Error {
    pub(crate) fn malformed_entry(entry: &[u8]) -> Self {
        Self::MalformedEnvEntry {
            entry: String::from_utf8_lossy(entry).into_owned(),
        }
    }

    pub(crate) fn invalid_seqnum(value: &[u8]) -> Self {
        Self::InvalidSequenceNumber {
            value: String::from_utf8_lossy(value).into_owned(),
        }
    }
}
