use thiserror::Error;

/// Text input to a constant-time comparison contained characters outside the
/// single-byte range, where the timing guarantees no longer hold.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("text contains characters outside the single-byte range")]
pub struct InvalidEncoding;

/// Failure to recover a secret from its masked wire form.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum UnmaskError {
    /// The value is not even-length hex, is too short to carry a type tag,
    /// or its payload does not match the tag.
    #[error("malformed masked value")]
    MalformedEncoding,

    /// The decrypted payload carries a type tag we don't know. Masked values
    /// are never persisted, so this is corruption or a forgery rather than a
    /// version skew.
    #[error("unknown tag version: {0:#04x}")]
    UnknownTagVersion(u8),
}
