//! Error type shared by the parsers and adapters

/// Error produced by parsing or decoding a UUID representation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// The input does not follow the canonical or hash-like grammar or carries an invalid
    /// version or variant field. Holds the rejected input.
    #[error("invalid uuid: {0}")]
    InvalidFormat(String),

    /// A database value is neither NULL nor a 16-byte binary value. Holds the received type.
    #[error("uuid: cannot convert {0} to UUID")]
    UnsupportedType(String),
}
