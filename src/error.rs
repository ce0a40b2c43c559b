//! Error types for static Huffman coding.

use thiserror::Error;

/// Error variants for encode and decode operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The header line is not a well-formed sequence of `<symbol> <count>` pairs.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The payload contains a byte other than ASCII '0' or '1'.
    #[error("invalid payload byte {byte:#04x} at offset {offset}")]
    InvalidPayloadByte {
        /// The offending byte value.
        byte: u8,
        /// Byte offset within the payload.
        offset: usize,
    },

    /// The payload bit sequence ended between code words.
    #[error("truncated payload: bit sequence ends mid-path")]
    TruncatedPayload,

    /// An I/O error occurred during encoding or decoding.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
