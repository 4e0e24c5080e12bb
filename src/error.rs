use std::io;

use thiserror::Error;

/// Errors returned by the Huffman codec.
#[derive(Debug, Error)]
pub enum Error {
    /// The container is truncated or its header and payload disagree.
    #[error("malformed container: {0}")]
    Format(String),
    /// The declared bits ran out while a partial code was still pending.
    #[error("payload ended inside a code ({pending_bits} unmatched bits)")]
    UnmatchedCode { pending_bits: usize },
    /// The input holds a byte the code table has no code for.
    #[error("no code for symbol {0:#04x}")]
    UnknownSymbol(u8),
    /// The encoded stream does not fit in the container's bit-length field.
    #[error("input too large: {0}")]
    InputTooLarge(String),
    /// Reading or writing through a stream adapter failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
