use base64::DecodeError;
use hex::FromHexError;
use thiserror::Error;

/// Errors that can occur when converting between raw bytes and a text
/// representation.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The encoding name is not one of the supported encodings
    #[error("unknown encoding {0:?}")]
    UnknownEncoding(String),

    /// Input contains characters outside the ASCII range
    #[error("input is not valid ascii")]
    NonAsciiInput,

    /// Input contains characters above U+00FF
    #[error("input is not representable as latin-1 bytes")]
    NonLatin1Input,

    /// Byte sequence is not valid UTF-8
    #[error("input is not valid utf-8")]
    InvalidUtf8,

    /// Failed to decode hex text
    #[error("hex decode: {0}")]
    Hex(#[from] FromHexError),

    /// Failed to decode base64 text
    #[error("base64 decode: {0}")]
    Base64(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
