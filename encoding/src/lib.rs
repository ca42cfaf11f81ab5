pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use base64::{Engine, engine::general_purpose::STANDARD};

pub use error::{Error, Result};

const BINARY_NAME: &str = "binary";
const ASCII_NAME: &str = "ascii";
const UTF8_NAME: &str = "utf8";
const HEX_NAME: &str = "hex";
const BASE64_NAME: &str = "base64";

/// Text representation of a byte sequence.
///
/// Callers pick an encoding when handing text in for encryption or when
/// asking for decrypted bytes back as text. `Binary` (Latin-1, one byte
/// per character) is the default and round-trips arbitrary bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// Latin-1: each character in U+0000..=U+00FF maps to one byte
    #[default]
    Binary,
    /// 7-bit ASCII
    Ascii,
    /// UTF-8
    Utf8,
    /// Lowercase hexadecimal
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Binary => write!(f, "{}", BINARY_NAME),
            TextEncoding::Ascii => write!(f, "{}", ASCII_NAME),
            TextEncoding::Utf8 => write!(f, "{}", UTF8_NAME),
            TextEncoding::Hex => write!(f, "{}", HEX_NAME),
            TextEncoding::Base64 => write!(f, "{}", BASE64_NAME),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            BINARY_NAME => Ok(TextEncoding::Binary),
            ASCII_NAME => Ok(TextEncoding::Ascii),
            UTF8_NAME | "utf-8" => Ok(TextEncoding::Utf8),
            HEX_NAME => Ok(TextEncoding::Hex),
            BASE64_NAME => Ok(TextEncoding::Base64),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

impl TextEncoding {
    /// Decodes `text` into the raw bytes it represents.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Binary => text
                .chars()
                .map(|c| u8::try_from(c as u32).map_err(|_| Error::NonLatin1Input))
                .collect(),
            TextEncoding::Ascii => {
                if !text.is_ascii() {
                    return Err(Error::NonAsciiInput);
                }
                Ok(text.as_bytes().to_vec())
            }
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Hex => Ok(hex::decode(text)?),
            TextEncoding::Base64 => Ok(STANDARD.decode(text)?),
        }
    }

    /// Encodes raw bytes into this text representation.
    ///
    /// `Binary`, `Hex` and `Base64` accept arbitrary bytes; `Ascii` and
    /// `Utf8` reject byte sequences the encoding cannot represent.
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Binary => Ok(data.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Ascii => {
                if !data.is_ascii() {
                    return Err(Error::NonAsciiInput);
                }
                Ok(data.iter().map(|&b| char::from(b)).collect())
            }
            TextEncoding::Utf8 => {
                String::from_utf8(data.to_vec()).map_err(|_| Error::InvalidUtf8)
            }
            TextEncoding::Hex => Ok(hex::encode(data)),
            TextEncoding::Base64 => Ok(STANDARD.encode(data)),
        }
    }
}
