use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Which key material an operation needed or failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Public,
    Private,
    /// Either key satisfies the operation (modulus/exponent extraction)
    Any,
}

impl KeyRole {
    fn missing_key_diagnostic(&self) -> &'static str {
        match self {
            KeyRole::Public => "can't encrypt, no public key",
            KeyRole::Private => "can't decrypt, no private key",
            KeyRole::Any => "no key set",
        }
    }
}

impl Display for KeyRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyRole::Public => write!(f, "public"),
            KeyRole::Private => write!(f, "private"),
            KeyRole::Any => write!(f, "any"),
        }
    }
}

/// Errors reported by [`RsaKeypair`](crate::RsaKeypair) operations.
///
/// All failures are surfaced synchronously; a failed setter leaves the
/// previous state untouched and a failed encrypt/decrypt produces no
/// partial output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input could not be decoded, or the plaintext does not fit the key
    #[error("bad argument: {0}")]
    InvalidArgument(String),

    /// PEM text could not be parsed into the required key type
    #[error("can't parse {role} key: {reason}")]
    KeyParse { role: KeyRole, reason: String },

    /// Unrecognized padding mode name
    #[error("invalid padding {name:?}: padding can be oaep (default), pkcs1, sslv23 or none")]
    InvalidPaddingName { name: String },

    /// The operation requires key material that has not been loaded
    #[error("{}", .0.missing_key_diagnostic())]
    MissingKey(KeyRole),

    /// The underlying cryptographic transform reported an error; `reason`
    /// carries the library diagnostic verbatim
    #[error("RSA {op}: {reason}")]
    CryptoOperation { op: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
