use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::Error;

const OAEP_NAME: &str = "oaep";
const PKCS1_NAME: &str = "pkcs1";
const SSLV23_NAME: &str = "sslv23";
const NONE_NAME: &str = "none";

/// RSA encryption padding mode.
///
/// Selects how plaintext is expanded to the key block size before the
/// RSA transform. The mode bounds how much plaintext fits into a single
/// block: `key size - overhead` bytes for the padded modes, exactly one
/// full block for `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Padding {
    /// OAEP with SHA-1, randomized, 41 bytes of overhead
    #[default]
    Oaep,
    /// PKCS#1 v1.5 type 2, randomized padding string, 11 bytes of
    /// minimum overhead
    Pkcs1,
    /// PKCS#1 v1.5 type 2 with the SSLv23 rollback marker bytes
    Sslv23,
    /// No padding; plaintext must be exactly one key block
    None,
}

impl Padding {
    /// Padding overhead in bytes, or `None` for the unpadded mode.
    pub fn overhead(&self) -> Option<usize> {
        match self {
            Padding::Oaep => Some(41),
            Padding::Pkcs1 | Padding::Sslv23 => Some(11),
            Padding::None => None,
        }
    }

    /// The normalized lowercase name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Padding::Oaep => OAEP_NAME,
            Padding::Pkcs1 => PKCS1_NAME,
            Padding::Sslv23 => SSLV23_NAME,
            Padding::None => NONE_NAME,
        }
    }
}

impl Display for Padding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            OAEP_NAME => Ok(Padding::Oaep),
            PKCS1_NAME => Ok(Padding::Pkcs1),
            SSLV23_NAME => Ok(Padding::Sslv23),
            NONE_NAME => Ok(Padding::None),
            _ => Err(Error::InvalidPaddingName {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::error::Error;

    use super::Padding;

    #[rstest(
        input,
        expected,
        case("oaep", Padding::Oaep),
        case("OAEP", Padding::Oaep),
        case("pkcs1", Padding::Pkcs1),
        case("Pkcs1", Padding::Pkcs1),
        case("sslv23", Padding::Sslv23),
        case("SSLV23", Padding::Sslv23),
        case("none", Padding::None),
        case("NONE", Padding::None)
    )]
    fn test_from_str(input: &str, expected: Padding) {
        let got: Padding = input.parse().unwrap();
        assert_eq!(expected, got);
    }

    #[rstest(input, case(""), case("oaep2"), case("pkcs1v15"), case("ssl"))]
    fn test_from_str_invalid(input: &str) {
        let got = input.parse::<Padding>();
        assert_eq!(
            Err(Error::InvalidPaddingName {
                name: input.to_string()
            }),
            got
        );
    }

    #[rstest(
        padding,
        expected,
        case(Padding::Oaep, "oaep"),
        case(Padding::Pkcs1, "pkcs1"),
        case(Padding::Sslv23, "sslv23"),
        case(Padding::None, "none")
    )]
    fn test_display(padding: Padding, expected: &str) {
        assert_eq!(expected, padding.to_string());
    }

    #[rstest(
        padding,
        expected,
        case(Padding::Oaep, Some(41)),
        case(Padding::Pkcs1, Some(11)),
        case(Padding::Sslv23, Some(11)),
        case(Padding::None, None)
    )]
    fn test_overhead(padding: Padding, expected: Option<usize>) {
        assert_eq!(expected, padding.overhead());
    }

    #[test]
    fn test_default_is_oaep() {
        assert_eq!(Padding::Oaep, Padding::default());
    }
}
