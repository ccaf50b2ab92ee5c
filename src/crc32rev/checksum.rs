//! Checksums as exposed by comment records.

use crate::hasher::Finalize;
use crate::table::CrcTable;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An error occurring when parsing a checksum from hexadecimal text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseChecksumError {
    #[error("empty checksum")]
    Empty,
    #[error("checksum has {0} hex digits, expected at most 8")]
    TooLong(usize),
    #[error("invalid hex digit `{0}`")]
    InvalidDigit(char),
}

/// The conventional (finalized) CRC32 of an identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checksum(pub u32);

impl Checksum {
    /// Computes the checksum of `id` with the standard table.
    pub fn of(id: &str) -> Self {
        Self(CrcTable::standard().checksum(id.as_bytes(), Finalize::Yes))
    }

    /// Creates a checksum from a raw, non-finalized register.
    pub fn from_register(register: u32) -> Self {
        Self(!register)
    }

    /// Returns the raw register the checksum was finalized from.
    pub fn register(self) -> u32 {
        !self.0
    }
}

impl FromStr for Checksum {
    type Err = ParseChecksumError;

    /// Parses hexadecimal text. Upstream drops leading zeros, so fewer than 8 digits is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseChecksumError::Empty);
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseChecksumError::InvalidDigit(c));
        }
        if s.len() > 8 {
            return Err(ParseChecksumError::TooLong(s.len()));
        }
        let val = s
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0, |acc, d| (acc << 4) | d);
        Ok(Self(val))
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn parse_valid() {
        assert_eq!(Checksum::from_str("cbf43926").unwrap(), Checksum(0xcbf43926));
        assert_eq!(Checksum::from_str("CBF43926").unwrap(), Checksum(0xcbf43926));
        assert_eq!(Checksum::from_str(" 0000beef\n").unwrap(), Checksum(0xbeef));
        assert_eq!(Checksum::from_str("beef").unwrap(), Checksum(0xbeef));
    }

    #[test]
    pub fn parse_invalid() {
        assert_eq!(Checksum::from_str(""), Err(ParseChecksumError::Empty));
        assert_eq!(Checksum::from_str("   "), Err(ParseChecksumError::Empty));
        assert_eq!(
            Checksum::from_str("123456789"),
            Err(ParseChecksumError::TooLong(9))
        );
        assert_eq!(
            Checksum::from_str("+1234567"),
            Err(ParseChecksumError::InvalidDigit('+'))
        );
        assert_eq!(
            Checksum::from_str("0x123456"),
            Err(ParseChecksumError::InvalidDigit('x'))
        );
    }

    #[test]
    pub fn display_is_fixed_width() {
        assert_eq!(Checksum(0xbeef).to_string(), "0000beef");
        assert_eq!(Checksum::of("123456789").to_string(), "cbf43926");
    }

    #[test]
    pub fn register_is_complement() {
        let c = Checksum::of("12345678");
        assert_eq!(
            c.register(),
            CrcTable::standard().checksum(b"12345678", Finalize::No)
        );
        assert_eq!(Checksum::from_register(c.register()), c);
    }
}
