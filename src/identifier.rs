use std::fmt;
use thiserror::Error;

/// Validation failures for a raw identifier string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ean13Error {
    #[error("expected 13 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid digit: '{0}' (U+{1:04X})")]
    InvalidDigit(char, u32),
    #[error("check digit mismatch: computed '{computed}', found '{found}'")]
    InvalidChecksum { computed: char, found: char },
}

/// A validated 13-digit EAN-13 identifier.
///
/// Constructed only through [`Identifier::parse`]; every instance holds
/// exactly 13 ASCII digits whose last digit matches the weighted checksum
/// of the first twelve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Strips whitespace, then validates length, digit characters, and the
    /// check digit.
    pub fn parse(raw: &str) -> Result<Self, Ean13Error> {
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let count = stripped.chars().count();
        if count != 13 {
            return Err(Ean13Error::InvalidLength(count));
        }
        if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Ean13Error::InvalidDigit(bad, bad as u32));
        }
        let bytes = stripped.as_bytes();
        let computed = weighted_check(&bytes[..12]);
        let found = bytes[12] - b'0';
        if computed != found {
            return Err(Ean13Error::InvalidChecksum {
                computed: (computed + b'0') as char,
                found: (found + b'0') as char,
            });
        }
        Ok(Self(stripped))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First digit, which selects the parity pattern for the left half.
    pub fn first_digit(&self) -> char {
        self.0.as_bytes()[0] as char
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the check digit for a 12-digit payload (whitespace ignored).
pub fn check_digit(payload: &str) -> Result<char, Ean13Error> {
    let stripped: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let count = stripped.chars().count();
    if count != 12 {
        return Err(Ean13Error::InvalidLength(count));
    }
    if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_digit()) {
        return Err(Ean13Error::InvalidDigit(bad, bad as u32));
    }
    Ok((weighted_check(stripped.as_bytes()) + b'0') as char)
}

/// Weighted modulo-10 checksum over ASCII digit bytes.
///
/// Even positions (0-indexed from the left) weigh 1, odd positions weigh 3.
/// The modulo formulation `(10 - sum % 10) % 10` yields 0, not 10, when the
/// sum is already a multiple of ten.
fn weighted_check(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, b)| (b - b'0') as u32 * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}
