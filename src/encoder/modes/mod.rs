//! QR code data mode encoders
//!
//! This module contains encoders for the four QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Digits, uppercase letters, and a few symbols
//! - Byte: 8-bit data (UTF-8)
//! - Kanji: Shift-JIS double-byte characters, 13 bits each

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use kanji::KanjiEncoder;
pub use numeric::NumericEncoder;

use crate::encoder::bitstream::BitSequence;
use crate::error::EncodeError;
use crate::models::Version;

/// Data encoding mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits 0-9
    Numeric,
    /// The 45-symbol alphanumeric set
    Alphanumeric,
    /// Raw 8-bit bytes
    Byte,
    /// Shift-JIS double-byte characters
    Kanji,
}

impl Mode {
    /// The fixed 4-bit mode indicator placed ahead of the length field
    pub fn indicator(self) -> u8 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Encode the text into this mode's raw bit sequence (no header)
    pub fn encode(self, text: &str) -> Result<BitSequence, EncodeError> {
        match self {
            Mode::Numeric => NumericEncoder::encode(text),
            Mode::Alphanumeric => AlphanumericEncoder::encode(text),
            Mode::Byte => Ok(ByteEncoder::encode(text)),
            Mode::Kanji => KanjiEncoder::encode(text),
        }
    }

    /// Width of the length field for this mode at the given version
    pub fn char_count_bits(self, version: Version) -> usize {
        match self {
            Mode::Numeric => match version.number() {
                1..=9 => 10,
                10..=26 => 12,
                _ => 14,
            },
            Mode::Alphanumeric => match version.number() {
                1..=9 => 9,
                10..=26 => 11,
                _ => 13,
            },
            Mode::Byte | Mode::Kanji => match version.number() {
                1..=9 => 8,
                _ => 16,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators() {
        assert_eq!(Mode::Numeric.indicator(), 0b0001);
        assert_eq!(Mode::Alphanumeric.indicator(), 0b0010);
        assert_eq!(Mode::Byte.indicator(), 0b0100);
        assert_eq!(Mode::Kanji.indicator(), 0b1000);
    }

    #[test]
    fn test_char_count_bits_bands() {
        let v1 = Version::new(1).unwrap();
        let v10 = Version::new(10).unwrap();
        let v27 = Version::new(27).unwrap();

        assert_eq!(Mode::Numeric.char_count_bits(v1), 10);
        assert_eq!(Mode::Numeric.char_count_bits(v10), 12);
        assert_eq!(Mode::Numeric.char_count_bits(v27), 14);

        assert_eq!(Mode::Alphanumeric.char_count_bits(v1), 9);
        assert_eq!(Mode::Alphanumeric.char_count_bits(v10), 11);
        assert_eq!(Mode::Alphanumeric.char_count_bits(v27), 13);

        assert_eq!(Mode::Byte.char_count_bits(v1), 8);
        assert_eq!(Mode::Byte.char_count_bits(v10), 16);
        assert_eq!(Mode::Kanji.char_count_bits(v1), 8);
        assert_eq!(Mode::Kanji.char_count_bits(v27), 16);
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(Mode::Numeric.encode("123").unwrap().len(), 10);
        assert_eq!(Mode::Alphanumeric.encode("A").unwrap().len(), 6);
        assert_eq!(Mode::Byte.encode("A").unwrap().len(), 8);
        assert_eq!(Mode::Kanji.encode("あ").unwrap().len(), 13);
    }
}
