use crate::encoder::bitstream::BitSequence;
use crate::encoder::modes::Mode;
use crate::error::EncodeError;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
/// (index in the table = symbol value)
const ALPHANUMERIC_TABLE: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Alphanumeric mode encoder (Mode 0010)
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Encode text over the 45-symbol alphabet into its bit sequence
    pub fn encode(text: &str) -> Result<BitSequence, EncodeError> {
        let values = text
            .chars()
            .map(Self::symbol_value)
            .collect::<Result<Vec<u32>, _>>()?;

        let mut bits = BitSequence::with_capacity(values.len() / 2 * 11 + 6);
        for pair in values.chunks(2) {
            match *pair {
                [a, b] => bits.push_value(45 * a + b, 11),
                [a] => bits.push_value(a, 6),
                _ => unreachable!("chunks(2) yields one or two values"),
            }
        }
        Ok(bits)
    }

    fn symbol_value(ch: char) -> Result<u32, EncodeError> {
        // The table is pure ASCII, so the byte index is the symbol value
        match ALPHANUMERIC_TABLE.find(ch) {
            Some(index) => Ok(index as u32),
            None => Err(EncodeError::InvalidCharacter {
                mode: Mode::Alphanumeric,
                found: ch.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol() {
        // 'A' has value 10, emitted as 6 bits
        let bits = AlphanumericEncoder::encode("A").unwrap();
        assert_eq!(bits.to_string(), "001010");
    }

    #[test]
    fn test_pair() {
        // "A1" = 45 * 10 + 1 = 451 in 11 bits
        let bits = AlphanumericEncoder::encode("A1").unwrap();
        assert_eq!(bits.to_string(), "00111000011");
    }

    #[test]
    fn test_hello_world() {
        let bits = AlphanumericEncoder::encode("HELLO WORLD").unwrap();
        // 5 pairs of 11 bits plus a trailing 6-bit single
        assert_eq!(bits.len(), 5 * 11 + 6);
        // "HE" = 45 * 17 + 14 = 779
        assert_eq!(&bits.to_string()[..11], "01100001011");
    }

    #[test]
    fn test_punctuation_symbols() {
        // ':' is the last table entry, value 44
        let bits = AlphanumericEncoder::encode(":").unwrap();
        assert_eq!(bits.to_string(), "101100");
    }

    #[test]
    fn test_rejects_lowercase() {
        assert_eq!(
            AlphanumericEncoder::encode("Hi"),
            Err(EncodeError::InvalidCharacter {
                mode: Mode::Alphanumeric,
                found: "i".to_string(),
            })
        );
    }
}
