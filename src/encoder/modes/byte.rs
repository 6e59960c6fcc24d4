use crate::encoder::bitstream::BitSequence;

/// Byte mode encoder (Mode 0100) for 8-bit data
pub struct ByteEncoder;

impl ByteEncoder {
    /// Encode each UTF-8 byte of the text as its own 8-bit field
    pub fn encode(text: &str) -> BitSequence {
        let mut bits = BitSequence::with_capacity(text.len() * 8);
        for &byte in text.as_bytes() {
            bits.push_value(byte as u32, 8);
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        // "HI" = 0x48 0x49
        let bits = ByteEncoder::encode("HI");
        assert_eq!(bits.to_string(), "0100100001001001");
    }

    #[test]
    fn test_multibyte_utf8() {
        // One bit field per UTF-8 byte, not per character
        let bits = ByteEncoder::encode("é");
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.to_bytes(), "é".as_bytes());
    }

    #[test]
    fn test_empty() {
        assert!(ByteEncoder::encode("").is_empty());
    }
}
