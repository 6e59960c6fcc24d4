use crate::encoder::bitstream::BitSequence;
use crate::encoder::modes::Mode;
use crate::error::EncodeError;

/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericEncoder;

impl NumericEncoder {
    /// Encode a digit string into its numeric-mode bit sequence
    pub fn encode(text: &str) -> Result<BitSequence, EncodeError> {
        let digits = text
            .chars()
            .map(|ch| {
                ch.to_digit(10).ok_or_else(|| EncodeError::InvalidCharacter {
                    mode: Mode::Numeric,
                    found: ch.to_string(),
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let mut bits = BitSequence::with_capacity(digits.len() / 3 * 10 + 10);
        for group in digits.chunks(3) {
            let value = group.iter().fold(0u32, |acc, &d| acc * 10 + d);
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            bits.push_value(value, width);
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_group() {
        // 123 as one 10-bit group
        let bits = NumericEncoder::encode("123").unwrap();
        assert_eq!(bits.to_string(), "0001111011");
    }

    #[test]
    fn test_two_digit_remainder() {
        // 12 as a 7-bit group
        let bits = NumericEncoder::encode("12").unwrap();
        assert_eq!(bits.to_string(), "0001100");
    }

    #[test]
    fn test_mixed_groups() {
        // 8675309: two full groups plus a single digit
        let bits = NumericEncoder::encode("8675309").unwrap();
        assert_eq!(bits.len(), 10 + 10 + 4);
        // 867 = 1101100011, 530 = 1000010010, 9 = 1001
        assert_eq!(bits.to_string(), "110110001110000100101001");
    }

    #[test]
    fn test_empty_input() {
        let bits = NumericEncoder::encode("").unwrap();
        assert!(bits.is_empty());
    }

    #[test]
    fn test_rejects_non_digit() {
        assert_eq!(
            NumericEncoder::encode("12a"),
            Err(EncodeError::InvalidCharacter {
                mode: Mode::Numeric,
                found: "a".to_string(),
            })
        );
    }
}
