use encoding_rs::SHIFT_JIS;

use crate::encoder::bitstream::BitSequence;
use crate::encoder::modes::Mode;
use crate::error::EncodeError;

/// Kanji mode encoder (Mode 1000)
///
/// Text is converted to Shift-JIS and each double-byte code is compacted
/// to a 13-bit value. Only the two standard double-byte ranges are
/// encodable; anything else (including single-byte Shift-JIS output) is
/// rejected.
pub struct KanjiEncoder;

impl KanjiEncoder {
    /// Encode text into its kanji-mode bit sequence
    pub fn encode(text: &str) -> Result<BitSequence, EncodeError> {
        let bytes = Self::shift_jis_bytes(text)?;
        if bytes.len() % 2 != 0 {
            return Err(EncodeError::MalformedInput(
                "kanji input is not a whole number of double-byte codes".to_string(),
            ));
        }

        let mut bits = BitSequence::with_capacity(bytes.len() / 2 * 13);
        for pair in bytes.chunks_exact(2) {
            let combined = u16::from_be_bytes([pair[0], pair[1]]);
            let adjusted = match combined {
                0x8140..=0x9FFC => combined - 0x8140,
                0xE040..=0xEBBF => combined - 0xC140,
                _ => {
                    return Err(EncodeError::InvalidCharacter {
                        mode: Mode::Kanji,
                        found: format!("{combined:#06x}"),
                    });
                }
            };
            let code = (adjusted >> 8) as u32 * 0xC0 + (adjusted & 0xFF) as u32;
            bits.push_value(code, 13);
        }
        Ok(bits)
    }

    /// Shift-JIS bytes of the text; unmappable characters are rejected
    fn shift_jis_bytes(text: &str) -> Result<Vec<u8>, EncodeError> {
        let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
        if had_errors {
            let offender = text
                .chars()
                .find(|ch| {
                    let (_, _, failed) = SHIFT_JIS.encode(ch.to_string().as_str());
                    failed
                })
                .map(|ch| ch.to_string())
                .unwrap_or_else(|| text.to_string());
            return Err(EncodeError::InvalidCharacter {
                mode: Mode::Kanji,
                found: offender,
            });
        }
        Ok(bytes.into_owned())
    }
}
