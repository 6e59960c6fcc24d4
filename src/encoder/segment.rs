use crate::encoder::bitstream::BitSequence;
use crate::encoder::modes::Mode;
use crate::error::EncodeError;
use crate::models::Version;

/// Builds the final encodable bit sequence for one segment:
/// mode indicator, then the version-dependent length field, then the
/// mode-encoded payload.
pub struct SegmentBuilder;

impl SegmentBuilder {
    /// Build the segment bit sequence for `text` in `mode` at `version`
    pub fn build(text: &str, mode: Mode, version: Version) -> Result<BitSequence, EncodeError> {
        let encoded = mode.encode(text)?;
        let count = Self::payload_length(text, mode, &encoded);
        let count_bits = mode.char_count_bits(version);

        let mut bits = BitSequence::with_capacity(4 + count_bits + encoded.len());
        bits.push_value(mode.indicator() as u32, 4);
        bits.push_value(count as u32, count_bits);
        bits.extend(&encoded);
        Ok(bits)
    }

    /// Payload length in mode units: characters for numeric and
    /// alphanumeric, bytes for byte mode, double-byte codes for kanji
    fn payload_length(text: &str, mode: Mode, encoded: &BitSequence) -> usize {
        match mode {
            Mode::Numeric | Mode::Alphanumeric => text.chars().count(),
            Mode::Byte => encoded.len() / 8,
            Mode::Kanji => encoded.len() / 13,
        }
    }
}
