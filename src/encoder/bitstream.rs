use std::fmt;

/// Ordered bit sequence, most-significant-bit-first within every field.
///
/// Mode encoders and the segment builder append fixed-width big-endian
/// values; once an encoder returns a sequence it is never modified again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Number of bits in the sequence
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn push_value(&mut self, value: u32, width: usize) {
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Append all bits of another sequence
    pub fn extend(&mut self, other: &BitSequence) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Bit at `index`
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Pack into bytes, MSB-first; a trailing partial byte is padded
    /// with zero bits on the right
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; (self.bits.len() + 7) / 8];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                bytes[i / 8] |= 1 << (7 - (i % 8));
            }
        }
        bytes
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
