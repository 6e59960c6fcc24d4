use thiserror::Error;

use crate::encoder::modes::Mode;

/// Errors that can occur while encoding a symbol.
///
/// Every failure is detected at the point of occurrence and surfaced
/// immediately; a failed encode produces no bit sequence, no codewords
/// and no grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Source text contains a character the selected mode cannot represent.
    #[error("character {found} is not valid in {mode:?} mode")]
    InvalidCharacter {
        /// Mode that rejected the character
        mode: Mode,
        /// Offending character (or double-byte code for kanji)
        found: String,
    },

    /// Input cannot be split into the units the mode operates on.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Symbol version outside the supported 1-40 range.
    #[error("unsupported version {0}, expected 1-40")]
    UnsupportedVersion(u8),

    /// A GF(256) division was attempted with a zero divisor.
    #[error("division by zero in GF(256)")]
    DivisionByZero,

    /// Data plus redundancy words would no longer fit in GF(256).
    #[error("{data_len} data codewords plus {ec_words} error correction words exceed the 255 codeword limit")]
    CapacityExceeded {
        /// Number of data codewords supplied
        data_len: usize,
        /// Number of redundancy codewords requested
        ec_words: usize,
    },
}
