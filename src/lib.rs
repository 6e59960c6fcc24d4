//! qr_symbol - QR code symbol encoding library
//!
//! A pure Rust library that turns text into the redundant bitstream and
//! 2-D module grid a QR-style symbol requires: mode-specific bit packing,
//! Reed-Solomon redundancy over GF(256), and module grid placement.
//!
//! The library only encodes. Data masking, format/version information
//! modules, and decoding of damaged symbols are out of scope.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline modules (modes, segments, Reed-Solomon, grid placement)
pub mod encoder;
/// Typed encoding failures
pub mod error;
/// Core data structures (ModuleGrid, Symbol, Version)
pub mod models;
/// Module grid rasterization
pub mod render;

pub use encoder::bitstream::BitSequence;
pub use encoder::modes::Mode;
pub use error::EncodeError;
pub use models::{ModuleGrid, Symbol, Version};

use encoder::galois::Gf256;
use encoder::matrix_builder::SymbolMatrixBuilder;
use encoder::reed_solomon::ReedSolomonEncoder;
use encoder::segment::SegmentBuilder;

/// Encode `text` into a finished symbol.
///
/// # Arguments
/// * `text` - Source text
/// * `mode` - Data mode to encode with
/// * `version` - Symbol version (1-40; grid geometry is version 1 style)
/// * `ec_words` - Number of Reed-Solomon redundancy codewords to append
///
/// # Returns
/// The final codeword sequence (data followed by redundancy) together
/// with the module grid, ready for [`render`].
///
/// # Example
/// ```
/// use qr_symbol::{encode, Mode};
///
/// let symbol = encode("HELLO WORLD", Mode::Alphanumeric, 1, 10).unwrap();
/// assert_eq!(symbol.grid.size(), 21);
/// ```
pub fn encode(text: &str, mode: Mode, version: u8, ec_words: usize) -> Result<Symbol, EncodeError> {
    let version = Version::new(version)?;

    // Step 1: mode indicator + length field + payload bits
    let bits = SegmentBuilder::build(text, mode, version)?;

    // Step 2: pack the bit sequence into data codewords
    let data = bits.to_bytes();

    // Step 3: append Reed-Solomon redundancy
    let field = Gf256::new();
    let rs = ReedSolomonEncoder::new(&field, ec_words);
    let codewords = rs.encode(&data)?;

    // Step 4: place everything into the module grid
    let grid = SymbolMatrixBuilder::build(version, &codewords);

    Ok(Symbol {
        version,
        codewords,
        grid,
    })
}
