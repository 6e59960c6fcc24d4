//! QR symbol encoding modules
//!
//! This module contains the whole encoding pipeline:
//! - Mode encoders (numeric, alphanumeric, byte, kanji)
//! - Segment building (mode indicator + length field + payload bits)
//! - Reed-Solomon redundancy over GF(256)
//! - Module grid construction and data placement

/// Bit sequence building and byte packing
pub mod bitstream;
/// GF(256) field arithmetic tables
pub mod galois;
/// Module grid construction (finder/timing patterns, data placement)
pub mod matrix_builder;
/// Data mode encoders (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Reed-Solomon redundancy codeword generation
pub mod reed_solomon;
/// Segment header construction
pub mod segment;
