//! Reed-Solomon redundancy generation for QR symbols.
//! QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1.
//!
//! Polynomials are coefficient vectors in descending power order: index 0
//! is the highest-degree term and `len == degree + 1`.

use crate::encoder::galois::Gf256;
use crate::error::EncodeError;

/// Appends `ec_words` redundancy codewords to a data codeword sequence.
///
/// Shares a [`Gf256`] by reference; the field tables are immutable, so one
/// field can serve any number of encoders.
pub struct ReedSolomonEncoder<'a> {
    field: &'a Gf256,
    ec_words: usize,
}

impl<'a> ReedSolomonEncoder<'a> {
    /// Create an encoder producing `ec_words` redundancy codewords
    pub fn new(field: &'a Gf256, ec_words: usize) -> Self {
        Self { field, ec_words }
    }

    /// Encode `data`, returning the data codewords followed by the
    /// remainder of dividing them by the generator polynomial.
    ///
    /// Fails with `CapacityExceeded` when `data.len() + ec_words` would
    /// reach 256, since codewords must stay representable in-field.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        if data.len() + self.ec_words >= 256 {
            return Err(EncodeError::CapacityExceeded {
                data_len: data.len(),
                ec_words: self.ec_words,
            });
        }

        let generator = self.generator_polynomial(self.ec_words);
        let remainder = self.divide_polynomials(data, &generator);

        let mut codewords = data.to_vec();
        codewords.extend_from_slice(&remainder);
        Ok(codewords)
    }

    /// Build the generator polynomial (x + alpha^0)(x + alpha^1)...,
    /// degree `ec_words`. Addition and subtraction are both XOR here.
    fn generator_polynomial(&self, ec_words: usize) -> Vec<u8> {
        let mut generator = vec![1u8];
        for i in 0..ec_words {
            let term = [1, self.field.exp(i)];
            generator = self.multiply_polynomials(&generator, &term);
        }
        generator
    }

    /// Polynomial product: convolution with field multiplication,
    /// XOR-accumulated at the summed index
    fn multiply_polynomials(&self, a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut product = vec![0u8; a.len() + b.len() - 1];
        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                product[i + j] ^= self.field.mul(ai, bj);
            }
        }
        product
    }

    /// Synthetic long division of `data * x^(generator degree)` by the
    /// generator; the returned tail is the redundancy codewords.
    fn divide_polynomials(&self, data: &[u8], generator: &[u8]) -> Vec<u8> {
        let mut dividend = data.to_vec();
        dividend.resize(data.len() + generator.len() - 1, 0);

        for i in 0..data.len() {
            let coefficient = dividend[i];
            if coefficient != 0 {
                for (j, &g) in generator.iter().enumerate() {
                    dividend[i + j] ^= self.field.mul(g, coefficient);
                }
            }
        }

        dividend.split_off(data.len())
    }
}
