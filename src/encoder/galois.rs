use crate::error::EncodeError;

/// GF(256) field size
const GF_SIZE: usize = 256;
/// Reduction polynomial x^8 + x^4 + x^3 + x^2 + 1
const GF_POLY: u16 = 0x11D;

/// GF(256) arithmetic with log/exp tables built at construction.
///
/// The exponent table is doubled (512 entries) so that multiplication and
/// division can index it with a raw sum of logarithms, without a modulo.
/// Tables are immutable after `new()`; a single `Gf256` can be shared by
/// reference across any number of encoders without locking.
pub struct Gf256 {
    exp: [u8; GF_SIZE * 2],
    log: [u8; GF_SIZE],
}

impl Gf256 {
    /// Build the exponent and logarithm tables by repeated multiplication
    /// by the generator element 2, reducing with the field polynomial
    /// whenever the running value leaves the field.
    pub fn new() -> Self {
        let mut exp = [0u8; GF_SIZE * 2];
        let mut log = [0u8; GF_SIZE];

        let mut x: u16 = 1;
        for i in 0..GF_SIZE - 1 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x >= GF_SIZE as u16 {
                x ^= GF_POLY;
            }
        }
        // The multiplicative group has order 255, so the table repeats
        for i in GF_SIZE - 1..exp.len() {
            exp[i] = exp[i - (GF_SIZE - 1)];
        }

        Self { exp, log }
    }

    /// alpha^i, the i-th power of the generator element
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % (GF_SIZE - 1)]
    }

    /// Field multiplication
    pub fn mul(&self, x: u8, y: u8) -> u8 {
        if x == 0 || y == 0 {
            return 0;
        }
        // log x + log y <= 508, within the doubled table
        self.exp[self.log[x as usize] as usize + self.log[y as usize] as usize]
    }

    /// Field division; `div(0, y)` is 0, a zero divisor is an error
    pub fn div(&self, x: u8, y: u8) -> Result<u8, EncodeError> {
        if y == 0 {
            return Err(EncodeError::DivisionByZero);
        }
        if x == 0 {
            return Ok(0);
        }
        let diff = self.log[x as usize] as usize + (GF_SIZE - 1) - self.log[y as usize] as usize;
        Ok(self.exp[diff])
    }
}

impl Default for Gf256 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_anchors() {
        let field = Gf256::new();
        // alpha^0 = 1, log 1 = 0
        assert_eq!(field.exp(0), 1);
        assert_eq!(field.log[1], 0);
        // alpha^1 = 2, alpha^8 reduces through the field polynomial
        assert_eq!(field.exp(1), 2);
        assert_eq!(field.exp(8), (GF_POLY ^ 0x100) as u8);
        // The doubled table repeats with period 255
        assert_eq!(field.exp[255], field.exp[0]);
        assert_eq!(field.exp[300], field.exp[45]);
    }

    #[test]
    fn test_mul_zero() {
        let field = Gf256::new();
        for x in 0..=255u8 {
            assert_eq!(field.mul(x, 0), 0);
            assert_eq!(field.mul(0, x), 0);
        }
    }

    #[test]
    fn test_mul_div_roundtrip() {
        let field = Gf256::new();
        for x in 1..=255u8 {
            for y in 1..=255u8 {
                let product = field.mul(x, y);
                assert_ne!(product, 0);
                assert_eq!(field.div(product, y).unwrap(), x);
                assert_eq!(field.mul(y, x), product);
            }
        }
    }

    #[test]
    fn test_div_identities() {
        let field = Gf256::new();
        for x in 1..=255u8 {
            assert_eq!(field.div(x, x).unwrap(), 1);
            assert_eq!(field.div(x, 1).unwrap(), x);
            assert_eq!(field.div(0, x).unwrap(), 0);
        }
    }

    #[test]
    fn test_div_by_zero() {
        let field = Gf256::new();
        for x in 0..=255u8 {
            assert_eq!(field.div(x, 0), Err(EncodeError::DivisionByZero));
        }
    }
}
