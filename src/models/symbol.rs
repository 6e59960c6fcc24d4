use crate::error::EncodeError;
use crate::models::ModuleGrid;

/// QR symbol version (1-40), validated at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version(u8);

impl Version {
    /// Create a version, rejecting anything outside 1-40
    pub fn new(version: u8) -> Result<Self, EncodeError> {
        if (1..=40).contains(&version) {
            Ok(Self(version))
        } else {
            Err(EncodeError::UnsupportedVersion(version))
        }
    }

    /// Get the version number (1-40)
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height), 21 for version 1
    pub fn size(self) -> usize {
        4 * self.0 as usize + 17
    }
}

/// A finished symbol: the error-corrected codeword sequence and the
/// module grid ready for rendering.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Version the symbol was built for
    pub version: Version,
    /// Data codewords followed by redundancy codewords
    pub codewords: Vec<u8>,
    /// Module grid, 1 = dark, 0 = light
    pub grid: ModuleGrid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_range() {
        assert!(Version::new(1).is_ok());
        assert!(Version::new(40).is_ok());
        assert_eq!(
            Version::new(0),
            Err(EncodeError::UnsupportedVersion(0))
        );
        assert_eq!(
            Version::new(41),
            Err(EncodeError::UnsupportedVersion(41))
        );
    }

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::new(40).unwrap().size(), 177);
    }
}
