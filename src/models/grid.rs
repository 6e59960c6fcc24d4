/// Square module grid for one QR symbol.
///
/// Each cell carries a bit value (true = dark module, false = light) plus
/// a separate "filled" flag. Structural patterns and data placement both
/// write through [`ModuleGrid::set`], which marks the cell filled, so data
/// placement can tell a structurally-light module apart from a cell that
/// has never been written.
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<u8>,
    filled: Vec<u8>,
}

impl ModuleGrid {
    /// Create a grid with all cells light and unfilled
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size + 7) / 8;
        Self {
            size,
            modules: vec![0; bytes_needed],
            filled: vec![0; bytes_needed],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the bit at (row, col); out-of-bounds reads as light
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        (self.modules[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set the bit at (row, col) and mark the cell filled
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        let index = row * self.size + col;
        if value {
            self.modules[index / 8] |= 1 << (index % 8);
        } else {
            self.modules[index / 8] &= !(1 << (index % 8));
        }
        self.filled[index / 8] |= 1 << (index % 8);
    }

    /// Whether the cell at (row, col) has been written
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        (self.filled[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Number of cells never written (available for data)
    pub fn unfilled_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if !self.is_filled(row, col) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_grid() {
        let mut grid = ModuleGrid::new(21);
        assert_eq!(grid.size(), 21);
        assert!(!grid.get(3, 4));
        assert!(!grid.is_filled(3, 4));

        grid.set(3, 4, true);
        assert!(grid.get(3, 4));
        assert!(grid.is_filled(3, 4));

        // Writing a light module still marks the cell filled
        grid.set(5, 5, false);
        assert!(!grid.get(5, 5));
        assert!(grid.is_filled(5, 5));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = ModuleGrid::new(8);
        grid.set(10, 10, true); // Should not panic
        assert!(!grid.get(10, 10));
        assert!(!grid.is_filled(10, 10));
    }

    #[test]
    fn test_unfilled_count() {
        let mut grid = ModuleGrid::new(4);
        assert_eq!(grid.unfilled_count(), 16);
        grid.set(0, 0, true);
        grid.set(0, 1, false);
        assert_eq!(grid.unfilled_count(), 14);
    }
}
