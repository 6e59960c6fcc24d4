use crate::models::{ModuleGrid, Version};

/// Builds the module grid for one symbol: structural patterns first,
/// then the error-corrected codewords zigzagged into the free cells.
///
/// Structural cells are marked filled when drawn, so data placement can
/// never overwrite them, including the light ring inside a finder block.
pub struct SymbolMatrixBuilder;

impl SymbolMatrixBuilder {
    /// Build the grid for `version` and place `bytes` into it
    pub fn build(version: Version, bytes: &[u8]) -> ModuleGrid {
        let size = version.size();
        let mut grid = ModuleGrid::new(size);

        Self::draw_finder_pattern(&mut grid, 0, 0);
        Self::draw_finder_pattern(&mut grid, 0, size - 7);
        Self::draw_finder_pattern(&mut grid, size - 7, 0);
        Self::draw_timing_pattern(&mut grid);

        Self::place_data(&mut grid, bytes);
        grid
    }

    /// 7x7 finder block at the given top-left anchor: outer border and the
    /// central 3x3 dark, the ring between them light
    fn draw_finder_pattern(grid: &mut ModuleGrid, row: usize, col: usize) {
        for i in 0..7 {
            for j in 0..7 {
                let is_border = i == 0 || i == 6 || j == 0 || j == 6;
                let is_center = (2..=4).contains(&i) && (2..=4).contains(&j);
                grid.set(row + i, col + j, is_border || is_center);
            }
        }
    }

    /// Alternating modules along row 6 and column 6, between the finders
    fn draw_timing_pattern(grid: &mut ModuleGrid) {
        let size = grid.size();
        for i in 8..size - 8 {
            grid.set(6, i, i % 2 == 0);
            grid.set(i, 6, i % 2 == 0);
        }
    }

    /// Zigzag the data bits into the unfilled cells.
    ///
    /// Starts at the bottom-right corner and walks column pairs leftwards,
    /// skipping the timing column; within a pair the first sweep runs
    /// bottom to top and the second top to bottom. One bit per unfilled
    /// cell, MSB-first within each byte, until the bytes run out or the
    /// column boundary is reached.
    fn place_data(grid: &mut ModuleGrid, bytes: &[u8]) {
        let size = grid.size();
        let total_bits = bytes.len() * 8;
        let mut bit_index = 0usize;

        let mut col = size - 1;
        while col > 0 && bit_index < total_bits {
            for (sweep, c) in [col, col - 1].into_iter().enumerate() {
                if c == 6 {
                    continue; // timing column
                }
                if sweep == 0 {
                    for row in (0..size).rev() {
                        Self::place_bit(grid, row, c, bytes, &mut bit_index);
                    }
                } else {
                    for row in 0..size {
                        Self::place_bit(grid, row, c, bytes, &mut bit_index);
                    }
                }
            }
            if col < 2 {
                break;
            }
            col -= 2;
        }
    }

    fn place_bit(
        grid: &mut ModuleGrid,
        row: usize,
        col: usize,
        bytes: &[u8],
        bit_index: &mut usize,
    ) {
        if grid.is_filled(row, col) {
            return;
        }
        let byte_index = *bit_index / 8;
        if byte_index >= bytes.len() {
            return;
        }
        let bit = (bytes[byte_index] >> (7 - (*bit_index % 8))) & 1;
        grid.set(row, col, bit == 1);
        *bit_index += 1;
    }
}
