//! Rasterizing collaborator for the module grid.
//!
//! The core pipeline only produces a boolean grid; this module scales it
//! to pixels (dark module = black, light = white). It reads the grid and
//! never feeds anything back into encoding.

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::models::ModuleGrid;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Render the grid as a grayscale image close to `target_size` pixels
/// square. The module scale is the largest integer that fits, at least 1.
pub fn to_image(grid: &ModuleGrid, target_size: u32) -> GrayImage {
    let modules = grid.size() as u32;
    let scale = (target_size / modules).max(1);
    let image_size = modules * scale;

    let mut image = GrayImage::from_pixel(image_size, image_size, LIGHT);
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if !grid.get(row, col) {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel(col as u32 * scale + dx, row as u32 * scale + dy, DARK);
                }
            }
        }
    }
    image
}

/// Render the grid and write it to `path` as a PNG
pub fn save_png(grid: &ModuleGrid, target_size: u32, path: &Path) -> image::ImageResult<()> {
    to_image(grid, target_size).save_with_format(path, ImageFormat::Png)
}
