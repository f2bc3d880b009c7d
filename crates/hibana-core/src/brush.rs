//! Painting tool
//!
//! The brush stamps a centered square of fresh material instances onto
//! the grid. Sizes are always odd so the stamp has a true center; even
//! requests round down.

use hibana_materials::MaterialKind;

use crate::grid::Grid;

#[derive(Clone, Copy, Debug)]
pub struct Brush {
    size: usize,
    pub material: MaterialKind,
}

impl Brush {
    pub fn new(size: usize, material: MaterialKind) -> Self {
        Self {
            size: normalize_size(size),
            material,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = normalize_size(size);
    }

    /// Stamp a `size x size` square centered on `(row, col)`, clipped
    /// to the grid. Every covered cell is overwritten with a fresh
    /// instance, including with air (which is how erasing works).
    pub fn paint(&self, grid: &mut Grid, row: usize, col: usize) {
        let half = (self.size / 2) as i32;
        for dr in -half..=half {
            for dc in -half..=half {
                let r = row as i32 + dr;
                let c = col as i32 + dc;
                if r >= 0 && (r as usize) < grid.height() && c >= 0 && (c as usize) < grid.width() {
                    grid.replace(r as usize, c as usize, self.material);
                }
            }
        }
        log::debug!(
            "painted {} at ({row}, {col}) size {}",
            self.material.name(),
            self.size
        );
    }
}

/// Clamp to the nearest odd size at or below the request, minimum 1.
fn normalize_size(size: usize) -> usize {
    let size = size.max(1);
    if size % 2 == 0 {
        size - 1
    } else {
        size
    }
}
