//! The simulation grid
//!
//! A fixed-size 2-D array of material cells. Row 0 is the top. Every
//! cell always holds exactly one `Cell`; "empty" space is an air cell.
//! Out-of-bounds coordinates are programmer errors and panic (callers
//! bounds-check before calling).

use smallvec::SmallVec;

use hibana_materials::{Cell, MaterialKind, Materials};

use crate::config::{ConfigError, SimConfig};

/// Neighbor enumeration order: S, SE, E, NE, N, NW, W, SW as
/// `(d_row, d_col)` offsets.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    materials: Materials,
}

impl Grid {
    /// All-air grid. Panics on zero dimensions; use [`Grid::from_config`]
    /// for validated input.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        let materials = Materials::new();
        let cells = (0..width * height)
            .map(|_| materials.create(MaterialKind::Air))
            .collect();
        Self {
            width,
            height,
            cells,
            materials,
        }
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.width, config.height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let index = self.index(row, col);
        &mut self.cells[index]
    }

    /// Overwrite the cell with a fresh default instance of `kind`
    /// (with its own randomized color).
    pub fn replace(&mut self, row: usize, col: usize, kind: MaterialKind) {
        let cell = self.materials.create(kind);
        self.set_cell(row, col, cell);
    }

    /// Raw overwrite, for effects that construct non-default instances
    /// (e.g. weakened explosion waves).
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    /// Exchange two cells in place. Moves are swaps-by-value; a cell is
    /// never shared between two positions.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.cells.swap(ia, ib);
    }

    /// The up-to-8 neighbors of a cell, clipped to grid bounds, in the
    /// fixed order S, SE, E, NE, N, NW, W, SW.
    pub fn neighbors8(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
        let mut result = SmallVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as i32 + dr;
            let c = col as i32 + dc;
            if r >= 0 && (r as usize) < self.height && c >= 0 && (c as usize) < self.width {
                result.push((r as usize, c as usize));
            }
        }
        result
    }

    /// Reset every cell to a fresh air instance ("clear").
    pub fn fill_air(&mut self) {
        for cell in &mut self.cells {
            *cell = self.materials.create(MaterialKind::Air);
        }
    }

    /// Read-only renderer boundary: `(row, col, color)` for a full
    /// redraw.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, [u8; 3])> + '_ {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (i / self.width, i % self.width, cell.color)
        })
    }

    /// Clone of the cell array, taken at tick start; Phase 1 evaluates
    /// against this snapshot while self-mutations land in the live grid.
    pub(crate) fn snapshot(&self) -> Vec<Cell> {
        self.cells.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_air() {
        let grid = Grid::new(5, 4);
        for row in 0..4 {
            for col in 0..5 {
                assert_eq!(grid.get(row, col).kind, MaterialKind::Air);
            }
        }
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_width_panics() {
        Grid::new(0, 4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_get_panics() {
        let grid = Grid::new(3, 3);
        grid.get(3, 0);
    }

    #[test]
    fn test_replace_and_get() {
        let mut grid = Grid::new(3, 3);
        grid.replace(1, 2, MaterialKind::Sand);
        let cell = grid.get(1, 2);
        assert_eq!(cell.kind, MaterialKind::Sand);
        assert_eq!(cell.weight, 10);
    }

    #[test]
    fn test_swap_exchanges_contents() {
        let mut grid = Grid::new(3, 3);
        grid.replace(0, 0, MaterialKind::Sand);
        grid.replace(2, 2, MaterialKind::Water);
        grid.swap((0, 0), (2, 2));
        assert_eq!(grid.get(0, 0).kind, MaterialKind::Water);
        assert_eq!(grid.get(2, 2).kind, MaterialKind::Sand);
    }

    #[test]
    fn test_neighbors8_center_order() {
        let grid = Grid::new(3, 3);
        let neighbors = grid.neighbors8(1, 1);
        // S, SE, E, NE, N, NW, W, SW around the center
        assert_eq!(
            neighbors.as_slice(),
            &[
                (2, 1),
                (2, 2),
                (1, 2),
                (0, 2),
                (0, 1),
                (0, 0),
                (1, 0),
                (2, 0)
            ]
        );
    }

    #[test]
    fn test_neighbors8_corner_is_clipped() {
        let grid = Grid::new(3, 3);
        let neighbors = grid.neighbors8(0, 0);
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&(1, 0)));
        assert!(neighbors.contains(&(1, 1)));
        assert!(neighbors.contains(&(0, 1)));
    }

    #[test]
    fn test_fill_air_clears_and_is_idempotent() {
        let mut grid = Grid::new(4, 4);
        grid.replace(2, 2, MaterialKind::Iron);
        grid.replace(3, 1, MaterialKind::Lava);
        grid.fill_air();
        let first: Vec<MaterialKind> = (0..4)
            .flat_map(|r| (0..4).map(move |c| (r, c)))
            .map(|(r, c)| grid.get(r, c).kind)
            .collect();
        grid.fill_air();
        for (i, (r, c)) in (0..4).flat_map(|r| (0..4).map(move |c| (r, c))).enumerate() {
            assert_eq!(grid.get(r, c).kind, MaterialKind::Air);
            assert_eq!(first[i], MaterialKind::Air);
        }
    }

    #[test]
    fn test_cells_iterator_covers_every_position() {
        let mut grid = Grid::new(3, 2);
        grid.replace(1, 2, MaterialKind::Stone);
        let triples: Vec<(usize, usize, [u8; 3])> = grid.cells().collect();
        assert_eq!(triples.len(), 6);
        let stone = grid.get(1, 2);
        assert!(triples.contains(&(1, 2, stone.color)));
    }

    #[test]
    fn test_from_config_rejects_empty() {
        let config = SimConfig {
            height: 0,
            ..Default::default()
        };
        assert!(Grid::from_config(&config).is_err());
    }
}
