use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size field of cells, the single owner of terrain and ore state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Fully covered, empty grid.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self {
            cells: Array2::default(size.to_nd_index()),
        })
    }

    pub fn size(&self) -> Coord2 {
        let (dim_x, dim_y) = self.cells.dim();
        // construction only accepts `Coord` sized dimensions
        (dim_x as Coord, dim_y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (size_x, size_y) = self.size();
        mult(size_x, size_y)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords] = cell;
        Ok(())
    }

    pub fn for_each_cell(&self, mut visitor: impl FnMut(Coord2, Cell)) {
        for ((x, y), &cell) in self.cells.indexed_iter() {
            visitor((x as Coord, y as Coord), cell);
        }
    }

    pub fn count_tier(&self, tier: OreTier) -> CellCount {
        self.count_cells(|cell| cell.ore_tier == tier)
    }

    /// Exposed cells that still hold ore.
    pub fn available_ore(&self) -> CellCount {
        self.count_cells(Cell::is_available_ore)
    }

    /// In-bounds coordinates of the window of half-width `radius` around `center`.
    pub fn iter_window(&self, center: Coord2, radius: u16) -> WindowIter {
        self.cells.iter_window(center, radius)
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    fn count_cells(&self, predicate: impl Fn(Cell) -> bool) -> CellCount {
        // a grid never holds more than `CellCount::MAX` cells
        self.cells.iter().filter(|&&cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, (x, y): Coord2) -> &mut Self::Output {
        &mut self.cells[(x as usize, y as usize)]
    }
}
