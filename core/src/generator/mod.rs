use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;
pub use random::*;

mod random;

/// Seed coordinates in placement order. Ring derivation depends on this order.
pub type SeedList = SmallVec<[Coord2; 8]>;

pub trait OrePlacer {
    /// Fills `grid` with ore and returns the seeds that anchor it.
    fn place(self, grid: &mut Grid, seeds: SeedCountRange) -> Result<SeedList>;
}

/// Half-open range `[min, max)` the seed count is drawn from. An empty range (`min == max`) always yields `min`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCountRange {
    pub min: CellCount,
    pub max: CellCount,
}

impl SeedCountRange {
    pub fn new(min: CellCount, max: CellCount) -> Result<Self> {
        if max < min {
            return Err(GameError::InvalidPlacementRange);
        }
        Ok(Self { min, max })
    }

    /// Largest count a draw can produce.
    pub const fn largest(self) -> CellCount {
        if self.max > self.min {
            self.max - 1
        } else {
            self.min
        }
    }
}

/// Neighborhood radii used to derive the weaker tiers around every seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingRadii {
    pub half: u16,
    pub quarter: u16,
}

impl Default for RingRadii {
    fn default() -> Self {
        Self {
            half: 1,
            quarter: 2,
        }
    }
}

/// Grows half and quarter rings around each seed, one seed at a time.
///
/// A later seed's half ring overrides an earlier seed's quarter ring where they overlap. `Max` is never downgraded.
pub fn derive_rings(grid: &mut Grid, seeds: &[Coord2], radii: RingRadii) {
    for &seed in seeds {
        for coords in grid.iter_window(seed, radii.half) {
            let cell = &mut grid[coords];
            if cell.ore_tier != OreTier::Max {
                cell.ore_tier = OreTier::Half;
            }
        }

        for coords in grid.iter_window(seed, radii.quarter) {
            let cell = &mut grid[coords];
            if cell.ore_tier < OreTier::Half {
                cell.ore_tier = OreTier::Quarter;
            }
        }
    }
}

/// Places seeds at caller-chosen coordinates, ignoring the count range.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedOrePlacer {
    seeds: SeedList,
    radii: RingRadii,
}

impl FixedOrePlacer {
    pub fn new(seeds: &[Coord2]) -> Self {
        Self {
            seeds: seeds.iter().copied().collect(),
            radii: RingRadii::default(),
        }
    }

    pub fn with_radii(mut self, radii: RingRadii) -> Self {
        self.radii = radii;
        self
    }
}

impl OrePlacer for FixedOrePlacer {
    fn place(self, grid: &mut Grid, _seeds: SeedCountRange) -> Result<SeedList> {
        for &coords in &self.seeds {
            let coords = grid.validate_coords(coords)?;
            grid[coords].ore_tier = OreTier::Max;
        }
        derive_rings(grid, &self.seeds, self.radii);
        Ok(self.seeds)
    }
}
