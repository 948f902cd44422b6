use rand::prelude::*;

use super::*;

/// Retry budget per grid cell before placement gives up.
const ATTEMPTS_PER_CELL: u32 = 64;

/// Placement strategy that drops seeds on uniformly random empty cells, then derives the weaker tiers around them.
#[derive(Clone, Debug)]
pub struct RandomOrePlacer {
    rng: SmallRng,
    radii: RingRadii,
}

impl RandomOrePlacer {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            radii: RingRadii::default(),
        }
    }

    pub fn with_radii(mut self, radii: RingRadii) -> Self {
        self.radii = radii;
        self
    }
}

impl OrePlacer for RandomOrePlacer {
    fn place(mut self, grid: &mut Grid, seeds: SeedCountRange) -> Result<SeedList> {
        let seed_count = if seeds.max > seeds.min {
            self.rng.random_range(seeds.min..seeds.max)
        } else {
            seeds.min
        };

        let free_cells = grid.count_tier(OreTier::None);
        if seed_count > free_cells {
            return Err(GameError::TooManySeeds);
        }

        let (size_x, size_y) = grid.size();
        let max_attempts = u32::from(grid.total_cells()).saturating_mul(ATTEMPTS_PER_CELL);
        let mut attempts = 0;
        let mut placed = SeedList::new();

        while placed.len() < usize::from(seed_count) {
            if attempts >= max_attempts {
                log::warn!(
                    "Gave up placing seeds after {} attempts, placed {} of {}",
                    attempts,
                    placed.len(),
                    seed_count
                );
                return Err(GameError::PlacementExhausted);
            }
            attempts += 1;

            let coords = (
                self.rng.random_range(0..size_x),
                self.rng.random_range(0..size_y),
            );
            let cell = &mut grid[coords];
            if !cell.ore_tier.is_none() {
                log::trace!("Seed spot {:?} taken, retrying", coords);
                continue;
            }
            cell.ore_tier = OreTier::Max;
            placed.push(coords);
        }

        derive_rings(grid, &placed, self.radii);

        log::debug!(
            "Placed {} seeds in {} attempts on a {}x{} grid",
            placed.len(),
            attempts,
            size_x,
            size_y
        );
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(size: Coord2, range: (CellCount, CellCount), seed: u64) -> (Grid, SeedList) {
        let mut grid = Grid::new(size).unwrap();
        let seeds = RandomOrePlacer::new(seed)
            .place(&mut grid, SeedCountRange::new(range.0, range.1).unwrap())
            .unwrap();
        (grid, seeds)
    }

    #[test]
    fn seed_count_stays_in_range() {
        for seed in 0..32 {
            let (grid, seeds) = place((16, 16), (6, 8), seed);
            let max_cells = grid.count_tier(OreTier::Max);

            assert!((6..8).contains(&max_cells));
            assert_eq!(usize::from(max_cells), seeds.len());
        }
    }

    #[test]
    fn empty_range_places_exactly_min() {
        let (grid, seeds) = place((5, 5), (3, 3), 11);

        assert_eq!(seeds.len(), 3);
        assert_eq!(grid.count_tier(OreTier::Max), 3);
    }

    #[test]
    fn seeds_are_distinct_and_in_bounds() {
        let (grid, seeds) = place((6, 4), (10, 11), 3);

        for (i, a) in seeds.iter().enumerate() {
            assert!(grid.validate_coords(*a).is_ok());
            assert!(seeds[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn neighbors_of_seeds_are_never_empty() {
        for seed in 0..16 {
            let (grid, seeds) = place((10, 10), (2, 5), seed);

            for &s in &seeds {
                for coords in grid.iter_window(s, 1) {
                    assert!(grid[coords].ore_tier >= OreTier::Half);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(place((12, 9), (4, 9), 42), place((12, 9), (4, 9), 42));
    }

    #[test]
    fn full_grid_can_be_seeded() {
        let (grid, _) = place((3, 3), (9, 9), 5);

        assert_eq!(grid.count_tier(OreTier::Max), 9);
    }

    #[test]
    fn too_many_seeds_fail() {
        let mut grid = Grid::new((2, 2)).unwrap();

        let result = RandomOrePlacer::new(0).place(&mut grid, SeedCountRange::new(5, 5).unwrap());

        assert_eq!(result, Err(GameError::TooManySeeds));
    }
}
