use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Side length of the square scan window, always a positive odd number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSize(u16);

impl RevealSize {
    /// Corrects `size` to the nearest valid value: anything below 1 becomes 1, even values are bumped up.
    pub fn new(size: i32) -> Self {
        let corrected = if size < 1 {
            log::warn!("Reveal size {} is too low, setting to 1", size);
            1
        } else if size % 2 == 0 {
            log::warn!("Reveal size {} is even, setting to {}", size, size + 1);
            size + 1
        } else {
            size
        };
        Self(corrected.clamp(1, i32::from(u16::MAX)) as u16)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Half-width of the scan window.
    pub const fn scan_radius(self) -> u16 {
        self.0 / 2
    }

    /// Half-width of the extract decay window, which is two cells wider than the scan window.
    pub const fn extract_radius(self) -> u16 {
        self.scan_radius() + 1
    }
}

/// Notification for the presentation layer. The core never waits on these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Terrain at `coords` is gone, `origin` is where the scan was aimed.
    TerrainRemoved { coords: Coord2, origin: Coord2 },
    ScorePopup { amount: u32 },
    ModeChanged(Mode),
    GameOver { final_score: u32 },
}

pub type Effects = SmallVec<[Effect; 9]>;

/// What a single accepted action did to the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub mode: Mode,
    pub score_delta: u32,
    pub effects: Effects,
}

/// Applies scan and extract actions to the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEngine {
    size: RevealSize,
    values: OreValueTable,
}

impl RevealEngine {
    pub const fn new(size: RevealSize, values: OreValueTable) -> Self {
        Self { size, values }
    }

    pub const fn size(&self) -> RevealSize {
        self.size
    }

    pub const fn values(&self) -> &OreValueTable {
        &self.values
    }

    /// `coords` must be inside `grid`.
    pub fn apply(&self, grid: &mut Grid, coords: Coord2, mode: Mode) -> RevealReport {
        match mode {
            Mode::Scan => self.scan(grid, coords),
            Mode::Extract => self.extract(grid, coords),
        }
    }

    /// Strips terrain from every covered cell in the window. Ore is left alone.
    fn scan(&self, grid: &mut Grid, origin: Coord2) -> RevealReport {
        let mut effects = Effects::new();

        for coords in grid.iter_window(origin, self.size.scan_radius()) {
            let cell = &mut grid[coords];
            if cell.has_terrain {
                cell.has_terrain = false;
                effects.push(Effect::TerrainRemoved { coords, origin });
            }
        }

        RevealReport {
            mode: Mode::Scan,
            score_delta: 0,
            effects,
        }
    }

    /// Collects the target's ore, clears it, and decays every cell in the wider window by one tier.
    ///
    /// The decay ignores terrain: covered cells lose value too.
    fn extract(&self, grid: &mut Grid, target: Coord2) -> RevealReport {
        let amount = self.values.value(grid[target].ore_tier);
        grid[target].ore_tier = OreTier::None;

        for coords in grid.iter_window(target, self.size.extract_radius()) {
            let cell = &mut grid[coords];
            cell.ore_tier = cell.ore_tier.decayed();
        }

        let mut effects = Effects::new();
        effects.push(Effect::ScorePopup { amount });
        RevealReport {
            mode: Mode::Extract,
            score_delta: amount,
            effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: i32) -> RevealEngine {
        RevealEngine::new(RevealSize::new(size), OreValueTable::new(8000, 1000))
    }

    fn seeded_grid(size: Coord2, seeds: &[Coord2]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        FixedOrePlacer::new(seeds)
            .place(&mut grid, SeedCountRange::new(0, 0).unwrap())
            .unwrap();
        grid
    }

    #[test]
    fn reveal_size_is_corrected_to_positive_odd() {
        assert_eq!(RevealSize::new(-3).get(), 1);
        assert_eq!(RevealSize::new(0).get(), 1);
        assert_eq!(RevealSize::new(1).get(), 1);
        assert_eq!(RevealSize::new(4).get(), 5);
        assert_eq!(RevealSize::new(7).get(), 7);
        assert_eq!(RevealSize::new(3).scan_radius(), 1);
        assert_eq!(RevealSize::new(3).extract_radius(), 2);
    }

    #[test]
    fn scan_removes_terrain_in_window_only() {
        let mut grid = seeded_grid((6, 6), &[(2, 2)]);
        let before = grid.clone();

        let report = engine(3).apply(&mut grid, (2, 2), Mode::Scan);

        assert_eq!(report.score_delta, 0);
        assert_eq!(report.effects.len(), 9);
        grid.for_each_cell(|coords, cell| {
            let inside = (1..=3).contains(&coords.0) && (1..=3).contains(&coords.1);
            assert_eq!(cell.has_terrain, !inside);
            assert_eq!(cell.ore_tier, before[coords].ore_tier);
        });
    }

    #[test]
    fn scan_over_cleared_cells_reports_only_new_removals() {
        let mut grid = Grid::new((4, 4)).unwrap();
        let reveal = engine(3);

        reveal.apply(&mut grid, (0, 0), Mode::Scan);
        let report = reveal.apply(&mut grid, (1, 1), Mode::Scan);

        // (0..=1, 0..=1) was already open
        assert_eq!(report.effects.len(), 5);
        assert!(report.effects.contains(&Effect::TerrainRemoved {
            coords: (2, 2),
            origin: (1, 1),
        }));
    }

    #[test]
    fn extract_awards_tier_value_and_clears_target() {
        let mut grid = seeded_grid((4, 4), &[(1, 1)]);

        let report = engine(3).apply(&mut grid, (1, 1), Mode::Extract);

        assert_eq!(report.score_delta, 8000);
        assert_eq!(report.effects.as_slice(), &[Effect::ScorePopup { amount: 8000 }]);
        assert_eq!(grid[(1, 1)].ore_tier, OreTier::None);
        // terrain is untouched by extraction
        assert!(grid[(1, 1)].has_terrain);
    }

    #[test]
    fn extract_decays_covered_neighbors_by_one_step() {
        let mut grid = seeded_grid((8, 8), &[(3, 3)]);

        engine(3).apply(&mut grid, (3, 3), Mode::Extract);

        // half ring drops to quarter, quarter ring drops to none, all still under terrain
        assert_eq!(grid[(2, 2)].ore_tier, OreTier::Quarter);
        assert_eq!(grid[(4, 3)].ore_tier, OreTier::Quarter);
        assert_eq!(grid[(1, 1)].ore_tier, OreTier::None);
        assert_eq!(grid[(5, 5)].ore_tier, OreTier::None);
        assert!(grid[(2, 2)].has_terrain);
        assert_eq!(grid.count_tier(OreTier::Half), 0);
    }

    #[test]
    fn extract_window_is_clipped_and_bounded() {
        let mut grid = seeded_grid((8, 8), &[(0, 0), (6, 6)]);

        engine(1).apply(&mut grid, (0, 0), Mode::Extract);

        // radius 1 around the corner, the far seed is untouched
        assert_eq!(grid[(1, 1)].ore_tier, OreTier::Quarter);
        assert_eq!(grid[(2, 2)].ore_tier, OreTier::Quarter);
        assert_eq!(grid[(6, 6)].ore_tier, OreTier::Max);
    }

    #[test]
    fn extract_on_depleted_cell_pays_minimum_again() {
        let mut grid = seeded_grid((4, 4), &[(1, 1)]);
        let reveal = engine(3);

        reveal.apply(&mut grid, (1, 1), Mode::Extract);
        let report = reveal.apply(&mut grid, (1, 1), Mode::Extract);

        assert_eq!(report.score_delta, 1000);
        assert_eq!(grid[(1, 1)].ore_tier, OreTier::None);
    }
}
