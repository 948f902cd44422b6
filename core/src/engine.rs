use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub mode: Mode,
    pub score_delta: u32,
    /// The action ended the session.
    pub finished: bool,
    /// Notifications for the presentation layer, in the order they happened.
    pub effects: Effects,
}

/// Result of a mode switch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeSwitch {
    pub mode: Mode,
    /// `None` when the session is over and the mode did not change.
    pub effect: Option<Effect>,
}

/// Read-only copy of everything the presentation layer needs to draw a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridView {
    cells: Array2<Cell>,
    pub mode: Mode,
    pub score: u32,
    pub scans: Budget,
    pub extracts: Budget,
    pub status: SessionStatus,
}

impl GridView {
    pub fn size(&self) -> Coord2 {
        let (dim_x, dim_y) = self.cells.dim();
        (dim_x as Coord, dim_y as Coord)
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }
}

/// One play-through: grid contents, the reveal rules and the running state.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    grid: Grid,
    seeds: SeedList,
    reveal: RevealEngine,
    state: SessionState,
}

impl Session {
    /// Builds a session with randomized ore, fully determined by `config.seed`.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let config = config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let values = OreValueTable::roll(config.max_ore_value, config.minimum_divisor, &mut rng);
        Self::with_placer(&config, values, RandomOrePlacer::from_rng(rng))
    }

    /// A layout that already meets the end condition (no scans allowed, nothing exposed) yields a session that is
    /// over from the start.
    pub fn with_placer(
        config: &ValidConfig,
        values: OreValueTable,
        placer: impl OrePlacer,
    ) -> Result<Self> {
        let mut grid = Grid::new(config.size)?;
        let seeds = placer.place(&mut grid, config.seeds)?;

        let mut state = SessionState::new(ModeController::new(
            config.scan_limit,
            config.extract_limit,
        ));
        state.evaluate(&grid);

        Ok(Self {
            grid,
            seeds,
            reveal: RevealEngine::new(config.reveal_size, values),
            state,
        })
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seeds(&self) -> &[Coord2] {
        &self.seeds
    }

    pub fn ore_values(&self) -> &OreValueTable {
        self.reveal.values()
    }

    pub fn mode(&self) -> Mode {
        self.state.controller().mode()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Score once the session is over.
    pub fn final_score(&self) -> Option<u32> {
        self.is_over().then(|| self.state.score())
    }

    pub fn is_over(&self) -> bool {
        self.state.status().is_over()
    }

    pub fn remaining_scans(&self) -> u32 {
        self.state.controller().budget(Mode::Scan).remaining()
    }

    pub fn remaining_extracts(&self) -> u32 {
        self.state.controller().budget(Mode::Extract).remaining()
    }

    pub fn available_ore(&self) -> CellCount {
        self.grid.available_ore()
    }

    /// Whether an action at `coords` would be accepted in the current mode.
    ///
    /// Scanning targets covered cells, extracting targets exposed ones.
    pub fn can_interact_at(&self, coords: Coord2) -> bool {
        let Ok(cell) = self.grid.get(coords) else {
            return false;
        };
        if self.is_over() {
            return false;
        }

        let mode = self.mode();
        if self.state.controller().budget(mode).is_exhausted() {
            return false;
        }
        match mode {
            Mode::Scan => cell.has_terrain,
            Mode::Extract => !cell.has_terrain,
        }
    }

    /// Switches to the next mode. Does nothing once the session is over.
    pub fn advance_mode(&mut self) -> ModeSwitch {
        if self.is_over() {
            return ModeSwitch {
                mode: self.mode(),
                effect: None,
            };
        }

        let mode = self.state.controller_mut().advance();
        log::debug!("Mode changed to {}", mode);
        ModeSwitch {
            mode,
            effect: Some(Effect::ModeChanged(mode)),
        }
    }

    pub fn submit_action(&mut self, coords: Coord2) -> Result<ActionOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.state.check_active()?;

        let report = self
            .state
            .controller_mut()
            .submit_action(coords, &mut self.grid, &self.reveal)?;
        self.state.add_score(report.score_delta);
        log::debug!(
            "{} at {:?} scored {}",
            report.mode,
            coords,
            report.score_delta
        );

        let mut effects = report.effects;
        let finished = match self.state.evaluate(&self.grid) {
            Some(effect) => {
                effects.push(effect);
                true
            }
            None => false,
        };

        Ok(ActionOutcome {
            mode: report.mode,
            score_delta: report.score_delta,
            finished,
            effects,
        })
    }

    pub fn snapshot(&self) -> GridView {
        let controller = self.state.controller();
        GridView {
            cells: self.grid.cells().clone(),
            mode: controller.mode(),
            score: self.state.score(),
            scans: controller.budget(Mode::Scan),
            extracts: controller.budget(Mode::Extract),
            status: self.state.status(),
        }
    }
}
