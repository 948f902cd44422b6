use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Interaction mode, cycled in a fixed order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Scan,
    Extract,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Scan, Mode::Extract];

    /// Next mode in the cycle, wrapping after the last.
    pub const fn next(self) -> Self {
        match self {
            Self::Scan => Self::Extract,
            Self::Extract => Self::Scan,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Scan
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scan => "scan",
            Self::Extract => "extract",
        })
    }
}

/// Bounded action counter for one mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    used: u32,
    limit: u32,
}

impl Budget {
    pub const fn new(limit: u32) -> Self {
        Self { used: 0, limit }
    }

    pub const fn used(self) -> u32 {
        self.used
    }

    pub const fn limit(self) -> u32 {
        self.limit
    }

    pub const fn remaining(self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    pub const fn is_exhausted(self) -> bool {
        self.used >= self.limit
    }

    fn consume(&mut self) -> bool {
        if self.is_exhausted() {
            false
        } else {
            self.used += 1;
            true
        }
    }
}

/// Current mode plus per-mode budgets. Gatekeeper in front of the [`RevealEngine`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeController {
    mode: Mode,
    scans: Budget,
    extracts: Budget,
}

impl ModeController {
    pub const fn new(scan_limit: u32, extract_limit: u32) -> Self {
        Self {
            mode: Mode::Scan,
            scans: Budget::new(scan_limit),
            extracts: Budget::new(extract_limit),
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn budget(&self, mode: Mode) -> Budget {
        match mode {
            Mode::Scan => self.scans,
            Mode::Extract => self.extracts,
        }
    }

    pub fn advance(&mut self) -> Mode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Spends one action of the current mode and applies it to the grid.
    ///
    /// An exhausted budget rejects the action with [`GameError::LimitReached`] and leaves everything untouched.
    /// Coordinates must already be validated against `grid`.
    pub fn submit_action(
        &mut self,
        coords: Coord2,
        grid: &mut Grid,
        reveal: &RevealEngine,
    ) -> Result<RevealReport> {
        let mode = self.mode;
        let budget = match mode {
            Mode::Scan => &mut self.scans,
            Mode::Extract => &mut self.extracts,
        };
        if !budget.consume() {
            return Err(GameError::LimitReached(mode));
        }

        Ok(reveal.apply(grid, coords, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RevealEngine {
        RevealEngine::new(RevealSize::new(1), OreValueTable::new(100, 10))
    }

    #[test]
    fn advance_cycles_and_wraps() {
        let mut controller = ModeController::new(1, 1);

        assert_eq!(controller.mode(), Mode::Scan);
        assert_eq!(controller.advance(), Mode::Extract);
        assert_eq!(controller.advance(), Mode::Scan);
    }

    #[test]
    fn budgets_are_counted_per_mode() {
        let mut grid = Grid::new((3, 3)).unwrap();
        let reveal = engine();
        let mut controller = ModeController::new(2, 1);

        controller.submit_action((0, 0), &mut grid, &reveal).unwrap();
        controller.advance();
        controller.submit_action((0, 0), &mut grid, &reveal).unwrap();

        assert_eq!(controller.budget(Mode::Scan).used(), 1);
        assert_eq!(controller.budget(Mode::Scan).remaining(), 1);
        assert_eq!(controller.budget(Mode::Extract).used(), 1);
        assert!(controller.budget(Mode::Extract).is_exhausted());
    }

    #[test]
    fn exhausted_budget_rejects_without_mutation() {
        let mut grid = Grid::new((3, 3)).unwrap();
        let reveal = engine();
        let mut controller = ModeController::new(0, 0);
        let before = grid.clone();

        assert_eq!(
            controller.submit_action((1, 1), &mut grid, &reveal),
            Err(GameError::LimitReached(Mode::Scan))
        );
        assert_eq!(grid, before);
        assert_eq!(controller.budget(Mode::Scan).used(), 0);
    }
}
