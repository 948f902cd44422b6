#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use mode::*;
pub use reveal::*;
pub use state::*;
pub use types::*;
pub use values::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod mode;
mod reveal;
mod state;
mod types;
mod values;

/// Session parameters as supplied by the host. Missing fields take the defaults of the classic 16x16 field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub width: Coord,
    pub height: Coord,
    /// Seed count is drawn from `[placement_min, placement_max)`.
    pub placement_min: CellCount,
    pub placement_max: CellCount,
    /// Side of the square scan window, corrected to a positive odd value.
    pub reveal_size: i32,
    pub scan_limit: u32,
    pub extract_limit: u32,
    pub max_ore_value: u32,
    /// The depleted-cell payout is `max_ore_value / d` with `d` drawn from `[low, high)`.
    pub minimum_divisor: (u32, u32),
    /// RNG seed, equal seeds give equal sessions.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            placement_min: 6,
            placement_max: 8,
            reveal_size: 3,
            scan_limit: 10,
            extract_limit: 10,
            max_ore_value: 8000,
            minimum_divisor: (8, 16),
            seed: 0,
        }
    }
}

impl SessionConfig {
    /// Checks every parameter up front, nothing is allocated for an invalid config.
    pub fn validate(&self) -> Result<ValidConfig> {
        let size = (self.width, self.height);
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let seeds = SeedCountRange::new(self.placement_min, self.placement_max)?;
        if seeds.largest() > mult(size.0, size.1) {
            return Err(GameError::TooManySeeds);
        }

        if self.max_ore_value == 0 {
            return Err(GameError::InvalidOreValue);
        }

        let (low, high) = self.minimum_divisor;
        if low == 0 || high < low {
            return Err(GameError::InvalidDivisorRange);
        }

        Ok(ValidConfig {
            size,
            seeds,
            reveal_size: RevealSize::new(self.reveal_size),
            scan_limit: self.scan_limit,
            extract_limit: self.extract_limit,
            max_ore_value: self.max_ore_value,
            minimum_divisor: self.minimum_divisor,
            seed: self.seed,
        })
    }
}

/// Normalized configuration, only obtainable through [`SessionConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValidConfig {
    pub size: Coord2,
    pub seeds: SeedCountRange,
    pub reveal_size: RevealSize,
    pub scan_limit: u32,
    pub extract_limit: u32,
    pub max_ore_value: u32,
    pub minimum_divisor: (u32, u32),
    pub seed: u64,
}
