use serde::{Deserialize, Serialize};

/// Relative ore richness of a cell, ordered from depleted to richest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OreTier {
    None,
    Quarter,
    Half,
    Max,
}

impl OreTier {
    /// One step down the ladder, `None` stays `None`.
    pub const fn decayed(self) -> Self {
        use OreTier::*;
        match self {
            Max => Half,
            Half => Quarter,
            Quarter | None => None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl Default for OreTier {
    fn default() -> Self {
        Self::None
    }
}

/// State of a single grid cell: the ore it holds and whether terrain still hides it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub ore_tier: OreTier,
    pub has_terrain: bool,
}

impl Cell {
    pub const fn new(ore_tier: OreTier, has_terrain: bool) -> Self {
        Self {
            ore_tier,
            has_terrain,
        }
    }

    /// Exposed ore that still counts towards keeping the session alive.
    pub const fn is_available_ore(self) -> bool {
        !self.has_terrain && !self.ore_tier.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(OreTier::None, true)
    }
}
