use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Score awarded per tier.
///
/// `minimum` is what extracting a depleted cell pays. It is rolled once per session as `max / divisor` and is
/// independent of the other tiers, so it is not guaranteed to be below `quarter`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreValueTable {
    max: u32,
    half: u32,
    quarter: u32,
    minimum: u32,
}

impl OreValueTable {
    pub const fn new(max: u32, minimum: u32) -> Self {
        Self {
            max,
            half: max / 2,
            quarter: max / 4,
            minimum,
        }
    }

    /// Draws the divisor uniformly from `[divisors.0, divisors.1)`, or uses `divisors.0` for an empty range.
    pub fn roll<R: Rng>(max: u32, divisors: (u32, u32), rng: &mut R) -> Self {
        let (low, high) = divisors;
        let divisor = if high > low {
            rng.random_range(low..high)
        } else {
            low
        };
        Self::new(max, max.checked_div(divisor).unwrap_or(0))
    }

    pub const fn value(&self, tier: OreTier) -> u32 {
        match tier {
            OreTier::Max => self.max,
            OreTier::Half => self.half,
            OreTier::Quarter => self.quarter,
            OreTier::None => self.minimum,
        }
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn minimum(&self) -> u32 {
        self.minimum
    }
}
