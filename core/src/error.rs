use thiserror::Error;

use crate::Mode;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid dimensions must be positive")]
    InvalidDimensions,
    #[error("Seed count range is inverted")]
    InvalidPlacementRange,
    #[error("More seeds requested than the grid has cells")]
    TooManySeeds,
    #[error("Maximum ore value must be positive")]
    InvalidOreValue,
    #[error("Minimum ore divisor range must be non-empty and start above zero")]
    InvalidDivisorRange,
    #[error("Could not find an empty cell for a seed")]
    PlacementExhausted,
    #[error("Coordinates are outside the grid")]
    OutOfBounds,
    #[error("No {0} actions left")]
    LimitReached(Mode),
    #[error("Session is over, no new actions are accepted")]
    SessionOver,
}

impl GameError {
    /// Errors raised while building a session, before any state exists.
    pub const fn is_config_error(self) -> bool {
        use GameError::*;
        match self {
            InvalidDimensions
            | InvalidPlacementRange
            | TooManySeeds
            | InvalidOreValue
            | InvalidDivisorRange
            | PlacementExhausted => true,
            OutOfBounds | LimitReached(_) | SessionOver => false,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
