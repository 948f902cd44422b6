use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    Over,
}

impl SessionStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Score, budgets and terminal state of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    controller: ModeController,
    score: Saturating<u32>,
    status: SessionStatus,
}

impl SessionState {
    pub const fn new(controller: ModeController) -> Self {
        Self {
            controller,
            score: Saturating(0),
            status: SessionStatus::Active,
        }
    }

    pub const fn controller(&self) -> &ModeController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ModeController {
        &mut self.controller
    }

    pub const fn score(&self) -> u32 {
        self.score.0
    }

    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score += amount;
    }

    pub fn check_active(&self) -> Result<()> {
        if self.status.is_over() {
            Err(GameError::SessionOver)
        } else {
            Ok(())
        }
    }

    /// Ends the session once no exposed ore is left and the scan budget is spent.
    ///
    /// Returns the game over effect on the transition, `None` otherwise.
    pub fn evaluate(&mut self, grid: &Grid) -> Option<Effect> {
        if self.status.is_over() {
            return None;
        }

        let available_ore = grid.available_ore();
        if available_ore == 0 && self.controller.budget(Mode::Scan).is_exhausted() {
            self.status = SessionStatus::Over;
            log::debug!("Session over with score {}", self.score.0);
            Some(Effect::GameOver {
                final_score: self.score.0,
            })
        } else {
            None
        }
    }
}
