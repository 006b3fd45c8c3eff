//! Core chess types
//!
//! Coordinates, pieces and cells come from `gridchess_base` and are re-exported here. This module
//! adds the game outcome types.

pub use gridchess_base::types::*;

use derive_more::Display;
use std::fmt;

/// Reason for a win
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// The losing side is in check and has no legal moves
    #[display(fmt = "checkmate")]
    Checkmate,
}

/// Reason for a draw
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// The side to move is not in check, but has no legal moves
    #[display(fmt = "stalemate")]
    Stalemate,
}

/// Outcome of the game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// One of the sides wins
    Win { side: Color, reason: WinReason },
    /// The game is drawn
    Draw(DrawReason),
}

impl Outcome {
    /// Returns the winning side, or `None` in case of a draw
    pub fn winner(&self) -> Option<Color> {
        match self {
            Self::Win { side, .. } => Some(*side),
            Self::Draw(_) => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Self::Draw(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Win { side, reason } => write!(f, "{} wins by {}", side, reason),
            Self::Draw(reason) => write!(f, "draw by {}", reason),
        }
    }
}
