//! Ways to make a move on a board

use super::base::{self, Move, RawUndo, ValidateError};
use super::uci;
use crate::board::Board;

use core::convert::Infallible;

/// Something that can be applied to a board as a move
pub trait Make {
    type Err;

    /// Applies the move to `board` in place, returning the move and the data to undo it
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err>;

    /// Returns a copy of `board` with the move applied
    fn make(&self, board: &Board) -> Result<Board, Self::Err> {
        let mut cloned = board.clone();
        let _ = self.make_raw(&mut cloned)?;
        Ok(cloned)
    }
}

/// Move applied without checking its legality
pub struct Unchecked(Move);

impl Unchecked {
    #[inline]
    pub fn new(mv: Move) -> Self {
        Self(mv)
    }
}

impl Make for Unchecked {
    type Err = Infallible;

    #[inline]
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err> {
        let undo = base::make_move_unchecked(board, self.0);
        Ok((self.0, undo))
    }
}

impl Make for Move {
    type Err = ValidateError;

    #[inline]
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err> {
        self.validate(board)?;
        Unchecked::new(*self).make_raw(board).map_err(|e| match e {})
    }
}

/// Move given as UCI string
pub struct Uci<S: AsRef<str>>(pub S);

impl<S: AsRef<str>> Make for Uci<S> {
    type Err = uci::ParseError;

    #[inline]
    fn make_raw(&self, board: &mut Board) -> Result<(Move, RawUndo), Self::Err> {
        let mv = Move::from_uci_legal(self.0.as_ref(), board)?;
        Unchecked::new(mv).make_raw(board).map_err(|e| match e {})
    }
}
