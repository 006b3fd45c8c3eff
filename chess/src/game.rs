use crate::board::Board;
use crate::movegen::MoveList;
use crate::moves::{uci::RawParseError, Move, RawUndo};
use crate::types::{CastlingSide, Cell, Color, Coord, Outcome, Piece};

use std::fmt;

use log::{debug, info};
use thiserror::Error;

/// Error making a move in a [`Game`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already finished")]
    Finished,
    #[error("no piece on {0}")]
    NoPiece(Coord),
    #[error("piece on {0} belongs to the other side")]
    WrongSide(Coord),
    #[error("move {0} is not legal")]
    Illegal(Move),
    #[error("cannot parse move: {0}")]
    Parse(#[from] RawParseError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot make move #{}: {}", .pos + 1, .source)]
pub struct UciListError {
    pub pos: usize,
    pub source: MoveError,
}

#[derive(Debug, Clone)]
struct Entry {
    mv: Move,
    undo: RawUndo,
    notation: String,
}

/// Game in progress
///
/// Keeps the board together with the side to move, the move number and the history of moves.
/// Each move is checked for legality before being applied, and the game ends as soon as the side
/// to move is checkmated or stalemated.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    start_side: Color,
    side: Color,
    move_number: u32,
    stack: Vec<Entry>,
    outcome: Option<Outcome>,
}

fn piece_symbol(p: Piece) -> Option<char> {
    match p {
        Piece::Pawn => None,
        _ => Some(Cell::from_parts(Color::White, p).as_char()),
    }
}

/// Formats the move in basic algebraic notation
///
/// Quiet moves are written as piece symbol plus both squares (`Ng1f3`, `e2e4`). Captures skip
/// the source square (`Bxf7`), except that pawns keep their source file (`exd5`).
fn notation(mv: Move, piece: Piece, u: &RawUndo) -> String {
    if let Ok(side) = CastlingSide::try_from(u.kind()) {
        return match side {
            CastlingSide::King => "O-O".to_string(),
            CastlingSide::Queen => "O-O-O".to_string(),
        };
    }
    match (piece_symbol(piece), u.is_capture()) {
        (Some(sym), true) => format!("{}x{}", sym, mv.dst()),
        (Some(sym), false) => format!("{}{}{}", sym, mv.src(), mv.dst()),
        (None, true) => format!("{}x{}", mv.src().file(), mv.dst()),
        (None, false) => format!("{}{}", mv.src(), mv.dst()),
    }
}

impl Game {
    /// Starts a new game from the initial position
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// Starts a game from an arbitrary position with `side` to move
    ///
    /// The outcome is calculated immediately, so a game can start already finished.
    pub fn from_board(board: Board, side: Color) -> Self {
        let outcome = board.calc_outcome(side);
        Game {
            board,
            start_side: side,
            side,
            move_number: 1,
            stack: Vec::new(),
            outcome,
        }
    }

    /// Starts a new game and plays the moves from space-separated UCI list
    pub fn from_uci_list(uci_list: &str) -> Result<Self, UciListError> {
        let mut res = Game::new();
        res.push_uci_list(uci_list)?;
        Ok(res)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    pub fn side(&self) -> Color {
        self.side
    }

    /// Returns the number of the current full move, starting from 1
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates over the moves made so far
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|e| e.mv)
    }

    /// Iterates over the moves made so far in basic algebraic notation
    pub fn history(&self) -> impl Iterator<Item = &str> + '_ {
        self.stack.iter().map(|e| e.notation.as_str())
    }

    /// Returns the legal moves of the piece on `src`
    ///
    /// The list is empty if `src` doesn't hold a piece of the side to move, or if the game is
    /// finished.
    pub fn legal_moves(&self, src: Coord) -> MoveList {
        if self.is_finished() || self.board.get(src).color() != Some(self.side) {
            return MoveList::new();
        }
        self.board.legal_moves(src)
    }

    /// Checks the move and applies it
    pub fn push(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_finished() {
            return Err(MoveError::Finished);
        }
        let cell = self.board.get(mv.src());
        let piece = match (cell.color(), cell.piece()) {
            (None, _) | (_, None) => return Err(MoveError::NoPiece(mv.src())),
            (Some(c), Some(_)) if c != self.side => return Err(MoveError::WrongSide(mv.src())),
            (Some(_), Some(p)) => p,
        };
        if !self.board.valid_move(mv) {
            return Err(MoveError::Illegal(mv));
        }

        let undo = self.board.apply(mv);
        let notation = notation(mv, piece, &undo);
        debug!("{}. {} {} ({})", self.move_number, self.side, notation, mv);
        self.stack.push(Entry { mv, undo, notation });

        if self.side == Color::Black {
            self.move_number += 1;
        }
        self.side = self.side.inv();
        self.outcome = self.board.calc_outcome(self.side);
        if let Some(outcome) = self.outcome {
            info!("game over after {} moves: {}", self.stack.len(), outcome);
        }
        Ok(())
    }

    /// Parses the move from UCI string and applies it
    pub fn push_uci(&mut self, s: &str) -> Result<(), MoveError> {
        self.push(s.parse()?)
    }

    /// Applies the moves from space-separated UCI list
    ///
    /// Stops at the first failing move. The moves before it stay applied.
    pub fn push_uci_list(&mut self, uci_list: &str) -> Result<(), UciListError> {
        for (pos, token) in uci_list.split_ascii_whitespace().enumerate() {
            self.push_uci(token)
                .map_err(|source| UciListError { pos, source })?;
        }
        Ok(())
    }

    /// Undoes the last move and returns it
    pub fn pop(&mut self) -> Option<Move> {
        let Entry { mv, undo, .. } = self.stack.pop()?;
        self.board.unapply(mv, undo);
        self.side = self.side.inv();
        if self.side == Color::Black {
            self.move_number -= 1;
        }
        self.outcome = None;
        debug!("undone {}", mv);
        Some(mv)
    }

    /// Starts a fresh game from the initial position
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let offset = match self.start_side {
            Color::White => 0,
            Color::Black => 1,
        };
        for (idx, notation) in self.history().enumerate() {
            let ply = idx + offset;
            if idx != 0 {
                write!(f, " ")?;
            }
            if ply % 2 == 0 {
                write!(f, "{}. ", ply / 2 + 1)?;
            } else if idx == 0 {
                write!(f, "{}... ", ply / 2 + 1)?;
            }
            write!(f, "{}", notation)?;
        }
        Ok(())
    }
}
