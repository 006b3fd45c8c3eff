//! Chess rules engine on a plain 8x8 grid
//!
//! The engine generates legal moves, applies and reverts them, and detects check, checkmate and
//! stalemate. Attack detection is purely geometric, and legality is checked by probing each
//! candidate move on a scratch copy of the board.
//!
//! [`Game`] wraps a [`Board`] with turn order, move history and the game outcome.

pub mod attack;
pub mod between;
pub mod board;
pub mod castling;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod types;

mod legal;

pub use gridchess_base::geometry;

pub use board::Board;
pub use game::Game;
pub use movegen::MoveList;
pub use moves::{Make, Move, MoveKind, RawUndo};
pub use types::{
    CastlingSide, Cell, Color, Coord, DrawReason, File, Outcome, Piece, Rank, WinReason,
};
