use crate::board::Board;
use crate::types::{CastlingSide, Cell, Color, Coord, Piece};
use crate::{castling, geometry};

use std::fmt;

use arrayvec::ArrayVec;
use log::{trace, warn};
use thiserror::Error;

/// Move kind
///
/// The kind is not stored in [`Move`] itself. It is derived from the board when the move is
/// applied, and can be read back from [`RawUndo::kind()`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Nothing happened, as the source square was empty
    #[default]
    Null = 0,
    /// Non-pawn move or capture (except castling)
    Simple = 1,
    /// Kingside castling
    CastlingKingside = 2,
    /// Queenside castling
    CastlingQueenside = 3,
    /// Single pawn move (either non-capture or capture)
    PawnSimple = 4,
    /// Double pawn move
    PawnDouble = 5,
    /// Enpassant
    Enpassant = 6,
    /// Pawn promote to queen (either non-capture or capture)
    PromoteQueen = 7,
}

impl From<CastlingSide> for MoveKind {
    #[inline]
    fn from(side: CastlingSide) -> Self {
        match side {
            CastlingSide::Queen => Self::CastlingQueenside,
            CastlingSide::King => Self::CastlingKingside,
        }
    }
}

impl TryFrom<MoveKind> for CastlingSide {
    type Error = ();

    #[inline]
    fn try_from(kind: MoveKind) -> Result<Self, Self::Error> {
        match kind {
            MoveKind::CastlingQueenside => Ok(CastlingSide::Queen),
            MoveKind::CastlingKingside => Ok(CastlingSide::King),
            _ => Err(()),
        }
    }
}

/// Chess move
///
/// A move is just a pair of squares. Everything else (whether it is a capture, castling,
/// en passant or promotion) follows from the board it is applied to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Coord,
    dst: Coord,
}

/// Error indicating that move is invalid
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// Move is not legal
    #[error("move is not legal")]
    NotLegal,
}

impl Move {
    #[inline]
    pub const fn new(src: Coord, dst: Coord) -> Move {
        Move { src, dst }
    }

    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Parses the move from UCI and checks that it is legal on board `b`
    pub fn from_uci_legal(s: &str, b: &Board) -> Result<Move, super::uci::ParseError> {
        let mv: Move = s.parse()?;
        mv.validate(b)?;
        Ok(mv)
    }

    #[inline]
    pub fn is_legal(&self, b: &Board) -> bool {
        b.valid_move(*self)
    }

    #[inline]
    pub fn validate(&self, b: &Board) -> Result<(), ValidateError> {
        match self.is_legal(b) {
            true => Ok(()),
            false => Err(ValidateError::NotLegal),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

/// Metadata necessary to undo the applied move
///
/// Holds the previous contents of every square the move has touched, so undoing restores the
/// board exactly, "has moved" flags included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUndo {
    kind: MoveKind,
    captured: Option<(Coord, Cell)>,
    prev: ArrayVec<(Coord, Cell), 4>,
    last_move: Option<Move>,
    ep_target: Option<Coord>,
}

impl RawUndo {
    fn new(b: &Board) -> Self {
        RawUndo {
            kind: MoveKind::Null,
            captured: None,
            prev: ArrayVec::new(),
            last_move: b.last_move(),
            ep_target: b.ep_target(),
        }
    }

    fn put(&mut self, b: &mut Board, c: Coord, cell: Cell) {
        self.prev.push((c, b.get(c)));
        b.put(c, cell);
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Returns the captured piece along with the square it was removed from
    ///
    /// For en passant the square differs from the move destination.
    #[inline]
    pub fn captured(&self) -> Option<(Coord, Cell)> {
        self.captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

fn make_castling(b: &mut Board, u: &mut RawUndo, mv: Move, king: Cell, side: CastlingSide) {
    let rank = mv.src.rank();
    let rook_src = Coord::from_parts(geometry::castling_rook_src_file(side), rank);
    let rook_dst = Coord::from_parts(geometry::castling_rook_dst_file(side), rank);
    let rook = b.get(rook_src);
    u.put(b, mv.src, Cell::EMPTY);
    u.put(b, rook_src, Cell::EMPTY);
    u.put(b, mv.dst, king.moved());
    u.put(b, rook_dst, rook.moved());
    u.kind = side.into();
    trace!("castling {}: rook {} -> {}", mv, rook_src, rook_dst);
}

fn make_pawn(b: &mut Board, u: &mut RawUndo, mv: Move, color: Color) {
    u.kind = match mv.src.row().abs_diff(mv.dst.row()) {
        2 => MoveKind::PawnDouble,
        _ => MoveKind::PawnSimple,
    };
    if u.ep_target == Some(mv.dst) && mv.src.col() != mv.dst.col() {
        let victim = Coord::from_parts(mv.dst.file(), mv.src.rank());
        let taken = b.get(victim);
        if taken.is_occupied() {
            u.captured = Some((victim, taken));
        }
        u.put(b, victim, Cell::EMPTY);
        u.kind = MoveKind::Enpassant;
        trace!("en passant {}: removed {:?} from {}", mv, taken, victim);
    }
    if geometry::is_promote_row(mv.dst.row()) {
        u.put(b, mv.dst, Cell::from_parts(color, Piece::Queen).moved());
        u.kind = MoveKind::PromoteQueen;
        trace!("promotion {}", mv);
    }
}

/// Applies the move `mv` on the board `b` without any validation
///
/// The piece on the source square moves to the destination, replacing whatever stood there.
/// Castling, en passant and promotion are recognized from the board contents. If the source
/// square is empty, nothing changes and the returned undo has kind [`MoveKind::Null`].
pub fn make_move_unchecked(b: &mut Board, mv: Move) -> RawUndo {
    let mut u = RawUndo::new(b);
    let cell = b.get(mv.src);
    let (color, piece) = match (cell.color(), cell.piece()) {
        (Some(color), Some(piece)) => (color, piece),
        _ => {
            warn!("applying {} with empty source square", mv);
            return u;
        }
    };

    match castling::side_of(mv.src, mv.dst).filter(|_| piece == Piece::King) {
        Some(side) => make_castling(b, &mut u, mv, cell, side),
        None => {
            let captured = b.get(mv.dst);
            if captured.is_occupied() {
                u.captured = Some((mv.dst, captured));
            }
            u.put(b, mv.src, Cell::EMPTY);
            u.put(b, mv.dst, cell.moved());
            u.kind = MoveKind::Simple;
            if piece == Piece::Pawn {
                make_pawn(b, &mut u, mv, color);
            }
        }
    }

    b.set_last_move(Some(mv));
    let ep_target = match u.kind {
        MoveKind::PawnDouble => {
            Coord::from_row_col((mv.src.row() + mv.dst.row()) as isize / 2, mv.src.col() as isize)
        }
        _ => None,
    };
    b.set_ep_target(ep_target);

    #[cfg(feature = "selftest")]
    assert!(b.get(mv.src).is_empty());

    u
}

/// Reverts the move `mv` previously applied with [`make_move_unchecked()`]
///
/// `u` must be the value returned by that call, and the board must not have been changed since.
pub fn unmake_move_unchecked(b: &mut Board, mv: Move, u: RawUndo) {
    for &(c, cell) in u.prev.iter().rev() {
        b.put(c, cell);
    }
    b.set_last_move(u.last_move);
    b.set_ep_target(u.ep_target);

    #[cfg(feature = "selftest")]
    assert!(u.kind == MoveKind::Null || b.get(mv.src).is_occupied());

    trace!("undone {}", mv);
}
