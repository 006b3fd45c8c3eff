//! Castling geometry and preconditions

use crate::board::Board;
use crate::geometry;
use crate::moves::Move;
use crate::types::{CastlingSide, Color, Coord, File, Piece};

use log::trace;

#[inline]
pub const fn king_src(c: Color) -> Coord {
    Coord::from_parts(File::E, geometry::castling_rank(c))
}

#[inline]
pub const fn king_dst(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(geometry::castling_king_dst_file(s), geometry::castling_rank(c))
}

#[inline]
pub const fn rook_src(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(geometry::castling_rook_src_file(s), geometry::castling_rank(c))
}

#[inline]
pub const fn rook_dst(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(geometry::castling_rook_dst_file(s), geometry::castling_rank(c))
}

/// Castling move of color `c` towards side `s`
#[inline]
pub fn make_move(c: Color, s: CastlingSide) -> Move {
    Move::new(king_src(c), king_dst(c, s))
}

/// Detects the castling side by the king move shape
///
/// A king move is castling iff it goes two columns sideways within its row.
#[inline]
pub fn side_of(src: Coord, dst: Coord) -> Option<CastlingSide> {
    if src.row() != dst.row() || src.col().abs_diff(dst.col()) != 2 {
        return None;
    }
    match dst.col() < src.col() {
        true => Some(CastlingSide::Queen),
        false => Some(CastlingSide::King),
    }
}

/// Squares strictly between the king and the rook
fn pass(c: Color, s: CastlingSide) -> impl Iterator<Item = Coord> {
    let rank = geometry::castling_rank(c);
    let files: &'static [File] = match s {
        CastlingSide::Queen => &[File::B, File::C, File::D],
        CastlingSide::King => &[File::F, File::G],
    };
    files.iter().map(move |&f| Coord::from_parts(f, rank))
}

/// Squares the king stands on or crosses, including both its origin and destination
fn king_path(c: Color, s: CastlingSide) -> impl Iterator<Item = Coord> {
    let rank = geometry::castling_rank(c);
    let files: &'static [File] = match s {
        CastlingSide::Queen => &[File::E, File::D, File::C],
        CastlingSide::King => &[File::E, File::F, File::G],
    };
    files.iter().map(move |&f| Coord::from_parts(f, rank))
}

/// Returns `true` if color `c` may castle towards side `s` on board `b`
///
/// The king and the rook must stand unmoved on their home squares, the squares between them
/// must be empty, and none of the squares on the king path may be attacked. The origin square
/// is part of the path, so a king in check cannot castle.
pub fn is_allowed(b: &Board, c: Color, s: CastlingSide) -> bool {
    let king = b.get(king_src(c));
    if !king.is(c, Piece::King) || king.is_moved() {
        return false;
    }
    let rook = b.get(rook_src(c, s));
    if !rook.is(c, Piece::Rook) || rook.is_moved() {
        return false;
    }
    if pass(c, s).any(|p| b.get(p).is_occupied()) {
        return false;
    }
    if let Some(p) = king_path(c, s).find(|&p| b.square_under_attack(p, c)) {
        trace!("{} cannot castle {:?}: {} is under attack", c, s, p);
        return false;
    }
    true
}
