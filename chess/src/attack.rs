//! Geometric attack detection
//!
//! The functions here only look at the piece geometry and the squares in between. They never
//! check whether the attacking piece is pinned or whether its own king is safe, so they can be
//! used to answer "is this square under attack?" without recursing into legal move generation.

use crate::between;
use crate::board::Board;
use crate::geometry;
use crate::types::{Cell, Color, Coord, Piece};

use arrayvec::ArrayVec;

/// List of squares small enough to hold all the attackers of a single square
pub type CoordList = ArrayVec<Coord, 16>;

/// Squares attacked by a pawn of color `c` standing on `src`
#[inline]
pub fn pawn(c: Color, src: Coord) -> impl Iterator<Item = Coord> {
    let forward = geometry::pawn_forward(c);
    [-1, 1]
        .into_iter()
        .filter_map(move |delta_col| src.try_shift(forward, delta_col))
}

/// Squares attacked by a knight standing on `src`
#[inline]
pub fn knight(src: Coord) -> impl Iterator<Item = Coord> {
    Piece::Knight
        .directions()
        .iter()
        .filter_map(move |&(dr, dc)| src.try_shift(dr, dc))
}

#[inline]
fn king(src: Coord, dst: Coord) -> bool {
    let dr = src.row().abs_diff(dst.row());
    let dc = src.col().abs_diff(dst.col());
    dr <= 1 && dc <= 1
}

#[inline]
fn diag(b: &Board, src: Coord, dst: Coord) -> bool {
    between::bishop_strict(src, dst).map_or(false, |path| between::is_clear(b, path))
}

#[inline]
fn line(b: &Board, src: Coord, dst: Coord) -> bool {
    between::rook_strict(src, dst).map_or(false, |path| between::is_clear(b, path))
}

/// Returns `true` if the piece `cell` standing on `src` attacks the square `dst`
///
/// The contents of `dst` are not inspected, so this also answers whether the piece would
/// defend a friendly piece on `dst`. Pawns attack only diagonally forward. A piece never
/// attacks its own square.
pub fn can_attack(b: &Board, cell: Cell, src: Coord, dst: Coord) -> bool {
    if src == dst {
        return false;
    }
    let (color, piece) = match (cell.color(), cell.piece()) {
        (Some(color), Some(piece)) => (color, piece),
        _ => return false,
    };
    match piece {
        Piece::Pawn => pawn(color, src).any(|c| c == dst),
        Piece::Knight => knight(src).any(|c| c == dst),
        Piece::King => king(src, dst),
        Piece::Bishop => diag(b, src, dst),
        Piece::Rook => line(b, src, dst),
        Piece::Queen => diag(b, src, dst) || line(b, src, dst),
    }
}

/// Returns `true` if any piece of color `by` attacks `dst`
pub fn is_cell_attacked(b: &Board, dst: Coord, by: Color) -> bool {
    Coord::iter().any(|src| {
        let cell = b.get(src);
        cell.color() == Some(by) && can_attack(b, cell, src, dst)
    })
}

/// Returns all the pieces of color `by` attacking `dst`
pub fn attackers(b: &Board, dst: Coord, by: Color) -> CoordList {
    Coord::iter()
        .filter(|&src| {
            let cell = b.get(src);
            cell.color() == Some(by) && can_attack(b, cell, src, dst)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};
    use std::str::FromStr;

    fn sq(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    #[test]
    fn test_pawn_attacks() {
        let b = Board::empty();
        let pawn = Cell::from_parts(Color::White, Piece::Pawn);
        assert!(can_attack(&b, pawn, sq("e2"), sq("d3")));
        assert!(can_attack(&b, pawn, sq("e2"), sq("f3")));
        assert!(!can_attack(&b, pawn, sq("e2"), sq("e3")));
        assert!(!can_attack(&b, pawn, sq("e2"), sq("d1")));

        let pawn = Cell::from_parts(Color::Black, Piece::Pawn);
        assert!(can_attack(&b, pawn, sq("a7"), sq("b6")));
        assert!(!can_attack(&b, pawn, sq("a7"), sq("b8")));
        assert_eq!(
            super::pawn(Color::Black, sq("a7")).collect::<Vec<_>>(),
            vec![sq("b6")]
        );
    }

    #[test]
    fn test_sliders_blocked() {
        let b = Board::from_str(
            "........\n\
             ........\n\
             ........\n\
             ...p....\n\
             ........\n\
             .B......\n\
             ........\n\
             R..n....",
        )
        .unwrap();
        let bishop = b.get(sq("b3"));
        assert!(can_attack(&b, bishop, sq("b3"), sq("d5")));
        assert!(!can_attack(&b, bishop, sq("b3"), sq("e6")));
        assert!(can_attack(&b, bishop, sq("b3"), sq("a2")));
        assert!(!can_attack(&b, bishop, sq("b3"), sq("b4")));

        let rook = b.get(sq("a1"));
        assert!(can_attack(&b, rook, sq("a1"), sq("d1")));
        assert!(!can_attack(&b, rook, sq("a1"), sq("e1")));
        assert!(can_attack(&b, rook, sq("a1"), sq("a8")));
        assert!(!can_attack(&b, rook, sq("a1"), sq("a1")));

        let queen = Cell::from_parts(Color::White, Piece::Queen);
        assert!(can_attack(&b, queen, sq("b3"), sq("d5")));
        assert!(can_attack(&b, queen, sq("b3"), sq("b8")));
        assert!(!can_attack(&b, queen, sq("b3"), sq("c5")));
    }

    #[test]
    fn test_step_pieces() {
        let b = Board::empty();
        let knight = Cell::from_parts(Color::Black, Piece::Knight);
        let g1 = Coord::from_parts(File::G, Rank::R1);
        let mut targets: Vec<_> = Coord::iter()
            .filter(|&c| can_attack(&b, knight, g1, c))
            .collect();
        targets.sort();
        let mut expected = vec![sq("e2"), sq("f3"), sq("h3")];
        expected.sort();
        assert_eq!(targets, expected);

        let king = Cell::from_parts(Color::White, Piece::King);
        assert_eq!(
            Coord::iter()
                .filter(|&c| can_attack(&b, king, sq("e4"), c))
                .count(),
            8
        );
        assert_eq!(
            Coord::iter()
                .filter(|&c| can_attack(&b, king, sq("h8"), c))
                .count(),
            3
        );
        assert!(!can_attack(&b, Cell::EMPTY, sq("e4"), sq("e5")));
    }

    #[test]
    fn test_attackers() {
        let b = Board::initial();
        assert!(is_cell_attacked(&b, sq("f3"), Color::White));
        assert!(!is_cell_attacked(&b, sq("e4"), Color::White));
        assert!(is_cell_attacked(&b, sq("d6"), Color::Black));

        let list = attackers(&b, sq("f3"), Color::White);
        assert_eq!(list.as_slice(), &[sq("e2"), sq("g2"), sq("g1")]);
        assert!(attackers(&b, sq("e4"), Color::Black).is_empty());
    }
}
