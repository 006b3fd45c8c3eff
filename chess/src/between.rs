//! Squares lying strictly between two squares on a common line or diagonal

use crate::board::Board;
use crate::types::Coord;

/// Iterator over the squares strictly between two squares
///
/// Neither of the endpoints is yielded.
#[derive(Debug, Clone)]
pub struct Strict {
    cur: Coord,
    dst: Coord,
    delta: (isize, isize),
}

impl Iterator for Strict {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        let next = self.cur.try_shift(self.delta.0, self.delta.1)?;
        if next == self.dst {
            return None;
        }
        self.cur = next;
        Some(next)
    }
}

#[inline]
fn deltas(src: Coord, dst: Coord) -> (isize, isize) {
    (
        dst.row() as isize - src.row() as isize,
        dst.col() as isize - src.col() as isize,
    )
}

#[inline]
fn strict(src: Coord, dst: Coord, (dr, dc): (isize, isize)) -> Strict {
    Strict {
        cur: src,
        dst,
        delta: (dr.signum(), dc.signum()),
    }
}

#[inline]
pub fn is_bishop_valid(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = deltas(src, dst);
    dr != 0 && dr.abs() == dc.abs()
}

#[inline]
pub fn is_rook_valid(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = deltas(src, dst);
    (dr == 0) != (dc == 0)
}

/// Returns the squares strictly between `src` and `dst` if they share a diagonal
#[inline]
pub fn bishop_strict(src: Coord, dst: Coord) -> Option<Strict> {
    if !is_bishop_valid(src, dst) {
        return None;
    }
    Some(strict(src, dst, deltas(src, dst)))
}

/// Returns the squares strictly between `src` and `dst` if they share a row or a column
#[inline]
pub fn rook_strict(src: Coord, dst: Coord) -> Option<Strict> {
    if !is_rook_valid(src, dst) {
        return None;
    }
    Some(strict(src, dst, deltas(src, dst)))
}

/// Returns `true` if every square of `path` is empty on board `b`
#[inline]
pub fn is_clear(b: &Board, mut path: Strict) -> bool {
    path.all(|c| b.get(c).is_empty())
}
