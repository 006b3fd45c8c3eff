use crate::board::Board;
use crate::castling;
use crate::geometry;
use crate::legal::Checker;
use crate::moves::Move;
use crate::types::{CastlingSide, Color, Coord, Geometry, Piece};

use std::convert::Infallible;
use std::slice;

use arrayvec::ArrayVec;
use derive_more::{Deref, DerefMut};

trait MaybeMovePush {
    type Err;

    fn push(&mut self, m: Move) -> Result<(), Self::Err>;
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Deref, DerefMut)]
pub struct MoveList(ArrayVec<Move, 256>);

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut MoveList {
    type Item = &'a mut Move;
    type IntoIter = slice::IterMut<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl<const N: usize> MovePush for ArrayVec<Move, N> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl<T: MovePush> MaybeMovePush for T {
    type Err = Infallible;

    fn push(&mut self, m: Move) -> Result<(), Self::Err> {
        <Self as MovePush>::push(self, m);
        Ok(())
    }
}

struct ErrOnFirst;

impl MaybeMovePush for ErrOnFirst {
    type Err = ();

    fn push(&mut self, _mv: Move) -> Result<(), ()> {
        Err(())
    }
}

/// Candidate move generator for the pieces of one color
///
/// With a checker attached, every candidate except castling is probed for king safety before
/// being pushed. Castling has already been checked for attacked squares by
/// [`castling::is_allowed()`].
struct MoveGenImpl<'a, 'b, P> {
    board: &'a Board,
    checker: Option<Checker<'a>>,
    dst: &'b mut P,
}

impl<'a, 'b, P: MaybeMovePush> MoveGenImpl<'a, 'b, P> {
    fn new(board: &'a Board, checker: Option<Checker<'a>>, dst: &'b mut P) -> Self {
        MoveGenImpl {
            board,
            checker,
            dst,
        }
    }

    fn add_move(&mut self, src: Coord, dst: Coord) -> Result<(), P::Err> {
        let mv = Move::new(src, dst);
        if let Some(checker) = &mut self.checker {
            if !checker.is_legal(mv) {
                return Ok(());
            }
        }
        self.dst.push(mv)
    }

    fn gen_pawn(&mut self, src: Coord, color: Color) -> Result<(), P::Err> {
        let forward = geometry::pawn_forward(color);
        if let Some(dst) = src.try_shift(forward, 0) {
            if self.board.get(dst).is_empty() {
                self.add_move(src, dst)?;
                if !self.board.get(src).is_moved() {
                    if let Some(dst2) = dst.try_shift(forward, 0) {
                        if self.board.get(dst2).is_empty() {
                            self.add_move(src, dst2)?;
                        }
                    }
                }
            }
        }
        for delta_col in [-1, 1] {
            let dst = match src.try_shift(forward, delta_col) {
                Some(dst) => dst,
                None => continue,
            };
            if self.board.get(dst).is_rival_of(color) || self.is_enpassant(src, dst, color) {
                self.add_move(src, dst)?;
            }
        }
        Ok(())
    }

    fn is_enpassant(&self, src: Coord, dst: Coord, color: Color) -> bool {
        if self.board.ep_target() != Some(dst) {
            return false;
        }
        let victim = Coord::from_parts(dst.file(), src.rank());
        self.board.get(victim).is(color.inv(), Piece::Pawn)
    }

    fn gen_step(&mut self, src: Coord, color: Color, dirs: &[(isize, isize)]) -> Result<(), P::Err> {
        for &(dr, dc) in dirs {
            if let Some(dst) = src.try_shift(dr, dc) {
                if self.board.get(dst).is_empty_or_rival_of(color) {
                    self.add_move(src, dst)?;
                }
            }
        }
        Ok(())
    }

    fn gen_slide(
        &mut self,
        src: Coord,
        color: Color,
        dirs: &[(isize, isize)],
    ) -> Result<(), P::Err> {
        for &(dr, dc) in dirs {
            let mut cur = src;
            while let Some(dst) = cur.try_shift(dr, dc) {
                let cell = self.board.get(dst);
                if cell.color() == Some(color) {
                    break;
                }
                self.add_move(src, dst)?;
                if cell.is_occupied() {
                    break;
                }
                cur = dst;
            }
        }
        Ok(())
    }

    fn gen_castling(&mut self, src: Coord, color: Color) -> Result<(), P::Err> {
        if src != castling::king_src(color) {
            return Ok(());
        }
        for side in [CastlingSide::Queen, CastlingSide::King] {
            if castling::is_allowed(self.board, color, side) {
                self.dst.push(castling::make_move(color, side))?;
            }
        }
        Ok(())
    }

    fn gen_piece(&mut self, src: Coord) -> Result<(), P::Err> {
        let cell = self.board.get(src);
        let (color, piece) = match (cell.color(), cell.piece()) {
            (Some(color), Some(piece)) => (color, piece),
            _ => return Ok(()),
        };
        match (piece, piece.geometry()) {
            (Piece::Pawn, _) => self.gen_pawn(src, color),
            (Piece::King, _) => {
                self.gen_step(src, color, piece.directions())?;
                self.gen_castling(src, color)
            }
            (_, Geometry::Step) => self.gen_step(src, color, piece.directions()),
            (_, Geometry::Slide) => self.gen_slide(src, color, piece.directions()),
        }
    }

    fn gen_all(&mut self, color: Color) -> Result<(), P::Err> {
        let board = self.board;
        for src in board.pieces(color) {
            self.gen_piece(src)?;
        }
        Ok(())
    }
}

/// Returns the legal moves of the piece standing on `src`
///
/// The moves go in a fixed order: pawn pushes before pawn captures (left, then right), and for
/// the king, ordinary steps before queenside and kingside castling. An empty square yields an
/// empty list.
pub fn legal_moves(b: &Board, src: Coord) -> MoveList {
    let mut res = MoveList::new();
    if let Some(color) = b.get(src).color() {
        let _ = MoveGenImpl::new(b, Some(Checker::new(b, color)), &mut res).gen_piece(src);
    }
    res
}

/// Returns the candidate moves of the piece on `src`, without checking king safety
///
/// Castling candidates are included only when [`castling::is_allowed()`] holds.
pub fn candidates(b: &Board, src: Coord) -> MoveList {
    let mut res = MoveList::new();
    let _ = MoveGenImpl::new(b, None, &mut res).gen_piece(src);
    res
}

/// Pushes all the legal moves of color `c` into `dst`
pub fn gen_all_into<P: MovePush>(b: &Board, c: Color, dst: &mut P) {
    let _ = MoveGenImpl::new(b, Some(Checker::new(b, c)), dst).gen_all(c);
}

/// Returns all the legal moves of color `c`
pub fn gen_all(b: &Board, c: Color) -> MoveList {
    let mut res = MoveList::new();
    gen_all_into(b, c, &mut res);
    res
}

/// Returns `true` if color `c` has at least one legal move
///
/// Stops at the first legal move found.
pub fn has_legal_moves(b: &Board, c: Color) -> bool {
    let mut err_on_first = ErrOnFirst;
    MoveGenImpl::new(b, Some(Checker::new(b, c)), &mut err_on_first)
        .gen_all(c)
        .is_err()
}

/// Counts the leaf nodes of the legal move tree of the given `depth`, with `c` to move
pub fn perft(b: &Board, c: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = gen_all(b, c);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut board = b.clone();
    let mut total = 0;
    for mv in &moves {
        let u = board.apply(*mv);
        total += perft(&board, c.inv(), depth - 1);
        board.unapply(*mv, u);
    }
    total
}
