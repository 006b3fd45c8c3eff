use crate::board::Board;
use crate::moves::Move;
use crate::types::{Cell, Color, Coord, Piece};

/// Probes candidate moves for king safety
///
/// Each probe puts the moving piece on its destination in a scratch copy of the board, asks
/// whether the mover's king is attacked, and then restores every touched square. The probe never
/// applies the move in full, so castling rooks, promotions and move history stay untouched.
pub struct Checker<'a> {
    board: &'a Board,
    scratch: Board,
    side: Color,
}

impl<'a> Checker<'a> {
    pub fn new(board: &'a Board, side: Color) -> Self {
        Checker {
            board,
            scratch: board.clone(),
            side,
        }
    }

    /// Square of the pawn captured en passant by `mv`, if any
    fn enpassant_victim(&self, mv: Move, moving: Cell) -> Option<Coord> {
        if moving.piece() != Some(Piece::Pawn)
            || self.board.ep_target() != Some(mv.dst())
            || mv.src().col() == mv.dst().col()
        {
            return None;
        }
        Some(Coord::from_parts(mv.dst().file(), mv.src().rank()))
    }

    /// Returns `true` if the own king is not attacked after `mv`
    pub fn is_legal(&mut self, mv: Move) -> bool {
        let (src, dst) = (mv.src(), mv.dst());
        let moving = self.scratch.get(src);
        let captured = self.scratch.get(dst);
        let victim = self
            .enpassant_victim(mv, moving)
            .map(|c| (c, self.scratch.get(c)));

        self.scratch.put(src, Cell::EMPTY);
        self.scratch.put(dst, moving);
        if let Some((c, _)) = victim {
            self.scratch.put(c, Cell::EMPTY);
        }

        let legal = !self.scratch.in_check(self.side);

        if let Some((c, cell)) = victim {
            self.scratch.put(c, cell);
        }
        self.scratch.put(dst, captured);
        self.scratch.put(src, moving);

        #[cfg(feature = "selftest")]
        assert!(
            self.scratch == *self.board,
            "probing {} did not restore the board",
            mv
        );

        legal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen;
    use std::str::FromStr;

    fn mv(s: &str) -> Move {
        Move::from_str(s).unwrap()
    }

    #[test]
    fn test_pinned() {
        // The knight on e2 is pinned by the rook on e8
        let b = Board::from_str("4r1k1/8/8/8/8/8/4N3/4K3").unwrap();
        let mut checker = Checker::new(&b, Color::White);
        assert!(!checker.is_legal(mv("e2c3")));
        assert!(!checker.is_legal(mv("e2g1")));
        assert!(checker.is_legal(mv("e1d1")));
        assert!(checker.is_legal(mv("e1f2")));
    }

    #[test]
    fn test_enpassant_discovers_check() {
        // Capturing en passant removes both pawns from the fifth rank and exposes the king
        let mut b = Board::from_str("8/8/8/K2pP2r/8/8/8/7k").unwrap();
        b.set_ep_target(Some(Coord::from_str("d6").unwrap()));
        let mut checker = Checker::new(&b, Color::White);
        assert!(!checker.is_legal(mv("e5d6")));
        assert!(checker.is_legal(mv("e5e6")));
    }

    #[test]
    fn test_restore() {
        let boards = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        ];
        for s in boards {
            let b = Board::from_str(s).unwrap();
            for color in [Color::White, Color::Black] {
                let mut checker = Checker::new(&b, color);
                for src in b.pieces(color) {
                    for m in &movegen::candidates(&b, src) {
                        let _ = checker.is_legal(*m);
                        assert_eq!(checker.scratch, b);
                    }
                }
            }
        }
    }
}
