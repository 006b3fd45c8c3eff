use crate::attack::{self, CoordList};
use crate::castling;
use crate::geometry;
use crate::movegen::{self, MoveList};
use crate::moves::{self, Make, Move, RawUndo};
use crate::types::{
    CastlingSide, Cell, Color, Coord, DrawReason, File, Outcome, Piece, Rank, WinReason,
};

use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;
use thiserror::Error;

/// Error parsing a board diagram
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum DiagramParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Chess board
///
/// Holds the pieces together with the last applied move and the en passant target. There is no
/// side to move here: callers pass the color explicitly, and [`Game`](crate::Game) keeps track of
/// whose turn it is.
///
/// The board does not guarantee that the position is reachable in a real game. Any arrangement of
/// pieces may be set up with [`Board::put()`], and a board without kings is fine (no one is ever
/// in check on it).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 64],
    last_move: Option<Move>,
    ep_target: Option<Coord>,
}

impl Board {
    /// Returns an empty board
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
            last_move: None,
            ep_target: None,
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Cell::from_parts(Color::White, Piece::Pawn));
            res.put2(file, Rank::R7, Cell::from_parts(Color::Black, Piece::Pawn));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            res.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            res.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::C, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::D, rank, Cell::from_parts(color, Piece::Queen));
            res.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            res.put2(File::F, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
        }
        res
    }

    /// Parses a board from diagram rows, starting from rank 8
    ///
    /// Does the same as [`Board::from_str`] on the rows joined with `/`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, DiagramParseError> {
        let joined: Vec<&str> = rows.iter().map(|r| r.as_ref()).collect();
        Board::from_str(&joined.join("/"))
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Returns the contents of the square at `(row, col)`, or `None` if it is off the board
    #[inline]
    pub fn get_rc(&self, row: isize, col: isize) -> Option<Cell> {
        Coord::from_row_col(row, col).map(|c| self.get(c))
    }

    /// Puts `cell` on the square with coordinate `c`, replacing its previous contents
    ///
    /// This is the only primitive which changes the squares. Applying moves and probing their
    /// legality both go through it.
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Empties the square `c` and returns what stood there
    #[inline]
    pub fn take(&mut self, c: Coord) -> Cell {
        let cell = self.get(c);
        self.put(c, Cell::EMPTY);
        cell
    }

    /// Returns the coordinates of all the pieces of color `c`, in row-major order
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = Coord> + '_ {
        Coord::iter().filter(move |&p| self.get(p).color() == Some(c))
    }

    /// Returns the last applied move, if any
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }

    /// Returns the square a pawn skipped with a double step on the last move
    ///
    /// Only a pawn capturing onto this square on the very next move takes en passant.
    #[inline]
    pub fn ep_target(&self) -> Option<Coord> {
        self.ep_target
    }

    #[inline]
    pub fn set_ep_target(&mut self, c: Option<Coord>) {
        self.ep_target = c;
    }

    /// Returns the position of the king of color `c`
    ///
    /// If there are several such kings, the first one in row-major order is returned.
    pub fn king_pos(&self, c: Color) -> Option<Coord> {
        Coord::iter().find(|&p| self.get(p).is(c, Piece::King))
    }

    /// Returns `true` if some piece of the color opposite to `defender` attacks `coord`
    #[inline]
    pub fn square_under_attack(&self, coord: Coord, defender: Color) -> bool {
        attack::is_cell_attacked(self, coord, defender.inv())
    }

    /// Returns `true` if the king of color `c` is under attack
    ///
    /// A board without such king is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        self.king_pos(c)
            .map_or(false, |king| self.square_under_attack(king, c))
    }

    /// Returns the pieces attacking the king of color `c`
    pub fn checkers(&self, c: Color) -> CoordList {
        match self.king_pos(c) {
            Some(king) => attack::attackers(self, king, c.inv()),
            None => CoordList::new(),
        }
    }

    /// Returns the legal moves of the piece on `src`
    ///
    /// The result is computed from scratch on each call.
    #[inline]
    pub fn legal_moves(&self, src: Coord) -> MoveList {
        movegen::legal_moves(self, src)
    }

    /// Returns all the legal moves of color `c`
    #[inline]
    pub fn all_legal_moves(&self, c: Color) -> MoveList {
        movegen::gen_all(self, c)
    }

    /// Returns `true` if `mv` is among the legal moves of the piece on its source square
    pub fn valid_move(&self, mv: Move) -> bool {
        self.legal_moves(mv.src()).contains(&mv)
    }

    /// Returns `true` if color `c` has at least one legal move
    #[inline]
    pub fn has_valid_moves(&self, c: Color) -> bool {
        movegen::has_legal_moves(self, c)
    }

    #[inline]
    pub fn is_checkmate(&self, c: Color) -> bool {
        self.in_check(c) && !self.has_valid_moves(c)
    }

    #[inline]
    pub fn is_stalemate(&self, c: Color) -> bool {
        !self.in_check(c) && !self.has_valid_moves(c)
    }

    /// Returns `true` if color `c` may castle towards side `s` right now
    #[inline]
    pub fn can_castle(&self, c: Color, s: CastlingSide) -> bool {
        castling::is_allowed(self, c, s)
    }

    /// Calculates the outcome of the game with `side` to move
    ///
    /// Returns `None` if `side` still has legal moves.
    pub fn calc_outcome(&self, side: Color) -> Option<Outcome> {
        if self.has_valid_moves(side) {
            return None;
        }
        let outcome = match self.in_check(side) {
            true => Outcome::Win {
                side: side.inv(),
                reason: WinReason::Checkmate,
            },
            false => Outcome::Draw(DrawReason::Stalemate),
        };
        debug!("outcome for {} to move: {}", side, outcome);
        Some(outcome)
    }

    /// Applies `mv` without checking its legality
    ///
    /// See [`moves::make_move_unchecked()`] for details.
    #[inline]
    pub fn apply(&mut self, mv: Move) -> RawUndo {
        moves::make_move_unchecked(self, mv)
    }

    /// Reverts `mv` applied with [`Board::apply()`]
    #[inline]
    pub fn unapply(&mut self, mv: Move, u: RawUndo) {
        moves::unmake_move_unchecked(self, mv, u)
    }

    /// Returns a copy of the board with move `m` applied
    #[inline]
    pub fn make_move<M: Make>(&self, m: M) -> Result<Self, M::Err> {
        m.make(self)
    }

    /// Returns `true` if the pawn on `c` has not moved yet and may double step
    #[inline]
    pub fn can_double_step(&self, c: Coord) -> bool {
        let cell = self.get(c);
        cell.piece() == Some(Piece::Pawn) && !cell.is_moved()
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridchess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    /// Converts the board into a diagram string
    ///
    /// Does the same as `Board::to_string()`.
    #[inline]
    pub fn as_diagram(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

/// Sets the "has moved" flag the way a piece found at `c` should have it
fn infer_moved(c: Coord, cell: Cell) -> Cell {
    let (color, piece) = match (cell.color(), cell.piece()) {
        (Some(color), Some(piece)) => (color, piece),
        _ => return cell,
    };
    let at_home = match piece {
        Piece::Pawn => c.rank() == geometry::double_move_src_rank(color),
        Piece::King => c == castling::king_src(color),
        Piece::Rook => CastlingSide::iter().any(|s| c == castling::rook_src(color, s)),
        Piece::Knight | Piece::Bishop | Piece::Queen => true,
    };
    match at_home {
        true => cell,
        false => cell.moved(),
    }
}

fn parse_cells(s: &str) -> Result<[Cell; 64], DiagramParseError> {
    type Error = DiagramParseError;

    let mut file = 0_usize;
    let mut rank = 0_usize;
    let mut pos = 0_usize;
    let mut cells = [Cell::EMPTY; 64];
    for b in s.trim().bytes() {
        match b {
            b' ' | b'\t' | b'\r' => {}
            b'1'..=b'8' => {
                let add = (b - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                file += add;
                pos += add;
            }
            b'/' | b'\n' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(Rank::from_index(rank)));
                }
                rank += 1;
                file = 0;
                if rank >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                let ch = b as char;
                let cell = Cell::from_char(ch).ok_or(Error::UnexpectedChar(ch))?;
                if file >= 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                cells[pos] = infer_moved(Coord::from_index(pos), cell);
                file += 1;
                pos += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(Rank::from_index(rank)));
    }
    if rank < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for Board {
    type Err = DiagramParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(Board {
            cells: parse_cells(s)?,
            last_move: None,
            ep_target: None,
        })
    }
}

fn format_cells(cells: &[Cell; 64], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    for rank in Rank::iter() {
        if rank.index() != 0 {
            write!(f, "/")?;
        }
        let mut empty = 0;
        for file in File::iter() {
            let cell = cells[Coord::from_parts(file, rank).index()];
            if cell.is_empty() {
                empty += 1;
                continue;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
                empty = 0;
            }
            write!(f, "{}", cell)?;
        }
        if empty != 0 {
            write!(f, "{}", (b'0' + empty) as char)?;
        }
    }
    Ok(())
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        format_cells(&self.cells, f)
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(c: Cell) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(b.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveKind;

    fn sq(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    fn mv(s: &str) -> Move {
        Move::from_str(s).unwrap()
    }

    const INITIAL: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_initial() {
        assert_eq!(Board::initial().to_string(), INITIAL);
        assert_eq!(Board::from_str(INITIAL), Ok(Board::initial()));
        assert_eq!(Board::default(), Board::initial());
        assert_eq!(
            Board::from_rows(&[
                "rnbqkbnr", "pppppppp", "........", "........", "........", "........",
                "PPPPPPPP", "RNBQKBNR",
            ]),
            Ok(Board::initial())
        );
        assert_eq!(
            Board::from_str(
                "
                rnbqkbnr
                pppppppp
                ........
                ........
                ........
                ........
                PPPPPPPP
                RNBQKBNR
                "
            ),
            Ok(Board::initial())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::from_str("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(DiagramParseError::RankOverflow(Rank::R8))
        );
        assert_eq!(
            Board::from_str("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(DiagramParseError::RankUnderflow(Rank::R7))
        );
        assert_eq!(
            Board::from_str("8/8/8/8/8/8/8"),
            Err(DiagramParseError::Underflow)
        );
        assert_eq!(
            Board::from_str("8/8/8/8/8/8/8/8/8"),
            Err(DiagramParseError::Overflow)
        );
        assert_eq!(
            Board::from_str("8/8/8/8/8/8/8/7x"),
            Err(DiagramParseError::UnexpectedChar('x'))
        );
    }

    #[test]
    fn test_moved_inference() {
        let b = Board::from_str("r3k3/1p6/p7/8/8/8/4P3/3K3R").unwrap();
        assert!(!b.get(sq("a8")).is_moved());
        assert!(!b.get(sq("e8")).is_moved());
        assert!(!b.get(sq("b7")).is_moved());
        assert!(b.get(sq("a6")).is_moved());
        assert!(!b.get(sq("e2")).is_moved());
        assert!(b.get(sq("d1")).is_moved());
        assert!(!b.get(sq("h1")).is_moved());
        assert!(b.can_double_step(sq("e2")));
        assert!(!b.can_double_step(sq("a6")));
        assert_eq!(b.to_string(), "r3k3/1p6/p7/8/8/8/4P3/3K3R");
    }

    #[test]
    fn test_put_take() {
        let mut b = Board::empty();
        assert_eq!(b.king_pos(Color::White), None);
        assert!(!b.in_check(Color::White));

        let queen = Cell::from_parts(Color::Black, Piece::Queen);
        b.put(sq("d4"), queen);
        assert_eq!(b.get2(File::D, Rank::R4), queen);
        assert_eq!(b.get_rc(4, 3), Some(queen));
        assert_eq!(b.get_rc(8, 3), None);
        assert_eq!(b.get_rc(0, -1), None);
        assert_eq!(b.take(sq("d4")), queen);
        assert_eq!(b, Board::empty());
    }

    #[test]
    fn test_in_check() {
        let b = Board::from_str("4k3/8/8/8/8/8/3n4/4K3").unwrap();
        assert_eq!(b.king_pos(Color::White), Some(sq("e1")));
        assert!(!b.in_check(Color::White));

        let b = Board::from_str("4k3/8/8/8/8/5n2/8/4K3").unwrap();
        assert!(b.in_check(Color::White));
        assert!(!b.in_check(Color::Black));
        assert_eq!(b.checkers(Color::White).as_slice(), &[sq("f3")]);
        assert!(b.checkers(Color::Black).is_empty());
        assert!(b.square_under_attack(sq("g5"), Color::White));
        assert!(!b.square_under_attack(sq("g5"), Color::Black));
    }

    #[test]
    fn test_fools_mate() {
        let mut b = Board::initial();
        for m in ["f2f3", "e7e5", "g2g4"] {
            assert!(b.valid_move(mv(m)));
            b.apply(mv(m));
        }
        assert_eq!(b.calc_outcome(Color::Black), None);
        assert!(b.valid_move(mv("d8h4")));
        b.apply(mv("d8h4"));

        assert!(b.in_check(Color::White));
        assert!(b.is_checkmate(Color::White));
        assert!(!b.is_checkmate(Color::Black));
        assert!(!b.is_stalemate(Color::White));
        assert!(!b.has_valid_moves(Color::White));
        assert!(b.all_legal_moves(Color::White).is_empty());
        assert_eq!(b.checkers(Color::White).as_slice(), &[sq("h4")]);
        assert_eq!(
            b.calc_outcome(Color::White),
            Some(Outcome::Win {
                side: Color::Black,
                reason: WinReason::Checkmate
            })
        );
    }

    #[test]
    fn test_stalemate() {
        let b = Board::from_str("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        assert!(!b.in_check(Color::Black));
        assert!(b.is_stalemate(Color::Black));
        assert!(!b.is_checkmate(Color::Black));
        assert_eq!(
            b.calc_outcome(Color::Black),
            Some(Outcome::Draw(DrawReason::Stalemate))
        );
        assert_eq!(b.calc_outcome(Color::White), None);
    }

    #[test]
    fn test_castling_gating() {
        let castle = mv("e1g1");

        let b = Board::from_str("4k3/8/8/8/8/8/8/4K2R").unwrap();
        assert!(b.valid_move(castle));
        assert!(b.can_castle(Color::White, CastlingSide::King));

        // Blocked by a piece in between
        let b = Board::from_str("4k3/8/8/8/8/8/8/4KB1R").unwrap();
        assert!(!b.valid_move(castle));

        // Passing through an attacked square
        let b = Board::from_str("4kr2/8/8/8/8/8/8/4K2R").unwrap();
        assert!(!b.valid_move(castle));

        // King in check
        let b = Board::from_str("4r1k1/8/8/8/8/8/8/4K2R").unwrap();
        assert!(!b.valid_move(castle));

        // Rook has already moved
        let mut b = Board::from_str("4k3/8/8/8/8/8/8/4K2R").unwrap();
        b.apply(mv("h1h2"));
        b.apply(mv("h2h1"));
        assert!(!b.valid_move(castle));

        // King has already moved
        let mut b = Board::from_str("4k3/8/8/8/8/8/8/4K2R").unwrap();
        b.apply(mv("e1f1"));
        b.apply(mv("f1e1"));
        assert!(!b.valid_move(castle));
    }

    #[test]
    fn test_castling_apply() {
        let mut b = Board::from_str("r3k3/8/8/8/8/8/8/4K3").unwrap();
        let castle = mv("e8c8");
        assert!(b.valid_move(castle));
        let u = b.apply(castle);
        assert_eq!(u.kind(), MoveKind::CastlingQueenside);
        assert_eq!(b.to_string(), "2kr4/8/8/8/8/8/8/4K3");
        assert!(b.get(sq("c8")).is_moved());
        assert!(b.get(sq("d8")).is_moved());
    }

    #[test]
    fn test_promotion_paths() {
        // Straight push
        let mut b = Board::from_str("4k3/P7/8/8/8/8/8/4K3").unwrap();
        assert!(b.valid_move(mv("a7a8")));
        b.apply(mv("a7a8"));
        assert_eq!(b.get(sq("a8")), Cell::from_parts(Color::White, Piece::Queen).moved());
        assert!(b.in_check(Color::Black));

        // Capture on the last rank
        let mut b = Board::from_str("4k3/8/8/8/8/8/5p2/K5R1").unwrap();
        assert!(b.valid_move(mv("f2g1")));
        assert!(b.valid_move(mv("f2f1")));
        let u = b.apply(mv("f2g1"));
        assert_eq!(u.kind(), MoveKind::PromoteQueen);
        assert!(b.get(sq("g1")).is(Color::Black, Piece::Queen));
        assert!(b.in_check(Color::White));

        // En passant onto the last rank
        let mut b = Board::from_str("4k3/pP6/8/8/8/8/8/4K3").unwrap();
        b.set_ep_target(Some(sq("a8")));
        assert_eq!(
            b.legal_moves(sq("b7")).iter().map(|m| m.to_string()).collect::<Vec<_>>(),
            vec!["b7b8", "b7a8"]
        );
        let u = b.apply(mv("b7a8"));
        assert_eq!(u.kind(), MoveKind::PromoteQueen);
        assert_eq!(b.get(sq("a8")), Cell::from_parts(Color::White, Piece::Queen).moved());
        assert!(b.get(sq("a7")).is_empty());
        assert!(b.get(sq("b7")).is_empty());
        assert_eq!(u.captured(), Some((sq("a7"), Cell::from_parts(Color::Black, Piece::Pawn))));
    }

    #[test]
    fn test_pretty() {
        let b = Board::from_str("4k3/8/8/8/8/8/8/4K3").unwrap();
        let res = r#"
8│....♚...
7│........
6│........
5│........
4│........
3│........
2│........
1│....♔...
─┼────────
 │abcdefgh
"#;
        assert_eq!(
            b.pretty(PrettyStyle::Utf8).to_string().trim_matches('\n'),
            res.trim_matches('\n')
        );
        assert_eq!(b.as_diagram(), "4k3/8/8/8/8/8/8/4K3");
    }
}
