use crate::types::{CastlingSide, Color, File, Rank};

pub const fn castling_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

pub const fn double_move_src_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Row delta of a single pawn step
///
/// White pawns walk towards row 0, black pawns towards row 7.
pub const fn pawn_forward(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Returns `true` for the first and the last rows, where pawns get promoted
pub const fn is_promote_row(row: usize) -> bool {
    row == 0 || row == 7
}

pub const fn castling_rook_src_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::A,
        CastlingSide::King => File::H,
    }
}

pub const fn castling_king_dst_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::C,
        CastlingSide::King => File::G,
    }
}

pub const fn castling_rook_dst_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::D,
        CastlingSide::King => File::F,
    }
}
