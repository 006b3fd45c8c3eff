//! Utilities to work with moves in UCI format

use super::base::{Move, ValidateError};
use crate::types::{Coord, CoordParseError};

use std::str::FromStr;

use thiserror::Error;

/// Error parsing a move from UCI string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum RawParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
    /// Bad promote character
    ///
    /// Pawns always promote to a queen, so only `q` is accepted.
    #[error("bad promote char {0:?}")]
    BadPromote(char),
}

/// Error parsing UCI into a legal [`Move`]
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Error parsing move
    #[error("cannot parse move: {0}")]
    Parse(#[from] RawParseError),
    /// Move is not legal
    #[error("invalid move: {0}")]
    Validate(#[from] ValidateError),
}

impl FromStr for Move {
    type Err = RawParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if !s.is_ascii() || !matches!(s.len(), 4 | 5) {
            return Err(RawParseError::BadLength);
        }
        let src = Coord::from_str(&s[0..2]).map_err(RawParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(RawParseError::BadDst)?;
        if s.len() == 5 {
            match s.as_bytes()[4] {
                b'q' => {}
                b => return Err(RawParseError::BadPromote(b as char)),
            }
        }
        Ok(Move::new(src, dst))
    }
}
