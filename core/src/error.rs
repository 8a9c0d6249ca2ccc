use thiserror::Error;

use crate::{Cell, Symbol};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid configuration, sizes must be non-zero and within limits")]
    InvalidConfig,
    #[error("Code must have {expected} symbols, got {actual}")]
    WrongCodeLength { expected: usize, actual: usize },
    #[error("Symbol {symbol} is outside an alphabet of {alphabet_size}")]
    SymbolOutOfRange { symbol: Symbol, alphabet_size: u8 },
    #[error("Word is not part of this puzzle")]
    UnknownWord,
    #[error("Cell {0:?} is not adjacent to the end of the path")]
    NotAdjacent(Cell),
    #[error("Cell {0:?} is already on the path")]
    AlreadyVisited(Cell),
    #[error("Path covers {covered} of {total} cells")]
    IncompletePath { covered: usize, total: usize },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
