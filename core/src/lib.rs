#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use catalog::*;
pub use chroma::*;
pub use code::*;
pub use daily::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use mark::*;
pub use rng::SeededRng;
pub use route::*;
pub use types::*;

mod analysis;
mod catalog;
mod chroma;
mod code;
mod daily;
mod engine;
mod error;
mod generator;
mod mark;
pub mod rng;
mod route;
mod types;

/// Largest supported grid edge.
pub const MAX_GRID_SIZE: Coord = 16;

/// Largest supported alphabet.
pub const MAX_ALPHABET: u8 = 64;

/// Longest supported code.
pub const MAX_CODE_LENGTH: u8 = 8;

/// Largest grid searched without a node budget by [`GridConfig::new`].
pub const UNBUDGETED_GRID_SIZE: Coord = 5;

/// Node budget [`GridConfig::new`] gives grids above [`UNBUDGETED_GRID_SIZE`].
pub const DEFAULT_SEARCH_BUDGET: u64 = 250_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord,
    /// Upper bound on search nodes before falling back to the snake path.
    /// `None` searches exhaustively.
    pub search_budget: Option<u64>,
}

impl GridConfig {
    pub const DAILY_PATH: Self = Self::new_unchecked(5, None);

    pub const fn new_unchecked(size: Coord, search_budget: Option<u64>) -> Self {
        Self {
            size,
            search_budget,
        }
    }

    /// Clamps `size` into `1..=MAX_GRID_SIZE`. Grids larger than the daily
    /// one get [`DEFAULT_SEARCH_BUDGET`], so the search always ends.
    pub fn new(size: Coord) -> Self {
        let size = size.clamp(1, MAX_GRID_SIZE);
        let budget = (size > UNBUDGETED_GRID_SIZE).then_some(DEFAULT_SEARCH_BUDGET);
        Self::new_unchecked(size, budget)
    }

    /// Rejects configs built without [`GridConfig::new`], such as deserialized ones.
    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_GRID_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(GameError::InvalidConfig)
        }
    }

    pub const fn with_search_budget(self, budget: u64) -> Self {
        Self::new_unchecked(self.size, Some(budget))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn total_segments(&self) -> CellCount {
        self.total_cells().saturating_sub(1)
    }

    pub fn validate_cell(&self, cell: Cell) -> Result<Cell> {
        if cell.0 < self.size && cell.1 < self.size {
            Ok(cell)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConfig {
    pub alphabet_size: u8,
    pub code_length: u8,
    pub max_guesses: u8,
    pub consistency: Consistency,
}

impl CodeConfig {
    /// Four dials of digits.
    pub const SIGNAL_LOCK: Self = Self::new_unchecked(10, 4, 8, Consistency::PerPosition);
    /// Four slots of six shapes, remaining count compares totals only.
    pub const SIGNAL_BREAK: Self = Self::new_unchecked(6, 4, 6, Consistency::Counts);
    /// Four slots of six runes.
    pub const SPELLCAST: Self = Self::new_unchecked(6, 4, 8, Consistency::PerPosition);
    /// Five chain slots over a bank of eight words.
    pub const LINK_FIVE: Self = Self::new_unchecked(8, 5, 5, Consistency::PerPosition);

    pub const fn new_unchecked(
        alphabet_size: u8,
        code_length: u8,
        max_guesses: u8,
        consistency: Consistency,
    ) -> Self {
        Self {
            alphabet_size,
            code_length,
            max_guesses,
            consistency,
        }
    }

    pub fn new(alphabet_size: u8, code_length: u8, max_guesses: u8) -> Self {
        Self::new_unchecked(
            alphabet_size.clamp(1, MAX_ALPHABET),
            code_length.clamp(1, MAX_CODE_LENGTH),
            max_guesses.max(1),
            Consistency::default(),
        )
    }

    pub const fn with_consistency(self, consistency: Consistency) -> Self {
        Self::new_unchecked(
            self.alphabet_size,
            self.code_length,
            self.max_guesses,
            consistency,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let valid = (1..=MAX_ALPHABET).contains(&self.alphabet_size)
            && (1..=MAX_CODE_LENGTH).contains(&self.code_length)
            && self.max_guesses > 0;
        if valid {
            Ok(())
        } else {
            Err(GameError::InvalidConfig)
        }
    }

    pub const fn code_len(&self) -> usize {
        self.code_length as usize
    }

    /// Number of distinct codes, `alphabet_size ^ code_length`.
    pub const fn space_size(&self) -> u64 {
        (self.alphabet_size as u64).pow(self.code_length as u32)
    }
}
