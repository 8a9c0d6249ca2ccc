use alloc::vec::Vec;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered cells of a route through the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path(Vec<Cell>);

impl Path {
    /// Accepts any simple path: cells in bounds, pairwise distinct, and each
    /// adjacent to the one before. Coverage is checked separately.
    pub fn from_cells(cells: Vec<Cell>, config: &GridConfig) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cells.len());
        for (i, &cell) in cells.iter().enumerate() {
            config.validate_cell(cell)?;
            if !seen.insert(cell) {
                return Err(GameError::AlreadyVisited(cell));
            }
            if i > 0 && !is_adjacent(cells[i - 1], cell) {
                return Err(GameError::NotAdjacent(cell));
            }
        }
        Ok(Self(cells))
    }

    pub(crate) fn from_cells_unchecked(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    pub fn is_complete(&self, config: &GridConfig) -> bool {
        self.len() == usize::from(config.total_cells())
    }

    /// Covers every cell exactly once with orthogonal steps.
    pub fn is_hamiltonian(&self, config: &GridConfig) -> bool {
        self.is_complete(config) && Self::from_cells(self.0.clone(), config).is_ok()
    }

    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    pub fn segments(&self) -> SegmentSet {
        SegmentSet(
            self.0
                .windows(2)
                .map(|pair| Segment::new(pair[0], pair[1]))
                .collect(),
        )
    }
}

/// Undirected edge between two cells, stored with the smaller cell first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Segment {
    low: Cell,
    high: Cell,
}

impl Segment {
    pub fn new(a: Cell, b: Cell) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub const fn endpoints(&self) -> (Cell, Cell) {
        (self.low, self.high)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentSet(HashSet<Segment>);

impl SegmentSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, segment: &Segment) -> bool {
        self.0.contains(segment)
    }

    pub fn shared_with(&self, other: &SegmentSet) -> usize {
        self.0.intersection(&other.0).count()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridScore {
    pub correct_segments: CellCount,
    pub total_segments: CellCount,
}

impl GridScore {
    pub const fn is_win(&self) -> bool {
        self.correct_segments == self.total_segments
    }

    /// Rounded percentage of correct segments.
    pub fn percent(&self) -> u8 {
        if self.total_segments == 0 {
            return 100;
        }
        let ratio = f64::from(self.correct_segments) / f64::from(self.total_segments);
        let scaled = ratio * 100.0 + 0.5;
        scaled as u8
    }
}

/// Number of the solution's segments the attempt also uses, regardless of
/// direction or order.
pub fn score_attempt(solution: &Path, attempt: &Path) -> GridScore {
    let shared = solution.segments().shared_with(&attempt.segments());
    GridScore {
        correct_segments: shared.try_into().unwrap_or(CellCount::MAX),
        total_segments: solution.len().saturating_sub(1).try_into().unwrap_or(CellCount::MAX),
    }
}
