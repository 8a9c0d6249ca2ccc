use alloc::vec::Vec;

use ndarray::Array2;
use smallvec::SmallVec;

use super::*;

/// Randomized depth-first search for a Hamiltonian path, with the snake
/// path as fallback when the search space is exhausted or the configured
/// budget runs out.
///
/// Start cell and branch order are drawn from one [`SeededRng`] stream, so a
/// seed always yields the same path.
#[derive(Clone, Debug, PartialEq)]
pub struct BacktrackingPathGenerator {
    seed: i64,
}

impl BacktrackingPathGenerator {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SearchOutcome {
    Found(Vec<Cell>),
    Exhausted,
    BudgetSpent,
}

/// Choice point: shuffled open neighbors of one path cell and the next one to try.
struct Frame {
    options: SmallVec<[Cell; 4]>,
    next: usize,
}

struct Search<'a> {
    rng: &'a mut SeededRng,
    visited: Array2<bool>,
    path: Vec<Cell>,
    total: usize,
    budget: Option<u64>,
    nodes: u64,
}

impl Search<'_> {
    fn open_frame(&mut self, cell: Cell) -> Frame {
        let mut options: SmallVec<[Cell; 4]> = self
            .visited
            .iter_neighbors(cell)
            .filter(|&neighbor| !self.visited[neighbor.to_nd_index()])
            .collect();
        self.rng.shuffle(&mut options);
        Frame { options, next: 0 }
    }

    /// Counts a newly reached path state, the unit the budget is measured in.
    fn enter(&mut self) -> Option<SearchOutcome> {
        self.nodes += 1;
        if self.budget.is_some_and(|budget| self.nodes > budget) {
            return Some(SearchOutcome::BudgetSpent);
        }
        if self.path.len() == self.total {
            return Some(SearchOutcome::Found(core::mem::take(&mut self.path)));
        }
        None
    }

    fn run(&mut self, start: Cell) -> SearchOutcome {
        self.visited[start.to_nd_index()] = true;
        self.path.push(start);
        if let Some(outcome) = self.enter() {
            return outcome;
        }

        let mut stack: Vec<Frame> = Vec::with_capacity(self.total);
        let root = self.open_frame(start);
        stack.push(root);

        while let Some(frame) = stack.last_mut() {
            let Some(&cell) = frame.options.get(frame.next) else {
                stack.pop();
                // the root cell stays, only cells pushed by a frame are undone
                if !stack.is_empty() {
                    if let Some(dead_end) = self.path.pop() {
                        self.visited[dead_end.to_nd_index()] = false;
                    }
                }
                continue;
            };
            frame.next += 1;

            self.visited[cell.to_nd_index()] = true;
            self.path.push(cell);
            if let Some(outcome) = self.enter() {
                return outcome;
            }
            let frame = self.open_frame(cell);
            stack.push(frame);
        }

        SearchOutcome::Exhausted
    }
}

/// On an odd grid the checkerboard colour of the corners has one more cell
/// than the other, so every Hamiltonian path starts and ends on it. A start
/// with odd `row + col` has none.
fn start_has_no_path(size: Coord, start: Cell) -> bool {
    size % 2 == 1 && (start.0 + start.1) % 2 == 1
}

impl PathGenerator for BacktrackingPathGenerator {
    fn generate(self, config: GridConfig) -> Path {
        if config.validate().is_err() {
            log::warn!("grid size {} out of range, clamping", config.size);
        }
        let size = config.size.clamp(1, MAX_GRID_SIZE);
        let config = GridConfig { size, ..config };
        let mut rng = SeededRng::new(self.seed);

        let start_row = rng.next_index(size.into()) as Coord;
        let start_col = rng.next_index(size.into()) as Coord;
        let start = (start_row, start_col);

        if start_has_no_path(size, start) {
            log::debug!("no path from {start:?} on odd {size}x{size} grid, using snake path");
            return SnakePathGenerator.generate(config);
        }

        let mut search = Search {
            rng: &mut rng,
            visited: Array2::from_elem([usize::from(size), usize::from(size)], false),
            path: Vec::with_capacity(config.total_cells().into()),
            total: config.total_cells().into(),
            budget: config.search_budget,
            nodes: 0,
        };
        let outcome = search.run(start);
        let nodes = search.nodes;

        match outcome {
            SearchOutcome::Found(cells) => {
                log::debug!("found path from {start:?} after {nodes} search nodes");
                Path::from_cells_unchecked(cells)
            }
            SearchOutcome::Exhausted => {
                log::warn!(
                    "no path from {start:?} on {size}x{size} grid after {nodes} search nodes, using snake path"
                );
                SnakePathGenerator.generate(config)
            }
            SearchOutcome::BudgetSpent => {
                log::warn!("search budget of {nodes} nodes spent from {start:?}, using snake path");
                SnakePathGenerator.generate(config)
            }
        }
    }
}
