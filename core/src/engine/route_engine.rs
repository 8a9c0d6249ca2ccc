use alloc::vec::Vec;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::EngineState;
use crate::*;

pub const MAX_ROUTE_ATTEMPTS: u8 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceOutcome {
    Extended,
    Undone,
    Complete,
}

/// Incremental path input anchored at a fixed start cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteTracer {
    config: GridConfig,
    cells: Vec<Cell>,
    visited: Array2<bool>,
}

impl RouteTracer {
    pub fn new(config: GridConfig, start: Cell) -> Result<Self> {
        let start = config.validate_cell(start)?;
        let size = usize::from(config.size);
        let mut visited = Array2::from_elem([size, size], false);
        visited[start.to_nd_index()] = true;

        let mut cells = Vec::with_capacity(config.total_cells().into());
        cells.push(start);
        Ok(Self {
            config,
            cells,
            visited,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_complete(&self) -> bool {
        self.cells.len() == usize::from(self.config.total_cells())
    }

    fn head(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Extends the path by `cell`. Stepping onto the current end again
    /// takes it back off, the start cell excepted.
    pub fn step(&mut self, cell: Cell) -> Result<TraceOutcome> {
        let cell = self.config.validate_cell(cell)?;

        if self.cells.len() > 1 && cell == self.head() {
            self.undo();
            return Ok(TraceOutcome::Undone);
        }
        if self.visited[cell.to_nd_index()] {
            return Err(GameError::AlreadyVisited(cell));
        }
        if !is_adjacent(self.head(), cell) {
            return Err(GameError::NotAdjacent(cell));
        }

        self.visited[cell.to_nd_index()] = true;
        self.cells.push(cell);
        Ok(if self.is_complete() {
            TraceOutcome::Complete
        } else {
            TraceOutcome::Extended
        })
    }

    /// Removes the last cell, returning `false` when only the start is left.
    pub fn undo(&mut self) -> bool {
        if self.cells.len() <= 1 {
            return false;
        }
        if let Some(cell) = self.cells.pop() {
            self.visited[cell.to_nd_index()] = false;
        }
        true
    }

    pub fn reset(&mut self) {
        while self.undo() {}
    }

    pub fn to_path(&self) -> Path {
        Path::from_cells_unchecked(self.cells.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteAttempt {
    pub path: Path,
    pub score: GridScore,
}

/// Session for the hidden route puzzle: trace full paths and get a segment
/// score for each, up to [`MAX_ROUTE_ATTEMPTS`] times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEngine {
    config: GridConfig,
    solution: Path,
    tracer: RouteTracer,
    attempts: Vec<RouteAttempt>,
    state: EngineState,
}

impl RouteEngine {
    pub fn new(config: GridConfig, solution: Path) -> Result<Self> {
        config.validate()?;
        if !solution.is_hamiltonian(&config) {
            return Err(GameError::IncompletePath {
                covered: solution.len(),
                total: config.total_cells().into(),
            });
        }
        let start = solution.start().ok_or(GameError::InvalidCoords)?;
        let tracer = RouteTracer::new(config, start)?;
        Ok(Self {
            config,
            solution,
            tracer,
            attempts: Vec::with_capacity(MAX_ROUTE_ATTEMPTS.into()),
            state: Default::default(),
        })
    }

    /// Session over the hidden route generated from `seed`.
    pub fn from_seed(config: GridConfig, seed: i64) -> Result<Self> {
        config.validate()?;
        Self::new(config, generate_hamiltonian_path(config, seed))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Both endpoints are shown to the player up front.
    pub fn endpoints(&self) -> (Cell, Cell) {
        let cells = self.solution.cells();
        (cells[0], cells[cells.len() - 1])
    }

    pub fn solution(&self) -> &Path {
        &self.solution
    }

    pub fn tracer(&self) -> &RouteTracer {
        &self.tracer
    }

    pub fn attempts(&self) -> &[RouteAttempt] {
        &self.attempts
    }

    pub fn attempts_left(&self) -> usize {
        usize::from(MAX_ROUTE_ATTEMPTS).saturating_sub(self.attempts.len())
    }

    pub fn step(&mut self, cell: Cell) -> Result<TraceOutcome> {
        self.check_not_finished()?;
        self.tracer.step(cell)
    }

    pub fn reset_trace(&mut self) -> Result<()> {
        self.check_not_finished()?;
        self.tracer.reset();
        Ok(())
    }

    /// Scores the traced path. Only a path covering the whole grid counts as
    /// an attempt; after a miss the trace starts over from the start cell.
    pub fn submit(&mut self) -> Result<&RouteAttempt> {
        self.check_not_finished()?;
        if !self.tracer.is_complete() {
            return Err(GameError::IncompletePath {
                covered: self.tracer.cells().len(),
                total: self.config.total_cells().into(),
            });
        }

        let path = self.tracer.to_path();
        let score = score_attempt(&self.solution, &path);
        self.state = EngineState::after_submission(
            score.is_win(),
            self.attempts.len() + 1,
            MAX_ROUTE_ATTEMPTS.into(),
        );
        log::debug!(
            "route attempt {} scored {}/{}, state {:?}",
            self.attempts.len() + 1,
            score.correct_segments,
            score.total_segments,
            self.state
        );
        if !score.is_win() {
            self.tracer.reset();
        }

        self.attempts.push(RouteAttempt { path, score });
        Ok(&self.attempts[self.attempts.len() - 1])
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(engine: &mut RouteEngine, cells: &[Cell]) {
        for &cell in cells {
            engine.step(cell).unwrap();
        }
    }

    #[test]
    fn tracer_enforces_adjacency_and_uniqueness() {
        let mut tracer = RouteTracer::new(GridConfig::new(3), (0, 0)).unwrap();

        assert_eq!(tracer.step((1, 1)), Err(GameError::NotAdjacent((1, 1))));
        assert_eq!(tracer.step((0, 1)), Ok(TraceOutcome::Extended));
        assert_eq!(tracer.step((0, 0)), Err(GameError::AlreadyVisited((0, 0))));
        assert_eq!(tracer.step((0, 5)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn stepping_on_the_head_undoes_it() {
        let mut tracer = RouteTracer::new(GridConfig::new(3), (0, 0)).unwrap();
        tracer.step((0, 1)).unwrap();

        assert_eq!(tracer.step((0, 1)), Ok(TraceOutcome::Undone));
        assert_eq!(tracer.cells(), &[(0, 0)]);
        // the start cell cannot be removed
        assert_eq!(tracer.step((0, 0)), Err(GameError::AlreadyVisited((0, 0))));
        assert!(!tracer.undo());
        // undone cells can be visited again
        assert_eq!(tracer.step((0, 1)), Ok(TraceOutcome::Extended));
    }

    #[test]
    fn correct_route_wins_on_first_attempt() {
        let mut engine = RouteEngine::from_seed(GridConfig::DAILY_PATH, 20_261_018).unwrap();
        assert_eq!(engine.endpoints(), ((2, 2), (4, 2)));

        let cells = engine.solution().cells().to_vec();
        trace(&mut engine, &cells[1..]);
        assert!(engine.tracer().is_complete());

        let attempt = engine.submit().unwrap();
        assert_eq!(attempt.score.correct_segments, 24);
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.step((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn incomplete_trace_is_rejected_without_using_an_attempt() {
        let mut engine = RouteEngine::from_seed(GridConfig::DAILY_PATH, 42).unwrap();
        assert_eq!(
            engine.submit().unwrap_err(),
            GameError::IncompletePath {
                covered: 1,
                total: 25
            }
        );
        assert_eq!(engine.attempts_left(), 6);
    }

    #[test]
    fn six_misses_lose_and_reset_between_attempts() {
        let config = GridConfig::new(3);
        let solution = SnakePathGenerator.generate(config);
        let mut engine = RouteEngine::new(config, solution).unwrap();
        let wrong = [(0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (1, 1), (1, 0), (2, 0)];

        for attempt in 1..=6 {
            trace(&mut engine, &wrong);
            let score = engine.submit().unwrap().score;
            assert_eq!(score.correct_segments, 6);
            if attempt < 6 {
                assert_eq!(engine.state(), EngineState::Active);
                assert_eq!(engine.tracer().cells(), &[(0, 0)]);
            }
        }
        assert_eq!(engine.state(), EngineState::Lost);
        assert_eq!(engine.attempts_left(), 0);
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let config = GridConfig::new_unchecked(0, None);
        assert_eq!(
            RouteEngine::from_seed(config, 7).unwrap_err(),
            GameError::InvalidConfig
        );
        let solution = SnakePathGenerator.generate(GridConfig::new(1));
        assert_eq!(
            RouteEngine::new(config, solution).unwrap_err(),
            GameError::InvalidConfig
        );
    }

    #[test]
    fn new_rejects_non_covering_solution() {
        let config = GridConfig::new(3);
        let short = Path::from_cells(alloc::vec![(0, 0), (0, 1)], &config).unwrap();
        assert!(matches!(
            RouteEngine::new(config, short),
            Err(GameError::IncompletePath { covered: 2, total: 9 })
        ));
    }
}
