use alloc::vec::Vec;

use crate::*;
pub use backtracking::*;

mod backtracking;

pub trait PathGenerator {
    fn generate(self, config: GridConfig) -> Path;
}

/// Deterministic boustrophedon: rows top to bottom, alternating direction.
/// Always a valid path, used whenever the randomized search gives up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SnakePathGenerator;

impl PathGenerator for SnakePathGenerator {
    fn generate(self, config: GridConfig) -> Path {
        let size = config.size;
        let mut cells = Vec::with_capacity(config.total_cells().into());
        for row in 0..size {
            for step in 0..size {
                let col = if row % 2 == 0 { step } else { size - 1 - step };
                cells.push((row, col));
            }
        }
        Path::from_cells_unchecked(cells)
    }
}

/// Hidden route for a grid, reproducible from `seed`.
pub fn generate_hamiltonian_path(config: GridConfig, seed: i64) -> Path {
    BacktrackingPathGenerator::new(seed).generate(config)
}
