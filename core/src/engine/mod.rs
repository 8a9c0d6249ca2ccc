use serde::{Deserialize, Serialize};

pub use code_engine::*;
pub use color_engine::*;
pub use route_engine::*;

mod code_engine;
mod color_engine;
mod route_engine;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// State after a submission numbered `submitted` out of `limit`.
    pub(crate) const fn after_submission(won: bool, submitted: usize, limit: usize) -> Self {
        if won {
            Self::Won
        } else if submitted >= limit {
            Self::Lost
        } else {
            Self::Active
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}
