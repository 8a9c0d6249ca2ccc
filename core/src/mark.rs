use serde::{Deserialize, Serialize};

/// Per-position verdict for one guessed symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Right symbol in the right position.
    Exact,
    /// Symbol occurs at another, not yet claimed, position of the secret.
    Present,
    Absent,
}

impl Mark {
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::Absent
    }
}
