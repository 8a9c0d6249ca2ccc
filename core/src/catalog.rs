//! Built-in daily puzzles and the schedules that rotate through them.

use alloc::string::String;
use alloc::vec::Vec;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::*;

const fn epoch(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid epoch"),
    }
}

/// Start of the optional daily rotation for the code games. Players of those
/// games pick a puzzle by index; [`CodeGame::puzzle_for`] is an extra for
/// callers that want one puzzle per day.
pub const CODE_GAMES_EPOCH: NaiveDate = epoch(2026, 2, 5);
pub const LINK_FIVE_EPOCH: NaiveDate = epoch(2026, 2, 9);
pub const CHROMA_EPOCH: NaiveDate = epoch(2026, 1, 1);

pub const SIGNAL_BREAK_SYMBOLS: [&str; 6] = ["circle", "triangle", "square", "diamond", "star", "hex"];
pub const RUNES: [&str; 6] = ["Ember", "Frost", "Gale", "Stone", "Void", "Flux"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodePuzzle {
    pub answer: [Symbol; 4],
    pub title: Option<&'static str>,
    pub hint: Option<&'static str>,
}

impl CodePuzzle {
    const fn bare(answer: [Symbol; 4]) -> Self {
        Self {
            answer,
            title: None,
            hint: None,
        }
    }

    const fn hinted(answer: [Symbol; 4], hint: &'static str) -> Self {
        Self {
            answer,
            title: None,
            hint: Some(hint),
        }
    }

    const fn titled(answer: [Symbol; 4], title: &'static str, hint: &'static str) -> Self {
        Self {
            answer,
            title: Some(title),
            hint: Some(hint),
        }
    }
}

pub const SIGNAL_LOCK_PUZZLES: [CodePuzzle; 5] = [
    CodePuzzle::hinted([3, 8, 1, 6], "Somewhere between dusk and dawn"),
    CodePuzzle::hinted([7, 2, 9, 4], "A cardinal direction, scrambled"),
    CodePuzzle::hinted([5, 0, 6, 3], "Counting down from the middle"),
    CodePuzzle::hinted([9, 4, 2, 7], "The edges of a square, rearranged"),
    CodePuzzle::hinted([1, 6, 8, 3], "Fragments of a familiar year"),
];

pub const SIGNAL_BREAK_PUZZLES: [CodePuzzle; 5] = [
    CodePuzzle::bare([4, 0, 1, 5]),
    CodePuzzle::bare([3, 2, 3, 0]),
    CodePuzzle::bare([1, 5, 4, 2]),
    CodePuzzle::bare([0, 0, 3, 1]),
    CodePuzzle::bare([5, 4, 2, 4]),
];

pub const SPELLCAST_PUZZLES: [CodePuzzle; 5] = [
    CodePuzzle::titled(
        [2, 0, 5, 1],
        "The Waking Storm",
        "Wind begins, fire follows, chaos blooms, and cold closes.",
    ),
    CodePuzzle::titled(
        [3, 4, 0, 3],
        "The Sealed Gate",
        "Anchored twice, hollowed once, and sparked between.",
    ),
    CodePuzzle::titled(
        [1, 5, 3, 2],
        "The Shifting Glyph",
        "Ice turns to chaos, earth rises, and wind carries it away.",
    ),
    CodePuzzle::titled(
        [4, 2, 1, 0],
        "The Hollow Flame",
        "Emptiness gives way to motion, chill, then heat.",
    ),
    CodePuzzle::titled(
        [5, 3, 4, 5],
        "The Twin Eclipse",
        "Chaos frames the spell, steady earth and hollow space between.",
    ),
];

/// The three fixed-alphabet code games.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeGame {
    SignalLock,
    SignalBreak,
    Spellcast,
}

impl CodeGame {
    pub const fn config(self) -> CodeConfig {
        match self {
            Self::SignalLock => CodeConfig::SIGNAL_LOCK,
            Self::SignalBreak => CodeConfig::SIGNAL_BREAK,
            Self::Spellcast => CodeConfig::SPELLCAST,
        }
    }

    pub const fn puzzles(self) -> &'static [CodePuzzle] {
        match self {
            Self::SignalLock => &SIGNAL_LOCK_PUZZLES,
            Self::SignalBreak => &SIGNAL_BREAK_PUZZLES,
            Self::Spellcast => &SPELLCAST_PUZZLES,
        }
    }

    /// Display name of each symbol, `None` for plain digits.
    pub const fn symbol_names(self) -> Option<&'static [&'static str]> {
        match self {
            Self::SignalLock => None,
            Self::SignalBreak => Some(&SIGNAL_BREAK_SYMBOLS),
            Self::Spellcast => Some(&RUNES),
        }
    }

    pub const fn schedule(self) -> DailySchedule {
        DailySchedule::new_unchecked(CODE_GAMES_EPOCH, self.puzzles().len() as u32)
    }

    /// Rotates from [`CODE_GAMES_EPOCH`]; [`CodeGame::engine`] selects by index.
    pub fn puzzle_for(self, date: NaiveDate) -> (usize, &'static CodePuzzle) {
        let index = self.schedule().index_for(date);
        (index, &self.puzzles()[index])
    }

    /// Session for puzzle `index`, wrapping past the end of the set.
    pub fn engine(self, index: usize) -> Result<CodebreakerEngine> {
        let puzzles = self.puzzles();
        CodebreakerEngine::new(&puzzles[index % puzzles.len()].answer, self.config())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChainPuzzle {
    /// Consecutive words join into a compound word or phrase.
    pub chain: [&'static str; 5],
    pub decoys: [&'static str; 3],
    pub connections: [&'static str; 4],
}

pub const LINK_FIVE_PUZZLES: [ChainPuzzle; 5] = [
    ChainPuzzle {
        chain: ["BOOK", "MARK", "DOWN", "TOWN", "HOUSE"],
        decoys: ["SHELF", "CASE", "WORM"],
        connections: ["bookmark", "markdown", "downtown", "townhouse"],
    },
    ChainPuzzle {
        chain: ["BACK", "FIRE", "SIDE", "LINE", "UP"],
        decoys: ["DOOR", "YARD", "BONE"],
        connections: ["backfire", "fireside", "sideline", "lineup"],
    },
    ChainPuzzle {
        chain: ["HEAD", "BAND", "STAND", "POINT", "BLANK"],
        decoys: ["LIGHT", "FIRST", "MASTER"],
        connections: ["headband", "bandstand", "standpoint", "point-blank"],
    },
    ChainPuzzle {
        chain: ["RAIN", "DROP", "KICK", "BACK", "STAGE"],
        decoys: ["COAT", "FALL", "BOW"],
        connections: ["raindrop", "dropkick", "kickback", "backstage"],
    },
    ChainPuzzle {
        chain: ["NIGHT", "FALL", "OUT", "LINE", "UP"],
        decoys: ["CLUB", "SHIFT", "OWL"],
        connections: ["nightfall", "fallout", "outline", "lineup"],
    },
];

pub const LINK_FIVE_SCHEDULE: DailySchedule =
    DailySchedule::new_unchecked(LINK_FIVE_EPOCH, LINK_FIVE_PUZZLES.len() as u32);

/// Seed the word bank of puzzle `index` is shuffled with.
pub const fn word_bank_seed(index: usize) -> i64 {
    index as i64 * 9973 + 42
}

impl ChainPuzzle {
    /// Chain and decoy words in the order they are shown for puzzle `index`.
    pub fn word_bank(&self, index: usize) -> [&'static str; 8] {
        let [a, b, c, d, e] = self.chain;
        let [x, y, z] = self.decoys;
        let mut bank = [a, b, c, d, e, x, y, z];
        SeededRng::new(word_bank_seed(index)).shuffle_by_state(&mut bank);
        bank
    }
}

/// Word chain session. Words are scored as symbols of the shuffled bank.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkFiveGame {
    puzzle: &'static ChainPuzzle,
    bank: [&'static str; 8],
    engine: CodebreakerEngine,
}

impl LinkFiveGame {
    pub fn new(index: usize) -> Result<Self> {
        let puzzles: &'static [ChainPuzzle] = &LINK_FIVE_PUZZLES;
        let index = index % puzzles.len();
        let puzzle = &puzzles[index];
        let bank = puzzle.word_bank(index);
        let secret = puzzle
            .chain
            .iter()
            .map(|word| symbol_of(&bank, word))
            .collect::<Result<Vec<_>>>()?;
        let engine = CodebreakerEngine::new(&secret, CodeConfig::LINK_FIVE)?;
        Ok(Self {
            puzzle,
            bank,
            engine,
        })
    }

    pub fn for_date(date: NaiveDate) -> Result<Self> {
        Self::new(LINK_FIVE_SCHEDULE.index_for(date))
    }

    pub fn puzzle(&self) -> &ChainPuzzle {
        self.puzzle
    }

    pub fn bank(&self) -> &[&'static str] {
        &self.bank
    }

    pub fn engine(&self) -> &CodebreakerEngine {
        &self.engine
    }

    pub fn symbol_of(&self, word: &str) -> Result<Symbol> {
        symbol_of(&self.bank, word)
    }

    /// Scores a chain of words taken from the bank, ignoring ASCII case.
    pub fn submit(&mut self, words: &[&str]) -> Result<&GuessRecord> {
        let symbols = words
            .iter()
            .map(|word| symbol_of(&self.bank, word))
            .collect::<Result<Vec<_>>>()?;
        self.engine.submit(&symbols)
    }

    /// Renders a guess back into words. Symbols past the bank are rejected.
    pub fn words_of(&self, code: &Code) -> Result<Vec<String>> {
        code.symbols()
            .iter()
            .map(|&symbol| {
                self.bank
                    .get(usize::from(symbol))
                    .map(|&word| String::from(word))
                    .ok_or(GameError::SymbolOutOfRange {
                        symbol,
                        alphabet_size: CodeConfig::LINK_FIVE.alphabet_size,
                    })
            })
            .collect()
    }
}

fn symbol_of(bank: &[&str], word: &str) -> Result<Symbol> {
    bank.iter()
        .position(|entry| entry.eq_ignore_ascii_case(word))
        .map(|index| index as Symbol)
        .ok_or(GameError::UnknownWord)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorPuzzle {
    pub target: Hsl,
    pub name: &'static str,
    pub clue: &'static str,
}

pub const CHROMA_PUZZLES: [ColorPuzzle; 5] = [
    ColorPuzzle {
        target: Hsl::new_unchecked(16, 85, 55),
        name: "Ember",
        clue: "A dying fire still glows",
    },
    ColorPuzzle {
        target: Hsl::new_unchecked(162, 72, 44),
        name: "Lagoon",
        clue: "Where the jungle meets the sea",
    },
    ColorPuzzle {
        target: Hsl::new_unchecked(271, 65, 58),
        name: "Amethyst",
        clue: "Royalty in crystalline form",
    },
    ColorPuzzle {
        target: Hsl::new_unchecked(45, 90, 52),
        name: "Marigold",
        clue: "The flower that faces the sun",
    },
    ColorPuzzle {
        target: Hsl::new_unchecked(340, 70, 48),
        name: "Garnet",
        clue: "Deep as a winter jewel",
    },
];

pub const CHROMA_SCHEDULE: DailySchedule =
    DailySchedule::new_unchecked(CHROMA_EPOCH, CHROMA_PUZZLES.len() as u32);

pub fn chroma_for(date: NaiveDate) -> (&'static ColorPuzzle, ChromaEngine) {
    let puzzles: &'static [ColorPuzzle] = &CHROMA_PUZZLES;
    let puzzle = &puzzles[CHROMA_SCHEDULE.index_for(date)];
    (puzzle, ChromaEngine::new(puzzle.target))
}

/// Hidden route of the grid game for `date`.
pub fn daily_path(date: NaiveDate) -> Path {
    generate_hamiltonian_path(GridConfig::DAILY_PATH, date_stamp_seed(date))
}

pub fn daily_route(date: NaiveDate) -> Result<RouteEngine> {
    RouteEngine::new(GridConfig::DAILY_PATH, daily_path(date))
}
