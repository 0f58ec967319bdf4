use std::{fmt, str::FromStr};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    dice::{Face, Rollable},
    error::{Error, Result},
    statistics::roller::Roller,
    table::Table,
    utils::Guarded,
};

pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Roll results shaped roll × die.
pub type WideTable = Table<usize, usize, Face>;

/// Roll results reshaped to one row per (roll, die) cell.
pub type NarrowTable = Table<CellId, String, Face>;

/// Identifies one cell of the wide table: (roll index, die index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub usize, pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    #[default]
    Wide,
    Narrow,
}

impl FromStr for Form {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Form::Wide),
            "narrow" => Ok(Form::Narrow),
            other => Err(Error::UnknownForm(other.to_string())),
        }
    }
}

/// The outcome table of one `play`, with when it ran and how long it took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    pub table: WideTable,
    pub played_at: Timestamp,
    pub elapsed_ms: i64,
}

/// A result table in whichever shape the caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayTable {
    Wide(WideTable),
    Narrow(NarrowTable),
}

impl PlayTable {
    pub fn n_rows(&self) -> usize {
        match self {
            PlayTable::Wide(table) => table.n_rows(),
            PlayTable::Narrow(table) => table.n_rows(),
        }
    }

    pub fn pretty_print(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match self {
            PlayTable::Wide(table) => table.pretty_print(f),
            PlayTable::Narrow(table) => table.pretty_print(f),
        }
    }
}

/// The capability an [`Analyzer`](crate::statistics::analyzer::Analyzer)
/// requires of a game: its current result and its face vocabulary.
pub trait PlayedGame {
    fn last_play(&self) -> Result<&PlayResult>;

    /// Union of every die's faces, in first-appearance order.
    fn vocabulary(&self) -> Vec<Face>;
}

/// A set of dice rolled together. Die 0 is column 0 in every result, and
/// each `play` wholly replaces the previous one.
///
/// Whether the dice share a face vocabulary is deliberately not checked;
/// a game is happy to roll mismatched dice and leave the interpretation
/// to the caller.
pub struct Game {
    dice: Vec<Box<dyn Rollable>>,
    roller: Roller,
    last_play: Guarded<Option<PlayResult>>,
}

impl Game {
    pub fn new(dice: Vec<Box<dyn Rollable>>) -> Result<Self> {
        Self::with_roller(dice, Roller::new())
    }

    pub fn with_roller(dice: Vec<Box<dyn Rollable>>, roller: Roller) -> Result<Self> {
        if dice.is_empty() {
            return Err(Error::NoDice);
        }
        Ok(Self {
            dice,
            roller,
            last_play: Guarded::new(None),
        })
    }

    pub fn die_count(&self) -> usize {
        self.dice.len()
    }

    /// Rolls every die once per roll index, recording an
    /// `n_rolls × die_count` wide table. The previous result survives any
    /// failure; the stored result only changes once the whole table is
    /// built.
    pub fn play(&mut self, n_rolls: usize) -> Result<()> {
        if n_rolls == 0 {
            return Err(Error::ZeroRolls);
        }

        let started = chrono::Utc::now();
        let mut roller = self.roller.fork();
        let mut table = Table::new((0..self.dice.len()).collect())?;
        for roll in 0..n_rolls {
            let mut outcomes = Vec::with_capacity(self.dice.len());
            for die in &self.dice {
                outcomes.extend(die.roll(&mut roller, 1)?);
            }
            table.push_row(roll, outcomes)?;
        }
        let elapsed = chrono::Utc::now() - started;

        log::debug!(
            "played {} rolls across {} dice in {}ms",
            n_rolls,
            self.dice.len(),
            elapsed.num_milliseconds()
        );

        Guarded::replace(
            &mut self.last_play,
            Some(PlayResult {
                table,
                played_at: started,
                elapsed_ms: elapsed.num_milliseconds(),
            }),
        );
        Ok(())
    }

    pub fn show(&self, form: Form) -> Result<PlayTable> {
        match form {
            Form::Wide => Ok(PlayTable::Wide(self.show_wide()?)),
            Form::Narrow => Ok(PlayTable::Narrow(self.show_narrow()?)),
        }
    }

    /// An independent copy of the stored wide table.
    pub fn show_wide(&self) -> Result<WideTable> {
        Ok(self.last_play()?.table.clone())
    }

    /// The stored result reshaped to one row per (roll, die) cell,
    /// preserving both indices for later grouping.
    pub fn show_narrow(&self) -> Result<NarrowTable> {
        let wide = &self.last_play()?.table;
        let mut narrow = Table::new(vec!["outcome".to_string()])?;
        for (roll, row) in wide.iter_rows() {
            for (die, face) in wide.column_keys().iter().zip(row) {
                narrow.push_row(CellId(*roll, *die), vec![face.clone()])?;
            }
        }
        Ok(narrow)
    }
}

impl PlayedGame for Game {
    fn last_play(&self) -> Result<&PlayResult> {
        self.last_play.get().as_ref().ok_or(Error::NotPlayed)
    }

    fn vocabulary(&self) -> Vec<Face> {
        let mut seen = FxHashSet::default();
        let mut vocabulary = Vec::new();
        for die in &self.dice {
            for face in die.faces() {
                if seen.insert(face.clone()) {
                    vocabulary.push(face.clone());
                }
            }
        }
        vocabulary
    }
}
