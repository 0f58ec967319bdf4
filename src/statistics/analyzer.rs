use std::{collections::BTreeMap, fmt};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    dice::Face,
    error::Result,
    simulation::PlayedGame,
    table::Table,
};

/// Per-roll face counts: rows are roll indices, columns the face
/// vocabulary.
pub type FaceCountTable = Table<usize, Face, u64>;

/// Frequency of distinct outcome tuples, one count column.
pub type OutcomeCountTable = Table<Outcomes, String, u64>;

/// An outcome tuple used as a grouping key — sorted for combinations,
/// in die-column order for permutations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Outcomes(pub Vec<Face>);

impl fmt::Display for Outcomes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, face) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{face}")?;
        }
        write!(f, ")")
    }
}

/// Computes descriptive statistics over a played game's current result.
///
/// The analyzer borrows the game and re-reads its result on every query,
/// so nothing here can go stale; there is no snapshot to invalidate.
pub struct Analyzer<'a, G: PlayedGame> {
    game: &'a G,
}

impl<'a, G: PlayedGame> Analyzer<'a, G> {
    /// Fails if the game has not produced a result yet.
    pub fn new(game: &'a G) -> Result<Self> {
        game.last_play()?;
        Ok(Self { game })
    }

    /// Counts rolls in which every die produced the same face. With a
    /// single die every roll is trivially a jackpot.
    pub fn jackpot(&self) -> Result<u64> {
        let result = self.game.last_play()?;
        let mut jackpots = 0;
        for (_, row) in result.table.iter_rows() {
            if row.iter().all(|face| Some(face) == row.first()) {
                jackpots += 1;
            }
        }
        Ok(jackpots)
    }

    /// How many dice produced each face, per roll. Columns cover the
    /// game's whole vocabulary (plus anything that showed up in the
    /// results), so never-rolled faces appear with count 0 and every row
    /// sums to the number of dice.
    pub fn face_counts_per_roll(&self) -> Result<FaceCountTable> {
        let result = self.game.last_play()?;

        let mut columns = self.game.vocabulary();
        let mut seen: FxHashSet<Face> = columns.iter().cloned().collect();
        for (_, row) in result.table.iter_rows() {
            for face in row {
                if seen.insert(face.clone()) {
                    columns.push(face.clone());
                }
            }
        }

        let mut table = Table::new(columns.clone())?;
        for (roll, row) in result.table.iter_rows() {
            let counts: Vec<u64> = columns
                .iter()
                .map(|face| row.iter().filter(|f| *f == face).count() as u64)
                .collect();
            table.push_row(*roll, counts)?;
        }
        Ok(table)
    }

    /// Frequency of each distinct multiset of outcomes (order ignored),
    /// keyed by the sorted tuple. Counts sum to the number of rolls.
    pub fn combo_count(&self) -> Result<OutcomeCountTable> {
        self.tuple_counts(true)
    }

    /// Frequency of each distinct ordered outcome tuple (die-column order
    /// kept). Counts sum to the number of rolls.
    pub fn permutation_count(&self) -> Result<OutcomeCountTable> {
        self.tuple_counts(false)
    }

    fn tuple_counts(&self, sort: bool) -> Result<OutcomeCountTable> {
        let result = self.game.last_play()?;
        let mut counts: BTreeMap<Outcomes, u64> = BTreeMap::new();
        for (_, row) in result.table.iter_rows() {
            let mut key = row.to_vec();
            if sort {
                key.sort();
            }
            *counts.entry(Outcomes(key)).or_insert(0) += 1;
        }

        let mut table = Table::new(vec!["count".to_string()])?;
        for (key, count) in counts {
            table.push_row(key, vec![count])?;
        }
        Ok(table)
    }
}
