use thiserror::Error;

use crate::dice::Face;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("a die needs at least one face")]
    EmptyFaces,
    #[error("duplicate face: {0}")]
    DuplicateFace(Face),
    #[error("unknown face: {0}")]
    UnknownFace(Face),
    #[error("invalid weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),
    #[error("total weight is zero: no valid probability distribution")]
    ZeroTotalWeight,
    #[error("number of rolls must be a positive integer")]
    ZeroRolls,
    #[error("a game needs at least one die")]
    NoDice,
    #[error("the game has not been played yet")]
    NotPlayed,
    #[error("unknown result form {0:?}: expected \"wide\" or \"narrow\"")]
    UnknownForm(String),
    #[error("invalid dice notation {0:?}: expected something like \"3d6\"")]
    InvalidNotation(String),
    #[error("a table needs at least one column")]
    NoColumns,
    #[error("duplicate column key in table")]
    DuplicateColumn,
    #[error("row width {got} does not match column count {expected}")]
    RowWidthMismatch { expected: usize, got: usize },
    #[error("counts and probabilities must have the same length")]
    LengthMismatch,
    #[error("counts must sum to the number of draws")]
    CountSumMismatch,
    #[error("no outcomes to fit")]
    EmptyObservations,
    #[error("observed face {0} has zero weight")]
    ImpossibleOutcome(Face),
}
