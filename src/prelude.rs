pub use crate::{
    dice::{
        Die, Face, Rollable,
        notation::{DiceSpec, parse_dice},
    },
    error::{Error, Result},
    simulation::{
        CellId, Form, Game, NarrowTable, PlayResult, PlayTable, PlayedGame, Timestamp, WideTable,
    },
    statistics::{
        analyzer::{Analyzer, FaceCountTable, OutcomeCountTable, Outcomes},
        fit::{GoodnessOfFit, goodness_of_fit},
        pmf::combination_probability,
        roller::Roller,
    },
    table::Table,
    utils::Guarded,
};
