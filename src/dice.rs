use derive_more::{Display, From};
use rand::distr::{Distribution, weighted::WeightedIndex};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    statistics::roller::Roller,
    table::Table,
};

pub mod notation;

/// One labeled outcome on a die. Labels are the identity key: two faces
/// are the same face exactly when their labels are equal.
#[derive(
    Debug, Clone, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Face {
    #[display("{_0}")]
    Num(i64),
    #[display("{_0}")]
    Text(String),
}

impl From<i32> for Face {
    fn from(value: i32) -> Self {
        Face::Num(i64::from(value))
    }
}

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Face::Text(value.to_string())
    }
}

/// The capability a [`Game`](crate::simulation::Game) requires of its dice.
pub trait Rollable {
    fn faces(&self) -> &[Face];

    fn roll(&self, roller: &mut Roller, num_rolls: usize) -> Result<Vec<Face>>;
}

/// A die with a fixed set of unique faces and mutable non-negative
/// weights. Every face starts at weight 1.0; the probability of face `i`
/// is `weights[i] / weights.sum()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<Face>,
    weights: Vec<f64>,
}

impl Die {
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Face>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
        if faces.is_empty() {
            return Err(Error::EmptyFaces);
        }
        let mut seen = FxHashSet::default();
        for face in &faces {
            if !seen.insert(face.clone()) {
                return Err(Error::DuplicateFace(face.clone()));
            }
        }
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    /// A fair numeric die with faces `1..=sides`.
    pub fn fair(sides: i64) -> Result<Self> {
        if sides < 1 {
            return Err(Error::EmptyFaces);
        }
        Self::new(1..=sides)
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Replaces the weight of one face. The lookup happens before any
    /// mutation, so a failed call leaves the die untouched.
    pub fn change_weight(&mut self, face: impl Into<Face>, new_weight: f64) -> Result<()> {
        let face = face.into();
        let Some(index) = self.faces.iter().position(|f| *f == face) else {
            return Err(Error::UnknownFace(face));
        };
        if !new_weight.is_finite() || new_weight < 0.0 {
            return Err(Error::InvalidWeight(new_weight));
        }
        self.weights[index] = new_weight;
        Ok(())
    }

    /// Draws `num_rolls` independent weighted samples with replacement.
    /// Rolling never alters the weights; the outcomes are not retained by
    /// the die.
    pub fn roll(&self, roller: &mut Roller, num_rolls: usize) -> Result<Vec<Face>> {
        if num_rolls == 0 {
            return Err(Error::ZeroRolls);
        }
        // rebuilt on every call so weight changes are always picked up
        let index = self.weight_index()?;
        let mut outcomes = Vec::with_capacity(num_rolls);
        for _ in 0..num_rolls {
            outcomes.push(self.faces[index.sample(roller.rng())].clone());
        }
        Ok(outcomes)
    }

    /// Per-face selection probabilities implied by the current weights.
    pub fn probabilities(&self) -> Result<Vec<f64>> {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            return Err(Error::ZeroTotalWeight);
        }
        Ok(self.weights.iter().map(|weight| weight / total).collect())
    }

    /// A faces-with-weights snapshot; mutating it never affects the die.
    pub fn show(&self) -> Table<Face, String, f64> {
        Table::from_parts(
            vec!["weight".to_string()],
            self.faces.clone(),
            self.weights.clone(),
        )
    }

    fn weight_index(&self) -> Result<WeightedIndex<f64>> {
        // change_weight rejects negative and non-finite weights, so the
        // only way this fails is an all-zero total
        WeightedIndex::new(self.weights.iter()).map_err(|_| Error::ZeroTotalWeight)
    }
}

impl Rollable for Die {
    fn faces(&self) -> &[Face] {
        self.faces()
    }

    fn roll(&self, roller: &mut Roller, num_rolls: usize) -> Result<Vec<Face>> {
        self.roll(roller, num_rolls)
    }
}
