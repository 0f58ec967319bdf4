use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::{
    dice::{Die, Face},
    error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoodnessOfFit {
    pub statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
}

/// Chi-square goodness of fit of observed outcomes against the
/// distribution implied by the die's current weights.
///
/// Zero-weight faces contribute no expected count and are excluded from
/// the statistic; actually observing one is an error, since the model
/// gives it probability zero. A die with a single effective face fits any
/// sample of itself perfectly.
pub fn goodness_of_fit(die: &Die, outcomes: &[Face]) -> Result<GoodnessOfFit> {
    if outcomes.is_empty() {
        return Err(Error::EmptyObservations);
    }
    if let Some(unknown) = outcomes.iter().find(|f| !die.faces().contains(f)) {
        return Err(Error::UnknownFace((*unknown).clone()));
    }

    let probabilities = die.probabilities()?;
    let n = outcomes.len() as f64;

    let mut statistic = 0.0;
    let mut classes = 0usize;
    for (face, p) in die.faces().iter().zip(&probabilities) {
        let observed = outcomes.iter().filter(|f| *f == face).count() as f64;
        if *p == 0.0 {
            if observed > 0.0 {
                return Err(Error::ImpossibleOutcome(face.clone()));
            }
            continue;
        }
        let expected = p * n;
        statistic += (observed - expected).powi(2) / expected;
        classes += 1;
    }

    let degrees_of_freedom = classes.saturating_sub(1) as f64;
    let p_value = match ChiSquared::new(degrees_of_freedom) {
        Ok(chi) => 1.0 - chi.cdf(statistic),
        // degrees_of_freedom == 0: one effective face, nothing to test
        Err(_) => 1.0,
    };

    Ok(GoodnessOfFit {
        statistic,
        degrees_of_freedom,
        p_value,
    })
}
