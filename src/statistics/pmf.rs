use crate::{
    dice::{Die, Face},
    error::{Error, Result},
};

pub fn factorial(n: u32) -> u32 {
    (1..=n).product()
}

pub fn binomial_coefficient(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    factorial(n) as f64 / (factorial(k) as f64 * factorial(n - k) as f64)
}

/// Probability of drawing exactly `counts` of each category in `n`
/// independent draws with the given per-category probabilities.
pub fn multinomial_probability(n: u32, counts: &[u32], probabilities: &[f64]) -> Result<f64> {
    if counts.len() != probabilities.len() {
        return Err(Error::LengthMismatch);
    }
    if counts.iter().sum::<u32>() != n {
        return Err(Error::CountSumMismatch);
    }

    let numerator = factorial(n) as f64;
    let denominator: f64 = counts.iter().map(|&k| factorial(k) as f64).product();
    let prob_product: f64 = counts
        .iter()
        .zip(probabilities.iter())
        .map(|(&k, &p)| p.powi(k as i32))
        .product();
    Ok(numerator / denominator * prob_product)
}

/// Probability that `combo.len()` dice distributed like `die` produce the
/// given outcome multiset. Fails if the combination names a face the die
/// does not have, or if the die's weights sum to zero.
pub fn combination_probability(die: &Die, combo: &[Face]) -> Result<f64> {
    if combo.is_empty() {
        return Err(Error::EmptyObservations);
    }
    if let Some(unknown) = combo.iter().find(|f| !die.faces().contains(f)) {
        return Err(Error::UnknownFace((*unknown).clone()));
    }

    let probabilities = die.probabilities()?;
    let counts: Vec<u32> = die
        .faces()
        .iter()
        .map(|face| combo.iter().filter(|f| *f == face).count() as u32)
        .collect();
    multinomial_probability(combo.len() as u32, &counts, &probabilities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
    }

    #[test]
    fn test_binomial_coefficient() {
        assert_eq!(binomial_coefficient(5, 2), 10.0);
        assert_eq!(binomial_coefficient(0, 0), 1.0);
        assert_eq!(binomial_coefficient(5, 0), 1.0);
        assert_eq!(binomial_coefficient(5, 5), 1.0);
        assert_eq!(binomial_coefficient(5, 6), 0.0);
    }

    #[test]
    fn test_multinomial_probability() {
        let counts = vec![2, 1, 1];
        let probabilities = vec![0.5, 0.3, 0.2];
        let prob = multinomial_probability(4, &counts, &probabilities).unwrap();
        let expected = 12.0 * 0.5_f64.powi(2) * 0.3 * 0.2;
        assert!((prob - expected).abs() < 1e-6);
    }

    #[test]
    fn test_multinomial_probability_rejects_bad_inputs() {
        assert_eq!(
            multinomial_probability(2, &[1, 1], &[0.5]).unwrap_err(),
            Error::LengthMismatch
        );
        assert_eq!(
            multinomial_probability(3, &[1, 1], &[0.5, 0.5]).unwrap_err(),
            Error::CountSumMismatch
        );
    }

    #[test]
    fn test_combination_probability_fair_coin_pair() {
        let coin = Die::new(["H", "T"]).unwrap();
        let mixed =
            combination_probability(&coin, &[Face::from("H"), Face::from("T")]).unwrap();
        let doubles =
            combination_probability(&coin, &[Face::from("H"), Face::from("H")]).unwrap();
        assert!((mixed - 0.5).abs() < 1e-12);
        assert!((doubles - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_combination_probabilities_sum_to_one() {
        // all multisets of two d3 rolls
        let die = Die::fair(3).unwrap();
        let faces = die.faces().to_vec();
        let mut total = 0.0;
        for i in 0..faces.len() {
            for j in i..faces.len() {
                total +=
                    combination_probability(&die, &[faces[i].clone(), faces[j].clone()]).unwrap();
            }
        }
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_combination_probability_unknown_face() {
        let die = Die::fair(3).unwrap();
        assert_eq!(
            combination_probability(&die, &[Face::Num(9)]).unwrap_err(),
            Error::UnknownFace(Face::Num(9))
        );
    }
}
