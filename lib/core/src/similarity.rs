//! User-user similarity strategies
//!
//! The recommender is generic over [`Similarity`], so any metric with the
//! shape `(prefs, user_a, user_b) -> score` can be plugged in. [`Pearson`]
//! is the stock implementation.

use crate::preferences::{Preferences, Ratings};
use crate::{Error, Result};

/// A similarity metric between two users of a [`Preferences`] mapping
///
/// Implementations must be side-effect free so recommendations stay
/// deterministic. Positive scores mean agreement; the recommender ignores
/// neighbours scoring `<= 0`.
pub trait Similarity {
    /// Score how alike `user_a` and `user_b` rate items
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if either user is absent from `prefs`.
    fn compute(&self, prefs: &Preferences, user_a: &str, user_b: &str) -> Result<f64>;
}

impl<F> Similarity for F
where
    F: Fn(&Preferences, &str, &str) -> Result<f64>,
{
    fn compute(&self, prefs: &Preferences, user_a: &str, user_b: &str) -> Result<f64> {
        self(prefs, user_a, user_b)
    }
}

/// Pearson correlation over co-rated items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pearson;

impl Similarity for Pearson {
    fn compute(&self, prefs: &Preferences, user_a: &str, user_b: &str) -> Result<f64> {
        let a = lookup(prefs, user_a)?;
        let b = lookup(prefs, user_b)?;
        Ok(pearson_correlation(a, b))
    }
}

fn lookup<'a>(prefs: &'a Preferences, user: &str) -> Result<&'a Ratings> {
    prefs.ratings(user).ok_or_else(|| {
        Error::InvalidArgument(format!("user {user:?} is not in the preference mapping"))
    })
}

/// Pearson correlation between two rating sets
///
/// Only items present in both sets take part.
///
/// # Returns
/// Correlation in [-1.0, 1.0]. `0.0` when the sets share no items or
/// either side has zero variance over the shared items.
pub fn pearson_correlation(a: &Ratings, b: &Ratings) -> f64 {
    // Walk the smaller map and look items up in the larger one
    let (small, large, swapped) = if a.len() <= b.len() {
        (a, b, false)
    } else {
        (b, a, true)
    };

    let mut shared: Vec<(&str, f64, f64)> = small
        .iter()
        .filter_map(|(item, &r_small)| {
            let &r_large = large.get(item)?;
            let (r1, r2) = if swapped { (r_large, r_small) } else { (r_small, r_large) };
            Some((item.as_str(), r1, r2))
        })
        .collect();
    // Fixed summation order: the result must not depend on hash seeds
    shared.sort_unstable_by(|x, y| x.0.cmp(y.0));

    let n = shared.len();
    let (mut sum1, mut sum2) = (0.0f64, 0.0f64);
    let (mut sum1_sq, mut sum2_sq) = (0.0f64, 0.0f64);
    let mut p_sum = 0.0f64;

    for &(_, r1, r2) in &shared {
        sum1 += r1;
        sum2 += r2;
        sum1_sq += r1 * r1;
        sum2_sq += r2 * r2;
        p_sum += r1 * r2;
    }

    if n == 0 {
        return 0.0;
    }

    let n = n as f64;
    let num = p_sum - (sum1 * sum2 / n);
    let var_product = (sum1_sq - sum1 * sum1 / n) * (sum2_sq - sum2 * sum2 / n);

    // Zero denominator. Rounding can push a zero variance slightly negative.
    if !var_product.is_finite() || var_product <= 0.0 {
        return 0.0;
    }

    (num / var_product.sqrt()).clamp(-1.0, 1.0)
}
