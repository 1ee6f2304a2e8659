//! Weighted-average recommendation ranking
//!
//! For a target user, every other user with positive similarity votes on the
//! items the target has not rated. An item's predicted score is the
//! similarity-weighted mean of those votes.

use crate::preferences::{Preferences, Ratings};
use crate::similarity::Similarity;
use crate::{Error, Result};
use ahash::AHashMap;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// A ranked item with its predicted score
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub score: f64,
    pub item: String,
}

impl Recommendation {
    pub fn new(score: f64, item: impl Into<String>) -> Self {
        Self { score, item: item.into() }
    }
}

/// Configuration for a [`Recommender`]
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Treat a stored rating of exactly `0.0` as "not rated", making the
    /// item eligible for recommendation
    pub treat_zero_as_unrated: bool,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            treat_zero_as_unrated: true,
        }
    }
}

/// Per-item running sums (Σ rating·sim, Σ sim)
#[derive(Debug, Default)]
struct Accumulator {
    sums: AHashMap<String, (f64, f64)>,
    neighbours: usize,
}

impl Accumulator {
    fn add_neighbour(&mut self, target: &Ratings, other: &Ratings, sim: f64, zero_is_unrated: bool) {
        self.neighbours += 1;
        for (item, &rating) in other.iter() {
            let already_rated = match target.get(item) {
                None => false,
                Some(&r) => !(zero_is_unrated && r == 0.0),
            };
            if already_rated {
                continue;
            }
            let (total, sim_sum) = self.sums.entry(item.clone()).or_insert((0.0, 0.0));
            *total += rating * sim;
            *sim_sum += sim;
        }
    }

    fn merge(mut self, other: Accumulator) -> Accumulator {
        for (item, (total, sim_sum)) in other.sums {
            let entry = self.sums.entry(item).or_insert((0.0, 0.0));
            entry.0 += total;
            entry.1 += sim_sum;
        }
        self.neighbours += other.neighbours;
        self
    }

    fn into_rankings(self) -> Vec<Recommendation> {
        // Only positive similarities are accumulated, so every sim_sum is > 0
        let mut rankings: Vec<Recommendation> = self
            .sums
            .into_iter()
            .map(|(item, (total, sim_sum))| Recommendation { score: total / sim_sum, item })
            .collect();
        rankings.sort_by(rank_order);
        rankings
    }
}

/// Ranking order: score descending, then item name ascending
///
/// Sorting ascending and reversing would also reverse the names of tied
/// items; this comparator keeps ties alphabetical.
pub fn rank_order(a: &Recommendation, b: &Recommendation) -> Ordering {
    OrderedFloat(b.score)
        .cmp(&OrderedFloat(a.score))
        .then_with(|| a.item.cmp(&b.item))
}

/// The target's ratings and every other user, sorted by id
///
/// `None` for an empty mapping.
fn candidates<'p>(
    prefs: &'p Preferences,
    target: &str,
) -> Result<Option<(&'p Ratings, Vec<(&'p str, &'p Ratings)>)>> {
    if prefs.is_empty() {
        return Ok(None);
    }
    let target_ratings = prefs
        .ratings(target)
        .ok_or_else(|| Error::UnknownUser(target.to_string()))?;

    // Sorted so float sums come out the same on every run
    let mut others: Vec<(&str, &Ratings)> =
        prefs.iter().filter(|(user, _)| *user != target).collect();
    others.sort_unstable_by(|a, b| a.0.cmp(b.0));
    Ok(Some((target_ratings, others)))
}

fn finish(target: &str, candidates: usize, acc: Accumulator) -> Vec<Recommendation> {
    debug!(
        user = target,
        candidates,
        neighbours = acc.neighbours,
        items = acc.sums.len(),
        "aggregated neighbour ratings"
    );
    acc.into_rankings()
}

/// User-user collaborative filtering recommender
#[derive(Debug, Clone)]
pub struct Recommender<S> {
    similarity: S,
    config: RecommenderConfig,
}

impl<S: Similarity> Recommender<S> {
    /// Create a recommender with the default configuration
    pub fn new(similarity: S) -> Self {
        Self::with_config(similarity, RecommenderConfig::default())
    }

    pub fn with_config(similarity: S, config: RecommenderConfig) -> Self {
        Self { similarity, config }
    }

    pub fn similarity(&self) -> &S {
        &self.similarity
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Rank the items `target` has not rated
    ///
    /// # Arguments
    /// * `prefs` - The preference mapping
    /// * `target` - The user to recommend for
    ///
    /// # Returns
    /// Recommendations ordered by [`rank_order`]. Empty when `prefs` is empty
    /// or no other user has positive similarity to `target`.
    ///
    /// # Errors
    /// [`Error::UnknownUser`] if `target` is not in a non-empty `prefs`.
    /// Errors from the similarity strategy are returned unchanged.
    pub fn recommend(&self, prefs: &Preferences, target: &str) -> Result<Vec<Recommendation>> {
        let Some((target_ratings, others)) = candidates(prefs, target)? else {
            return Ok(Vec::new());
        };

        let mut acc = Accumulator::default();
        for &(other, other_ratings) in &others {
            let sim = self.similarity.compute(prefs, target, other)?;
            if sim <= 0.0 {
                continue;
            }
            acc.add_neighbour(target_ratings, other_ratings, sim, self.config.treat_zero_as_unrated);
        }

        Ok(finish(target, others.len(), acc))
    }
}

impl<S: Similarity + Sync> Recommender<S> {
    /// [`Recommender::recommend`] with the neighbour pass on the rayon pool
    ///
    /// Same ranking as the sequential pass up to floating-point summation
    /// order.
    pub fn recommend_parallel(
        &self,
        prefs: &Preferences,
        target: &str,
    ) -> Result<Vec<Recommendation>> {
        let Some((target_ratings, others)) = candidates(prefs, target)? else {
            return Ok(Vec::new());
        };

        let zero_is_unrated = self.config.treat_zero_as_unrated;
        let acc = others
            .par_iter()
            .try_fold(Accumulator::default, |mut acc, &(other, other_ratings)| {
                let sim = self.similarity.compute(prefs, target, other)?;
                if sim > 0.0 {
                    acc.add_neighbour(target_ratings, other_ratings, sim, zero_is_unrated);
                }
                Ok::<_, Error>(acc)
            })
            .try_reduce(Accumulator::default, |a, b| Ok(a.merge(b)))?;

        Ok(finish(target, others.len(), acc))
    }
}

/// Rank unrated items for `target` using `similarity`
///
/// Convenience wrapper around [`Recommender::recommend`] with the default
/// configuration.
pub fn get_recommendations<S: Similarity>(
    prefs: &Preferences,
    target: &str,
    similarity: S,
) -> Result<Vec<Recommendation>> {
    Recommender::new(similarity).recommend(prefs, target)
}
