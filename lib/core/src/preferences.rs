//! Two-level preference mapping: user → (item → rating)

use crate::{Error, Result};
use ahash::AHashMap;

/// Ratings given by a single user, keyed by item name
pub type Ratings = AHashMap<String, f64>;

/// Sparse user-item rating matrix
///
/// Every stored rating is finite. The mapping is built once and then only
/// read by the similarity and recommendation code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    users: AHashMap<String, Ratings>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rating` for (`user`, `item`), replacing any previous rating
    pub fn insert(
        &mut self,
        user: impl Into<String>,
        item: impl Into<String>,
        rating: f64,
    ) -> Result<()> {
        let user = user.into();
        let item = item.into();
        if !rating.is_finite() {
            return Err(Error::InvalidRating { user, item, rating });
        }
        self.users.entry(user).or_default().insert(item, rating);
        Ok(())
    }

    /// Build a mapping from (user, item, rating) triples
    pub fn from_triples<U, I, T>(triples: T) -> Result<Self>
    where
        U: Into<String>,
        I: Into<String>,
        T: IntoIterator<Item = (U, I, f64)>,
    {
        let mut prefs = Self::new();
        for (user, item, rating) in triples {
            prefs.insert(user, item, rating)?;
        }
        Ok(prefs)
    }

    pub fn ratings(&self, user: &str) -> Option<&Ratings> {
        self.users.get(user)
    }

    pub fn rating(&self, user: &str, item: &str) -> Option<f64> {
        self.users.get(user)?.get(item).copied()
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Users paired with their ratings, in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ratings)> {
        self.users.iter().map(|(user, ratings)| (user.as_str(), ratings))
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Total number of stored ratings across all users
    pub fn rating_count(&self) -> usize {
        self.users.values().map(|r| r.len()).sum()
    }
}
