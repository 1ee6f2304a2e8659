//! # simrec Core
//!
//! Core library for the simrec recommender.
//!
//! This crate provides the in-memory rating model and the algorithms:
//!
//! - [`Preferences`] - Sparse user → (item → rating) mapping
//! - [`Similarity`] - Pluggable user-user similarity strategy
//! - [`Pearson`] - Pearson correlation over co-rated items
//! - [`Recommender`] - Similarity-weighted prediction and ranking
//!
//! ## Example
//!
//! ```rust
//! use simrec_core::{Preferences, Pearson, Recommender};
//!
//! let prefs = Preferences::from_triples([
//!     ("A", "x", 5.0), ("A", "y", 3.0),
//!     ("B", "x", 5.0), ("B", "y", 4.0), ("B", "z", 2.0),
//!     ("C", "x", 1.0), ("C", "y", 1.0),
//! ]).unwrap();
//!
//! let recommender = Recommender::new(Pearson);
//! let recs = recommender.recommend(&prefs, "A").unwrap();
//! assert_eq!(recs[0].item, "z");
//! ```

pub mod error;
pub mod preferences;
pub mod similarity;
pub mod recommender;

pub use error::{Error, Result};
pub use preferences::{Preferences, Ratings};
pub use similarity::{Similarity, Pearson, pearson_correlation};
pub use recommender::{
    Recommender, RecommenderConfig, Recommendation, get_recommendations, rank_order,
};
