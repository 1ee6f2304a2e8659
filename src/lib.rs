//! # simrec
//!
//! User-user collaborative filtering: Pearson similarity between users and
//! similarity-weighted rating prediction for the items a user has not rated.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! simrec --ratings reviews.json --entities restaurants.json --user rLtl8ZkDX5vH5nAx9C3q5Q
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use simrec::prelude::*;
//!
//! let prefs = Preferences::from_triples([
//!     ("alice", "Pizzeria", 5.0), ("alice", "Sushi Bar", 3.0),
//!     ("bob", "Pizzeria", 5.0), ("bob", "Sushi Bar", 4.0), ("bob", "Taqueria", 2.0),
//! ]).unwrap();
//!
//! let recs = Recommender::new(Pearson).recommend(&prefs, "alice").unwrap();
//! assert_eq!(recs[0].item, "Taqueria");
//! ```
//!
//! ## Crate Structure
//!
//! - `simrec-core` - Preference mapping, similarity strategies, recommender
//! - `simrec-loader` - Rating/entity record loading and report output

// Re-export core types
pub use simrec_core::{
    Preferences, Ratings,
    Similarity, Pearson, pearson_correlation,
    Recommender, RecommenderConfig, Recommendation,
    get_recommendations, rank_order,
    Error, Result,
};

// Re-export loader
pub use simrec_loader::{
    LoadOptions, LoaderError,
    RatingRecord, EntityRecord,
    RecommendationReport, RecommendationRecord,
    build_preferences, load_preferences, read_records,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Preferences, Similarity, Pearson,
        Recommender, RecommenderConfig, Recommendation,
        Error, Result,
        LoadOptions, RecommendationReport,
        load_preferences,
    };
}
