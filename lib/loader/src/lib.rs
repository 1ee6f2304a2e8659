pub mod error;
pub mod records;
pub mod dataset;
pub mod report;

pub use error::{LoaderError, Result};
pub use records::{RatingRecord, EntityRecord, read_records};
pub use dataset::{LoadOptions, build_preferences, load_preferences};
pub use report::{RecommendationReport, RecommendationRecord};
