//! Join rating and entity records into a [`Preferences`] mapping
//!
//! Ratings are keyed by the entity's display name, not its raw identifier.

use crate::records::{read_records, EntityRecord, RatingRecord};
use crate::{LoaderError, Result};
use ahash::AHashMap;
use simrec_core::Preferences;
use std::path::Path;
use tracing::{info, warn};

/// Options controlling how records are joined
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Drop ratings whose item has no entity record instead of failing
    pub skip_unknown_items: bool,
}

/// Build the preference mapping from in-memory records
///
/// An empty rating or entity set yields an empty mapping.
///
/// # Errors
/// [`LoaderError::UnknownItem`] for a rating with no matching entity record,
/// unless `options.skip_unknown_items` is set.
/// [`LoaderError::Core`] for a non-finite rating.
pub fn build_preferences(
    ratings: &[RatingRecord],
    entities: &[EntityRecord],
    options: &LoadOptions,
) -> Result<Preferences> {
    if ratings.is_empty() || entities.is_empty() {
        warn!(
            ratings = ratings.len(),
            entities = entities.len(),
            "rating or entity data is missing, nothing to load"
        );
        return Ok(Preferences::new());
    }

    let names: AHashMap<&str, &str> = entities
        .iter()
        .map(|e| (e.item_id.as_str(), e.name.as_str()))
        .collect();

    let mut prefs = Preferences::new();
    let mut skipped = 0usize;
    for record in ratings {
        let Some(&name) = names.get(record.item_id.as_str()) else {
            if options.skip_unknown_items {
                skipped += 1;
                continue;
            }
            return Err(LoaderError::UnknownItem {
                user: record.user_id.clone(),
                item: record.item_id.clone(),
            });
        };
        prefs.insert(record.user_id.as_str(), name, record.rating)?;
    }

    if skipped > 0 {
        warn!(skipped, "skipped ratings for items without an entity record");
    }
    info!(
        users = prefs.len(),
        ratings = prefs.rating_count(),
        "Loaded preferences for {} users",
        prefs.len()
    );
    Ok(prefs)
}

/// Read both record files and build the preference mapping
pub fn load_preferences(
    ratings_path: impl AsRef<Path>,
    entities_path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Preferences> {
    let ratings: Vec<RatingRecord> = read_records(ratings_path)?;
    let entities: Vec<EntityRecord> = read_records(entities_path)?;
    build_preferences(&ratings, &entities, options)
}
