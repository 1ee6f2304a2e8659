//! Serialized recommendation output
//!
//! Layout: `{"recommendations": [{"sim_score": 4.5, "id": "Pizzeria"}, ...]}`

use crate::Result;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use serde::{Deserialize, Serialize};
use simrec_core::Recommendation;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub sim_score: f64,
    pub id: String,
}

/// The full ranked list, in rank order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<RecommendationRecord>,
}

impl RecommendationReport {
    pub fn from_rankings(rankings: &[Recommendation]) -> Self {
        Self {
            recommendations: rankings
                .iter()
                .map(|r| RecommendationRecord {
                    sim_score: r.score,
                    id: r.item.clone(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Write the report as pretty-printed JSON, replacing `path` atomically
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_vec_pretty(self)?;
        AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
            .write(|f| std::io::Write::write_all(f, &data))
            .map_err(std::io::Error::from)?;
        debug!(path = %path.display(), entries = self.len(), "wrote recommendation report");
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}
