//! Input record types and file readers
//!
//! Both JSON arrays and JSON Lines are accepted. A file whose first
//! non-whitespace character is `[` is read as an array.

use crate::{LoaderError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// One user's rating of one item
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingRecord {
    pub user_id: String,
    #[serde(alias = "restaurant_id", alias = "business_id")]
    pub item_id: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub rating: f64,
}

/// Display name for an item identifier
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityRecord {
    #[serde(alias = "business_id", alias = "restaurant_id")]
    pub item_id: String,
    pub name: String,
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid rating {s:?}: {e}"))),
    }
}

/// Read every record in `path`
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoaderError::NotFound(path.to_path_buf()),
        _ => LoaderError::Io(e),
    })?;
    parse_records(path, &contents)
}

fn parse_records<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<Vec<T>> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents).map_err(|e| LoaderError::Malformed {
            path: path.to_path_buf(),
            line: e.line(),
            message: e.to_string(),
        });
    }

    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| LoaderError::Malformed {
            path: path.to_path_buf(),
            line: idx + 1,
            message: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}
