use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Maps dataset names to CSV paths of measurement runs.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "19_M1_S25_9002": "data/19_M1_S25_9002.csv",
///   "20_Northing_avg": "data/20_Northing_avg.csv"
/// }
/// ```
pub struct DatasetConfig {
    entries: HashMap<String, String>,
}

impl DatasetConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset config '{path}'"))?;
        Self::from_json(&content)
    }

    /// Loads the config if `path` exists, otherwise returns an empty mapping.
    pub fn load_optional(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self {
                entries: HashMap::new(),
            })
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    /// Resolves a dataset name to its path; anything unknown is taken as a path.
    pub fn resolve<'a>(&'a self, source: &'a str) -> &'a str {
        self.entries
            .get(source)
            .map(String::as_str)
            .unwrap_or(source)
    }

    /// Iterates over all `(name, path)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
