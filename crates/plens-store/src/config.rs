use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// File names of the five source collections, relative to the data dir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub interventions: String,
    pub annotated: String,
    pub sessions: String,
    pub regidors: String,
    pub tags: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            interventions: "intervencions.json".to_string(),
            annotated: "intervencions_annotated.json".to_string(),
            sessions: "plenaris.json".to_string(),
            regidors: "regidors.json".to_string(),
            tags: "tags.json".to_string(),
        }
    }
}

/// Contents of `plens.json` in the data directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub files: SourceFiles,
}

impl ArchiveConfig {
    /// Read the config file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
