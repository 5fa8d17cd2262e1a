use std::path::{Path, PathBuf};

use crate::config::{ArchiveConfig, SourceFiles};
use crate::error::LoadError;

/// All well-known paths under a data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
    pub config_json: PathBuf,
    pub interventions_json: PathBuf,
    pub annotated_json: PathBuf,
    pub sessions_json: PathBuf,
    pub regidors_json: PathBuf,
    pub tags_json: PathBuf,
}

impl DataPaths {
    /// Default file layout under `root`. Pure computation, no I/O.
    pub fn discover(root: impl Into<PathBuf>) -> Self {
        Self::with_files(root, &SourceFiles::default())
    }

    pub fn with_files(root: impl Into<PathBuf>, files: &SourceFiles) -> Self {
        let root = root.into();
        Self {
            config_json: root.join("plens.json"),
            interventions_json: root.join(&files.interventions),
            annotated_json: root.join(&files.annotated),
            sessions_json: root.join(&files.sessions),
            regidors_json: root.join(&files.regidors),
            tags_json: root.join(&files.tags),
            root,
        }
    }

    /// Layout under `root`, honoring file-name overrides from `plens.json`.
    pub fn resolve(root: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let root = root.into();
        let config = ArchiveConfig::load(&root.join("plens.json"))?;
        Ok(Self::with_files(root, &config.files))
    }

    /// The five source files, in load order.
    pub fn sources(&self) -> [&Path; 5] {
        [
            &self.interventions_json,
            &self.annotated_json,
            &self.sessions_json,
            &self.regidors_json,
            &self.tags_json,
        ]
    }

    /// Source files that do not exist on disk.
    pub fn missing(&self) -> Vec<&Path> {
        self.sources().into_iter().filter(|p| !p.is_file()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_uses_default_names() {
        let p = DataPaths::discover("/srv/plens");
        assert_eq!(p.sessions_json, PathBuf::from("/srv/plens/plenaris.json"));
        assert_eq!(
            p.annotated_json,
            PathBuf::from("/srv/plens/intervencions_annotated.json")
        );
        assert_eq!(p.config_json, PathBuf::from("/srv/plens/plens.json"));
    }

    #[test]
    fn resolve_applies_config() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("plens.json"),
            r#"{"files":{"regidors":"members.json"}}"#,
        )
        .unwrap();
        let p = DataPaths::resolve(tmp.path()).unwrap();
        assert_eq!(p.regidors_json, tmp.path().join("members.json"));
        assert_eq!(p.tags_json, tmp.path().join("tags.json"));
    }

    #[test]
    fn missing_lists_absent_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("tags.json"), "[]").unwrap();
        let p = DataPaths::discover(tmp.path());
        let missing = p.missing();
        assert_eq!(missing.len(), 4);
        assert!(!missing.contains(&p.tags_json.as_path()));
    }
}
