use crate::error::{GradebookError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "gradebook.json";
const DEFAULT_DATA_FILE: &str = "grades.csv";
const DEFAULT_LIST_LIMIT: usize = 20;
const DEFAULT_DELETE_LIST_LIMIT: usize = 50;

/// Configuration for the gradebook, stored in `gradebook.json`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GradebookConfig {
    /// CSV file holding the roster. Relative paths resolve against the
    /// directory the config was loaded from.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Rows shown by the `list` command
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Rows shown before prompting for an id to delete
    #[serde(default = "default_delete_list_limit")]
    pub delete_list_limit: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

fn default_delete_list_limit() -> usize {
    DEFAULT_DELETE_LIST_LIMIT
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            list_limit: DEFAULT_LIST_LIMIT,
            delete_list_limit: DEFAULT_DELETE_LIST_LIMIT,
        }
    }
}

impl GradebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GradebookError::Io)?;
        let config: GradebookConfig =
            serde_json::from_str(&content).map_err(GradebookError::Config)?;
        Ok(config)
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// The data file path, anchored at `base` when relative.
    pub fn data_path(&self, base: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            base.join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GradebookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("grades.csv"));
        assert_eq!(config.list_limit, 20);
        assert_eq!(config.delete_list_limit, 50);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = GradebookConfig::load(dir.path()).unwrap();
        assert_eq!(config, GradebookConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "term1.csv", "list_limit": 5, "delete_list_limit": 10}"#,
        )
        .unwrap();

        let loaded = GradebookConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            GradebookConfig {
                list_limit: 5,
                delete_list_limit: 10,
                ..GradebookConfig::default()
            }
            .with_data_file("term1.csv")
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"list_limit": 3}"#).unwrap();

        let loaded = GradebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.list_limit, 3);
        assert_eq!(loaded.data_file, PathBuf::from("grades.csv"));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = GradebookConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, GradebookError::Config(_)));
    }

    #[test]
    fn test_data_path_resolution() {
        let base = Path::new("/srv/class");
        let relative = GradebookConfig::default();
        assert_eq!(relative.data_path(base), PathBuf::from("/srv/class/grades.csv"));

        let absolute = GradebookConfig::default().with_data_file("/tmp/other.csv");
        assert_eq!(absolute.data_path(base), PathBuf::from("/tmp/other.csv"));
    }
}
