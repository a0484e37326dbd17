use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "METRO_DATASET";

/// Default filename for the dataset inside the platform data directory.
const DATASET_FILENAME: &str = "network.json";

/// Where a resolved dataset path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Explicit,
    Environment,
    DataDir,
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "metro", "metro-planner")
        .ok_or(Error::DatasetDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve the dataset path: explicit argument, then `METRO_DATASET`, then
/// the platform data directory.
///
/// The returned path must exist; otherwise [`Error::DatasetNotFound`] is raised.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<(PathBuf, DatasetSource)> {
    let env_value = env::var_os(DATASET_ENV_VAR).filter(|value| !value.is_empty());
    let (path, source) = match (explicit, env_value) {
        (Some(path), _) => (path.to_path_buf(), DatasetSource::Explicit),
        (None, Some(value)) => (PathBuf::from(value), DatasetSource::Environment),
        (None, None) => (default_dataset_path()?, DatasetSource::DataDir),
    };

    if !path.is_file() {
        return Err(Error::DatasetNotFound { path });
    }

    debug!(path = %path.display(), ?source, "resolved dataset path");
    Ok((path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.json");
        fs::write(&file, "{}").unwrap();

        let (path, source) = resolve_dataset_path(Some(&file)).unwrap();
        assert_eq!(path, file);
        assert_eq!(source, DatasetSource::Explicit);
    }

    #[test]
    fn explicit_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("absent.json");
        let err = resolve_dataset_path(Some(&file)).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { path } if path == file));
    }

    #[test]
    fn explicit_directory_is_not_a_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_dataset_path(Some(dir.path())).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { .. }));
    }

    #[test]
    fn default_path_uses_dataset_filename() {
        if let Ok(path) = default_dataset_path() {
            assert!(path.ends_with(DATASET_FILENAME));
        }
    }
}
