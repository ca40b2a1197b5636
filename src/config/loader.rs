use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ScamscanConfig;
use super::validation::validate_config_result;
use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".scamscan.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a config file to a string
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ScamscanConfig, ConfigError> {
    let config = toml::from_str::<ScamscanConfig>(contents)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load and validate a specific config file. Unlike [`load_config`], a
/// missing or broken file is an error.
pub fn load_config_from_path(path: &Path) -> Result<ScamscanConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<ScamscanConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {} [{}]: {}. Using defaults.",
                config_path.display(),
                e.code(),
                e
            );
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory and its ancestors, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.scamscan.toml` above `start` and load it, falling
/// back to defaults when none is found or the nearest one is invalid.
pub fn load_config_from(start: PathBuf) -> ScamscanConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ScamscanConfig::default()
        })
}

pub fn load_config() -> ScamscanConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ScamscanConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_from_finds_parent_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nhigh = 20\nmedium = 10\n",
        )
        .unwrap();
        let nested = temp.path().join("inbox/today");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.thresholds.high, 20);
        assert_eq!(config.thresholds.medium, 10);
        assert_eq!(config.thresholds.low, 1);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nhigh = 1\nmedium = 5\n",
        )
        .unwrap();

        let config = load_config_from(temp.path().to_path_buf());
        assert_eq!(config, ScamscanConfig::default());
    }

    #[test]
    fn test_load_config_from_path_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from_path(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_and_validate_config("invalid toml [[ content").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
