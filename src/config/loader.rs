//! Rc-file resolution and loading.
//!
//! Search path (first existing file wins, no merging):
//! 1. `<dir>/.lankrc.js`
//! 2. `<dir>/.lankrc.json`
//! 3. `<dir>/../.lankrc.js`
//! 4. `<dir>/../.lankrc.json`
//!
//! Once a candidate exists the search stops; a failure loading it
//! propagates rather than falling through to later candidates.
//!
//! `.lankrc.js` (configuration as executable script) is no longer
//! loadable. The name still participates in the search so precedence is
//! unchanged, but an existing `.js` candidate fails with an explicit
//! error pointing the user at `.lankrc.json`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::normalize::{ModuleEntry, RawConfig, normalize};
use crate::constants::{RC_JSON_FILENAME, RC_SCRIPT_FILENAME};

/// Errors during rc-file resolution and loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no configuration data found in {dir} or its parent")]
    NotFound { dir: PathBuf },

    #[error("configuration in {path} must be an array")]
    NotAnArray { path: PathBuf },

    #[error("script configuration is not supported: {path} (convert it to .lankrc.json)")]
    ScriptConfig { path: PathBuf },

    #[error("could not determine working directory: {source}")]
    WorkingDir { source: std::io::Error },

    #[error("failed to read rc file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse rc file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Resolve and load the rc file nearest to `dir`.
///
/// Returns the canonical module list on success. The directory is an
/// explicit parameter so callers (and tests) never have to manipulate
/// the real process working directory.
pub async fn load_config(dir: &Path) -> Result<Vec<ModuleEntry>, ConfigError> {
    for path in candidates(dir) {
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return load_file(&path).await;
        }
    }

    Err(ConfigError::NotFound {
        dir: dir.to_path_buf(),
    })
}

/// Resolve and load the rc file relative to the current working directory.
pub async fn load_config_cwd() -> Result<Vec<ModuleEntry>, ConfigError> {
    let dir = std::env::current_dir().map_err(|e| ConfigError::WorkingDir { source: e })?;
    load_config(&dir).await
}

/// Candidate rc-file paths in priority order.
fn candidates(dir: &Path) -> Vec<PathBuf> {
    // The filesystem root has no parent; probe the same directory again.
    let parent = dir.parent().unwrap_or(dir);
    vec![
        dir.join(RC_SCRIPT_FILENAME),
        dir.join(RC_JSON_FILENAME),
        parent.join(RC_SCRIPT_FILENAME),
        parent.join(RC_JSON_FILENAME),
    ]
}

/// Load, parse, and validate a single rc file.
async fn load_file(path: &Path) -> Result<Vec<ModuleEntry>, ConfigError> {
    if path.extension().is_some_and(|ext| ext == "js") {
        return Err(ConfigError::ScriptConfig {
            path: path.to_path_buf(),
        });
    }

    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })?;

    let raw: RawConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;

    // The file-loading gate only admits arrays. Object shorthand stays a
    // normalizer-recognized shape for direct callers, but an rc file with
    // a top-level object is rejected here.
    if raw.is_map() {
        return Err(ConfigError::NotAnArray {
            path: path.to_path_buf(),
        });
    }

    Ok(normalize(Some(raw)))
}
