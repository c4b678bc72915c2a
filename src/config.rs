// File: src/config.rs
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::engine::DEFAULT_FUZZY_BUDGET;
use crate::errors::{BuildError, Result};

/// Where the engine finds its sources and how it serves requests.
///
/// Loadable from a JSON file; any omitted field keeps its default. The
/// corpus filter keeps only files whose name contains the given substring,
/// so dictionaries and corpus text can share a directory tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dictionary_dir: PathBuf,
    pub corpus_dir: PathBuf,
    pub corpus_filter: Option<String>,
    /// Work directory for the intermediate per-order phrase files. When
    /// unset, phrases are fed to the tries in memory.
    pub phrase_dir: Option<PathBuf>,
    /// Named-pipe pair for serving. When unset, stdin/stdout are used.
    pub request_pipe: Option<PathBuf>,
    pub response_pipe: Option<PathBuf>,
    pub fuzzy_budget: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary_dir: PathBuf::from("dictionary"),
            corpus_dir: PathBuf::from("corpus"),
            corpus_filter: Some("input".to_string()),
            phrase_dir: None,
            request_pipe: None,
            response_pipe: None,
            fuzzy_budget: DEFAULT_FUZZY_BUDGET,
        }
    }
}

impl EngineConfig {
    /// Reads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| BuildError::source_unavailable(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| BuildError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Convenience for the two-positional-argument invocation.
    pub fn with_dirs(dictionary_dir: impl Into<PathBuf>, corpus_dir: impl Into<PathBuf>) -> Self {
        Self {
            dictionary_dir: dictionary_dir.into(),
            corpus_dir: corpus_dir.into(),
            ..Self::default()
        }
    }
}
