// File: src/errors.rs
use std::path::PathBuf;

/// Result type used throughout the build pipeline.
pub type Result<T, E = BuildError> = std::result::Result<T, E>;

/// Errors that can occur while building the language model.
///
/// Character-level anomalies (unsupported codepoints, overlong tokens) are
/// absorbed and counted in `BuildStats` instead of surfacing here; this type
/// covers file and resource failures only.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A configured dictionary, corpus or phrase file could not be opened or
    /// read. Identifies the path so a caller can degrade or report.
    #[error("cannot read build source '{path}'")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration file '{path}'")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The trie arena could not grow. Surfaced instead of aborting the
    /// process so a partially built model stays usable.
    #[error("out of memory while growing the trie arena")]
    OutOfMemory,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BuildError {
    pub(crate) fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
