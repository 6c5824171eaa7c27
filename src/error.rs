use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A lexicon term could not be compiled into a match pattern. Pattern
    /// validity is a property of the supplied table data; one bad entry
    /// aborts the run it occurs in.
    #[error("term '{phrase}' is not a valid match pattern: {source}")]
    Pattern {
        phrase: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read mapping table {path}: {source}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mapping table {path}: {source}")]
    TableParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("mapping_dir '{0}' is not a valid directory")]
    MissingMappingDir(PathBuf),
}
