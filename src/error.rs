// src/error.rs - Error types for TypeSpec editor support

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SupportError {
    /// The host never registered a compiled TypeSpec grammar. Fatal at
    /// activation time: the mode refuses to start rather than silently
    /// degrading to plain text.
    #[error("TypeSpec grammar unavailable: {0}")]
    GrammarUnavailable(String),
    #[error("incompatible tree-sitter grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("highlight query rejected by grammar: {0}")]
    Query(#[from] tree_sitter::QueryError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
