//! Error types for the Othello engine
//!
//! The search itself never fails; these cover the places where outside
//! input enters the crate: board construction, the text protocol and
//! configuration files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Side length outside the supported range
    #[error("invalid board size {size} (must be {min}-{max})")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// The opening position needs a centre block
    #[error("board size {0} is odd, the opening position needs an even size")]
    OddSize(usize),

    /// Wrong number of cells for the requested size
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },
}

/// Errors raised while decoding the command-line text protocol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("board string has {found} cell digits, expected {expected}")]
    CellCount { expected: usize, found: usize },

    #[error("invalid side selector '{0}' (expected 0 for black or 1 for white)")]
    InvalidSide(String),

    #[error("invalid depth {0} (must be -1 or greater)")]
    InvalidDepth(i32),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Result type alias for protocol decoding
pub type ProtocolResult<T> = Result<T, ProtocolError>;
