//! Domain error types

use thiserror::Error;

/// Errors raised around the waveform generators.
///
/// The generators themselves never fail; these cover input construction,
/// the plot session and the profile store.
#[derive(Error, Debug)]
pub enum LineCodeError {
    #[error("invalid hex digit '{ch}' at position {position}")]
    InvalidHexDigit { ch: char, position: usize },

    #[error("no message entered")]
    EmptyMessage,

    #[error("select {required} encoding schemes ({selected} selected)")]
    IncompleteSelection { selected: usize, required: usize },

    #[error("symbol rate must be positive and finite, got {0}")]
    InvalidSymbolRate(f64),

    #[error("amplitude must be positive and finite, got {0}")]
    InvalidAmplitude(f64),

    #[error("invalid profile name: {0}")]
    InvalidProfileName(String),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("profile error: {0}")]
    Profile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for line-code operations
pub type LineCodeResult<T> = Result<T, LineCodeError>;
