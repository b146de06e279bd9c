//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The track sequence handed to the controller was empty
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// A 1-based track index outside `1..=len`
    #[error("Invalid track index {index} (playlist has {len} tracks)")]
    InvalidIndex { index: usize, len: usize },

    /// Time value that cannot be formatted or used for seeking
    #[error("Invalid duration: {0}")]
    InvalidDuration(f64),

    /// Seek fraction that is not a finite number
    #[error("Invalid seek fraction: {0}")]
    InvalidSeekFraction(f64),

    /// Playlist JSON could not be parsed
    #[error("Failed to parse playlist: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
