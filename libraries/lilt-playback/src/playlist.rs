//! Fixed, non-empty track sequence
//!
//! Public indices are 1-based to match list row numbering; storage is 0-based.

use crate::error::{PlaybackError, Result};
use crate::types::Track;

/// Ordered, immutable collection of tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create a playlist
    ///
    /// Fails with [`PlaybackError::EmptyPlaylist`] when `tracks` is empty.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    /// Parse a JSON array of tracks
    pub fn from_json(json: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(json)?;
        Self::new(tracks)
    }

    /// Number of tracks (always >= 1)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether `index` is a valid 1-based position
    pub fn contains(&self, index: usize) -> bool {
        (1..=self.len()).contains(&index)
    }

    /// Track at a 1-based index
    pub fn get(&self, index: usize) -> Result<&Track> {
        if !self.contains(index) {
            return Err(PlaybackError::InvalidIndex {
                index,
                len: self.len(),
            });
        }
        Ok(&self.tracks[index - 1])
    }

    /// Track at an index already known to be valid
    pub(crate) fn at(&self, index: usize) -> &Track {
        &self.tracks[index - 1]
    }

    /// Index after `index`, wrapping from N to 1
    pub fn next_index(&self, index: usize) -> usize {
        if index >= self.len() {
            1
        } else {
            index + 1
        }
    }

    /// Index before `index`, wrapping from 1 to N
    pub fn previous_index(&self, index: usize) -> usize {
        if index <= 1 {
            self.len()
        } else {
            index - 1
        }
    }

    /// Tracks paired with their 1-based index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Track)> {
        self.tracks.iter().enumerate().map(|(i, track)| (i + 1, track))
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
