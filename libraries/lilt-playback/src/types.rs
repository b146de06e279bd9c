//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single playable item
///
/// `media_ref` is an opaque key; the platform resolves it to an image and
/// an audio asset (see [`crate::AssetLayout`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Key used to locate the track's artwork and audio
    #[serde(alias = "src")]
    pub media_ref: String,

    /// Text shown in the track's list row while it is not playing
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "duration")]
    pub duration_label: Option<String>,
}

impl Track {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        media_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            media_ref: media_ref.into(),
            duration_label: None,
        }
    }

    pub fn with_duration_label(mut self, label: impl Into<String>) -> Self {
        self.duration_label = Some(label.into());
        self
    }
}

/// End-of-track policy
///
/// Cycles RepeatAll -> RepeatOne -> Shuffle -> RepeatAll. Only automatic
/// advancement at the end of a track honours `Shuffle`; manual skips are
/// always linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Loop the whole playlist in order
    #[default]
    #[serde(rename = "repeat", alias = "repeat_all")]
    RepeatAll,

    /// Loop the current track
    #[serde(rename = "repeat_one")]
    RepeatOne,

    /// Pick a different random track when one ends
    #[serde(rename = "shuffle")]
    Shuffle,
}

impl RepeatMode {
    /// All modes in cycle order
    pub const ALL: [RepeatMode; 3] = [
        RepeatMode::RepeatAll,
        RepeatMode::RepeatOne,
        RepeatMode::Shuffle,
    ];

    /// Next mode in the cycle
    pub fn advance(self) -> Self {
        match self {
            RepeatMode::RepeatAll => RepeatMode::RepeatOne,
            RepeatMode::RepeatOne => RepeatMode::Shuffle,
            RepeatMode::Shuffle => RepeatMode::RepeatAll,
        }
    }

    /// Icon name for the mode button
    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::RepeatAll => "repeat",
            RepeatMode::RepeatOne => "repeat_one",
            RepeatMode::Shuffle => "shuffle",
        }
    }

    /// Tooltip for the mode button
    pub fn title(self) -> &'static str {
        match self {
            RepeatMode::RepeatAll => "Playlist looped",
            RepeatMode::RepeatOne => "Song looped",
            RepeatMode::Shuffle => "Playback shuffled",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RepeatMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "repeat" | "repeatall" | "all" => Ok(RepeatMode::RepeatAll),
            "repeatone" | "one" => Ok(RepeatMode::RepeatOne),
            "shuffle" => Ok(RepeatMode::Shuffle),
            _ => Err(format!(
                "Invalid repeat mode '{}'. Use 'repeat', 'repeat_one', or 'shuffle'",
                s
            )),
        }
    }
}

/// Snapshot of the controller's state
///
/// `is_playing` mirrors the last command sent to the transport, not the
/// transport's actual output state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// 1-based index of the selected track
    pub current_index: usize,

    /// Active repeat/shuffle policy
    pub mode: RepeatMode,

    /// Whether play was the last transport command
    pub is_playing: bool,
}

/// Where playback starts when the controller is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPosition {
    /// Uniformly random track
    #[default]
    Random,

    /// Fixed 1-based index
    Index(usize),
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial repeat mode (default: RepeatAll)
    pub initial_mode: RepeatMode,

    /// Initial track (default: Random)
    pub start: StartPosition,

    /// Start playing immediately after construction (default: false)
    pub autoplay: bool,

    /// Seed for start position and shuffle picks (default: None = entropy)
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_mode: RepeatMode::RepeatAll,
            start: StartPosition::Random,
            autoplay: false,
            seed: None,
        }
    }
}
