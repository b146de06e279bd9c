//! Media reference resolution
//!
//! A track's `media_ref` names both its artwork and its audio file. The
//! layout decides which directory and extension each one lives under.

use crate::types::Track;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory/extension layout for track assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetLayout {
    /// Artwork directory (default: "images")
    pub image_dir: PathBuf,

    /// Artwork extension (default: "png")
    pub image_ext: String,

    /// Audio directory (default: "songs")
    pub audio_dir: PathBuf,

    /// Audio extension (default: "mp3")
    pub audio_ext: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("images"),
            image_ext: "png".to_string(),
            audio_dir: PathBuf::from("songs"),
            audio_ext: "mp3".to_string(),
        }
    }
}

/// Resolved asset locations for one track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAssets {
    pub image: PathBuf,
    pub audio: PathBuf,
}

impl AssetLayout {
    pub fn resolve(&self, track: &Track) -> MediaAssets {
        MediaAssets {
            image: self
                .image_dir
                .join(format!("{}.{}", track.media_ref, self.image_ext)),
            audio: self
                .audio_dir
                .join(format!("{}.{}", track.media_ref, self.audio_ext)),
        }
    }
}
