/// Console configuration
use crate::error::{ConsoleError, Result};
use clap::Args;
use lilt_playback::{AssetLayout, PlaybackConfig, Playlist, RepeatMode, StartPosition};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "lilt.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// JSON playlist file
    #[serde(default = "default_playlist")]
    pub playlist: PathBuf,

    #[serde(default)]
    pub player: PlaybackConfig,

    #[serde(default)]
    pub assets: AssetLayout,

    /// Length the simulated transport reports for every track
    #[serde(default = "default_track_length_secs")]
    pub track_length_secs: f64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            playlist: default_playlist(),
            player: PlaybackConfig::default(),
            assets: AssetLayout::default(),
            track_length_secs: default_track_length_secs(),
        }
    }
}

/// Command-line overrides, applied after the file and the environment
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Playlist JSON file
    #[arg(short, long)]
    pub playlist: Option<PathBuf>,

    /// Initial mode: repeat, repeat_one or shuffle
    #[arg(short, long)]
    pub mode: Option<RepeatMode>,

    /// Seed for the start track and shuffle picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// 1-based start track (random when omitted)
    #[arg(long)]
    pub start: Option<usize>,

    /// Start playing right away
    #[arg(long)]
    pub autoplay: bool,

    /// Simulated track length in seconds
    #[arg(long = "track-length")]
    pub track_length: Option<f64>,
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `lilt.toml` is read when
    /// present. Environment variables use the `LILT_` prefix and `__` for
    /// nesting, e.g. `LILT_PLAYER__SEED=7`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with LILT_)
        settings = settings.add_source(
            config::Environment::with_prefix("LILT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ConsoleError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// Apply command-line overrides on top of the loaded settings
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(playlist) = &overrides.playlist {
            self.playlist = playlist.clone();
        }
        if let Some(mode) = overrides.mode {
            self.player.initial_mode = mode;
        }
        if let Some(seed) = overrides.seed {
            self.player.seed = Some(seed);
        }
        if let Some(start) = overrides.start {
            self.player.start = StartPosition::Index(start);
        }
        if overrides.autoplay {
            self.player.autoplay = true;
        }
        if let Some(length) = overrides.track_length {
            self.track_length_secs = length;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.track_length_secs.is_finite() || self.track_length_secs <= 0.0 {
            return Err(ConsoleError::Config(format!(
                "Track length must be a positive number of seconds, got {}",
                self.track_length_secs
            )));
        }

        if let StartPosition::Index(0) = self.player.start {
            return Err(ConsoleError::Config(
                "Start track is 1-based, 0 is not a track".to_string(),
            ));
        }

        Ok(())
    }

    /// Read and parse the configured playlist file
    pub fn load_playlist(&self) -> Result<Playlist> {
        let json = std::fs::read_to_string(&self.playlist).map_err(|e| {
            ConsoleError::Config(format!(
                "Cannot read playlist {}: {}",
                self.playlist.display(),
                e
            ))
        })?;
        Ok(Playlist::from_json(&json)?)
    }
}

// Default values
fn default_playlist() -> PathBuf {
    PathBuf::from("music-list.json")
}

fn default_track_length_secs() -> f64 {
    180.0
}
