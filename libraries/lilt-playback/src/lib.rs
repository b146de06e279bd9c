//! Lilt - Playback Control
//!
//! Playlist-driven playback state machine for Lilt.
//!
//! This crate provides:
//! - Fixed playlist with 1-based, wrap-around navigation
//! - Three-mode repeat policy (RepeatAll, RepeatOne, Shuffle)
//! - End-of-track transition logic
//! - Progress and `M:SS` time formatting
//! - Seek translation (fraction of track to playhead position)
//!
//! # Architecture
//!
//! `lilt-playback` performs no I/O of its own:
//! - No audio decoding or output
//! - No rendering
//! - No persistence
//!
//! The platform supplies a [`MediaTransport`] (load/play/pause/seek on a real
//! media element) and a [`ViewBinding`] (now-playing label, progress bar,
//! list rows). The [`PlaybackController`] owns all state and drives both.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use lilt_playback::{
//!     MediaTransport, PlaybackConfig, PlaybackController, RepeatMode, Track, ViewBinding,
//! };
//!
//! struct Silent;
//!
//! impl MediaTransport for Silent {
//!     fn load(&mut self, _track: &Track) {}
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position: f64) {}
//!     fn duration(&self) -> Option<f64> {
//!         Some(200.0)
//!     }
//! }
//!
//! struct Blank;
//!
//! impl ViewBinding for Blank {
//!     fn render_now_playing(&mut self, _track: &Track) {}
//!     fn render_progress(&mut self, _fraction: f64) {}
//!     fn render_times(&mut self, _current: &str, _total: &str) {}
//!     fn render_active_row(&mut self, _index: usize) {}
//!     fn render_mode_indicator(&mut self, _mode: RepeatMode) {}
//!     fn render_play_state(&mut self, _is_playing: bool) {}
//! }
//!
//! let tracks = vec![
//!     Track::new("Harley bike", "Allen Walker", "music-1"),
//!     Track::new("Faded", "Alan Walker", "music-2"),
//! ];
//!
//! let mut controller =
//!     PlaybackController::new(tracks, Silent, Blank, PlaybackConfig::default()).unwrap();
//!
//! controller.next();
//! assert!(controller.is_playing());
//!
//! controller.cycle_mode();
//! assert_eq!(controller.mode(), RepeatMode::RepeatOne);
//!
//! controller.on_track_ended(); // replays the same track
//! ```
//!
//! # Example: Time Formatting
//!
//! ```rust
//! use lilt_playback::format_time;
//!
//! assert_eq!(format_time(65.0).unwrap(), "1:05");
//! assert!(format_time(f64::NAN).is_err());
//! ```

mod assets;
mod controller;
mod error;
mod events;
mod playlist;
mod time;
mod transport;
pub mod types;
mod view;
#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use assets::{AssetLayout, MediaAssets};
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{ControllerEvent, PlayerCommand, TransportEvent};
pub use playlist::Playlist;
pub use time::{format_time, progress_fraction, seek_position};
pub use transport::MediaTransport;
pub use types::{PlaybackConfig, PlaybackState, RepeatMode, StartPosition, Track};
pub use view::{NowPlaying, ViewBinding};
