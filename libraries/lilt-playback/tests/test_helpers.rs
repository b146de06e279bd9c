//! Test helpers for controller integration tests
//!
//! A transport and a view that record every call, so tests can assert on
//! exactly what the controller asked the platform to do.

#![allow(dead_code)]

use lilt_playback::{
    MediaTransport, NowPlaying, PlaybackConfig, PlaybackController, RepeatMode, StartPosition,
    Track, ViewBinding,
};

/// One transport command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(String),
    Play,
    Pause,
    Seek(f64),
}

/// Transport that records commands and reports a fixed duration
#[derive(Debug, Default)]
pub struct MockTransport {
    pub commands: Vec<Command>,
    pub duration: Option<f64>,
}

impl MockTransport {
    pub fn new(duration: f64) -> Self {
        Self {
            commands: Vec::new(),
            duration: Some(duration),
        }
    }

    /// Media refs of every load, in order
    pub fn loads(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Load(media_ref) => Some(media_ref.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl MediaTransport for MockTransport {
    fn load(&mut self, track: &Track) {
        self.commands.push(Command::Load(track.media_ref.clone()));
    }

    fn play(&mut self) {
        self.commands.push(Command::Play);
    }

    fn pause(&mut self) {
        self.commands.push(Command::Pause);
    }

    fn seek(&mut self, position: f64) {
        self.commands.push(Command::Seek(position));
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

/// One render instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    Refresh { index: usize, name: String },
    NowPlaying(String),
    Progress(f64),
    Times(String, String),
    ActiveRow(usize),
    Mode(RepeatMode),
    PlayState(bool),
}

/// View that records render instructions
#[derive(Debug, Default)]
pub struct MockView {
    pub renders: Vec<Render>,
}

impl MockView {
    pub fn refresh_count(&self) -> usize {
        self.renders
            .iter()
            .filter(|r| matches!(r, Render::Refresh { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.renders.clear();
    }
}

impl ViewBinding for MockView {
    fn render_now_playing(&mut self, track: &Track) {
        self.renders.push(Render::NowPlaying(track.name.clone()));
    }

    fn render_progress(&mut self, fraction: f64) {
        self.renders.push(Render::Progress(fraction));
    }

    fn render_times(&mut self, current: &str, total: &str) {
        self.renders
            .push(Render::Times(current.to_string(), total.to_string()));
    }

    fn render_active_row(&mut self, index: usize) {
        self.renders.push(Render::ActiveRow(index));
    }

    fn render_mode_indicator(&mut self, mode: RepeatMode) {
        self.renders.push(Render::Mode(mode));
    }

    fn render_play_state(&mut self, is_playing: bool) {
        self.renders.push(Render::PlayState(is_playing));
    }

    fn refresh(&mut self, now_playing: &NowPlaying<'_>) {
        self.renders.push(Render::Refresh {
            index: now_playing.index,
            name: now_playing.track.name.clone(),
        });
    }
}

pub type TestController = PlaybackController<MockTransport, MockView>;

/// Tracks named "Track 1".."Track n" with media refs "music-1".."music-n"
pub fn create_tracks(n: usize) -> Vec<Track> {
    (1..=n)
        .map(|i| Track::new(format!("Track {}", i), format!("Artist {}", i), format!("music-{}", i)))
        .collect()
}

/// Controller over `n` tracks starting at `start`, in `mode`
pub fn create_controller(n: usize, start: usize, mode: RepeatMode) -> TestController {
    let config = PlaybackConfig {
        initial_mode: mode,
        start: StartPosition::Index(start),
        autoplay: false,
        seed: Some(42),
    };
    PlaybackController::new(create_tracks(n), MockTransport::new(200.0), MockView::default(), config)
        .expect("Failed to create controller")
}
