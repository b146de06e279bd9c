//! Presentation binding trait
//!
//! The controller never touches a concrete UI. It drives a `ViewBinding`,
//! which may be a DOM adapter, a terminal printer or a test recorder.

use crate::types::{RepeatMode, Track};

/// Everything a full refresh communicates
///
/// Taken as a synchronous snapshot at refresh time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowPlaying<'a> {
    /// Selected track
    pub track: &'a Track,

    /// 1-based row marked "now playing"
    pub index: usize,

    pub mode: RepeatMode,
    pub is_playing: bool,
}

/// Renders controller state to a user-visible surface
pub trait ViewBinding {
    /// Show the selected track's name, artist and artwork
    fn render_now_playing(&mut self, track: &Track);

    /// Set the progress indicator to a fraction in `[0, 1]`
    fn render_progress(&mut self, fraction: f64);

    /// Show elapsed and total time, already formatted as `M:SS`
    fn render_times(&mut self, current: &str, total: &str);

    /// Mark the 1-based row as playing and unmark every other row
    fn render_active_row(&mut self, index: usize);

    /// Update the mode button's icon and tooltip
    fn render_mode_indicator(&mut self, mode: RepeatMode);

    /// Switch the play/pause control
    fn render_play_state(&mut self, is_playing: bool);

    /// Full refresh after navigation or a mode change
    ///
    /// The controller calls this exactly once per navigation or
    /// mode-changing operation.
    fn refresh(&mut self, now_playing: &NowPlaying<'_>) {
        self.render_now_playing(now_playing.track);
        self.render_active_row(now_playing.index);
        self.render_mode_indicator(now_playing.mode);
        self.render_play_state(now_playing.is_playing);
    }
}

impl<V: ViewBinding + ?Sized> ViewBinding for Box<V> {
    fn render_now_playing(&mut self, track: &Track) {
        (**self).render_now_playing(track);
    }

    fn render_progress(&mut self, fraction: f64) {
        (**self).render_progress(fraction);
    }

    fn render_times(&mut self, current: &str, total: &str) {
        (**self).render_times(current, total);
    }

    fn render_active_row(&mut self, index: usize) {
        (**self).render_active_row(index);
    }

    fn render_mode_indicator(&mut self, mode: RepeatMode) {
        (**self).render_mode_indicator(mode);
    }

    fn render_play_state(&mut self, is_playing: bool) {
        (**self).render_play_state(is_playing);
    }

    fn refresh(&mut self, now_playing: &NowPlaying<'_>) {
        (**self).refresh(now_playing);
    }
}

/// View that records what was rendered
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub refreshes: usize,
    pub now_playing: Option<String>,
    pub active_row: Option<usize>,
    pub mode: Option<RepeatMode>,
    pub is_playing: Option<bool>,
    pub progress: Vec<f64>,
    pub times: Vec<(String, String)>,
}

#[cfg(test)]
impl ViewBinding for RecordingView {
    fn render_now_playing(&mut self, track: &Track) {
        self.now_playing = Some(track.name.clone());
    }

    fn render_progress(&mut self, fraction: f64) {
        self.progress.push(fraction);
    }

    fn render_times(&mut self, current: &str, total: &str) {
        self.times.push((current.to_string(), total.to_string()));
    }

    fn render_active_row(&mut self, index: usize) {
        self.active_row = Some(index);
    }

    fn render_mode_indicator(&mut self, mode: RepeatMode) {
        self.mode = Some(mode);
    }

    fn render_play_state(&mut self, is_playing: bool) {
        self.is_playing = Some(is_playing);
    }

    fn refresh(&mut self, now_playing: &NowPlaying<'_>) {
        self.refreshes += 1;
        self.render_now_playing(now_playing.track);
        self.render_active_row(now_playing.index);
        self.render_mode_indicator(now_playing.mode);
        self.render_play_state(now_playing.is_playing);
    }
}
