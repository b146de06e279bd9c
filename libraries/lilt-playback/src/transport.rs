//! Platform media transport trait
//!
//! Abstracts the element that actually decodes and outputs audio (an HTML
//! audio element, a desktop decoder, a simulated clock in tests).

use crate::types::Track;

/// Executes playback commands on a concrete media element
///
/// Commands are fire-and-forget: the controller never waits for a load to
/// complete. Issuing a new `load` while one is pending supersedes it, and
/// implementors are expected to discard the stale load.
///
/// Progress and end-of-track notifications flow the other way, through
/// [`crate::PlaybackController::on_time_progress`] and
/// [`crate::PlaybackController::on_track_ended`].
#[cfg_attr(test, mockall::automock)]
pub trait MediaTransport {
    /// Point the element at a track's audio and reset the playhead
    fn load(&mut self, track: &Track);

    /// Start or resume output
    fn play(&mut self);

    /// Pause output, keeping the playhead
    fn pause(&mut self);

    /// Move the playhead to `position` seconds from the start
    fn seek(&mut self, position: f64);

    /// Duration of the loaded track in seconds
    ///
    /// Returns `None` (or a non-finite value) until metadata is available.
    fn duration(&self) -> Option<f64>;
}

impl<T: MediaTransport + ?Sized> MediaTransport for Box<T> {
    fn load(&mut self, track: &Track) {
        (**self).load(track);
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek(&mut self, position: f64) {
        (**self).seek(position);
    }

    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }
}

/// Transport command, as recorded by [`RecordingTransport`]
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    Load(String),
    Play,
    Pause,
    Seek(f64),
}

/// Transport that records every command for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub calls: Vec<TransportCall>,
    pub duration: Option<f64>,
}

#[cfg(test)]
impl RecordingTransport {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            calls: Vec::new(),
            duration: Some(duration),
        }
    }
}

#[cfg(test)]
impl MediaTransport for RecordingTransport {
    fn load(&mut self, track: &Track) {
        self.calls.push(TransportCall::Load(track.media_ref.clone()));
    }

    fn play(&mut self) {
        self.calls.push(TransportCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(TransportCall::Pause);
    }

    fn seek(&mut self, position: f64) {
        self.calls.push(TransportCall::Seek(position));
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}
