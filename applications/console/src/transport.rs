//! Simulated media transport
//!
//! Stands in for an audio element: no sound is produced, but a virtual
//! playhead moves when [`SimulatedTransport::advance`] is called, and the
//! transport reports progress and end-of-track the way a real one would.

use lilt_playback::{MediaTransport, Track, TransportEvent};
use tracing::{debug, trace};

/// Transport with a virtual clock
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    track_length: f64,
    loaded: Option<String>,
    position: f64,
    duration: Option<f64>,
    playing: bool,
}

impl SimulatedTransport {
    /// Every loaded track reports `track_length` seconds
    pub fn new(track_length: f64) -> Self {
        Self {
            track_length,
            loaded: None,
            position: 0.0,
            duration: None,
            playing: false,
        }
    }

    /// Media ref of the loaded track
    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    /// Playhead in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Seconds between the playhead and the end of the loaded track
    pub fn time_left(&self) -> f64 {
        self.duration
            .map_or(0.0, |duration| (duration - self.position).max(0.0))
    }

    /// Move the clock forward by `secs`
    ///
    /// Nothing happens while paused or before a track is loaded. Emits one
    /// `TimeProgress` per whole second crossed and `Ended` once the playhead
    /// reaches the duration, after which the transport stops. Time past the
    /// end of the track is not consumed; see [`time_left`](Self::time_left).
    pub fn advance(&mut self, secs: f64) -> Vec<TransportEvent> {
        let mut events = Vec::new();

        let Some(duration) = self.duration else {
            return events;
        };
        if !self.playing || !secs.is_finite() || secs < 0.0 {
            return events;
        }

        let target = (self.position + secs).min(duration);
        let mut tick = self.position.floor() + 1.0;
        while tick <= target {
            events.push(TransportEvent::TimeProgress {
                current: tick,
                duration,
            });
            tick += 1.0;
        }
        self.position = target;

        if self.position >= duration {
            debug!(media_ref = ?self.loaded, "Simulated track ended");
            self.playing = false;
            events.push(TransportEvent::Ended);
        }

        trace!(position = self.position, events = events.len(), "Clock advanced");
        events
    }
}

impl MediaTransport for SimulatedTransport {
    fn load(&mut self, track: &Track) {
        self.loaded = Some(track.media_ref.clone());
        self.position = 0.0;
        self.duration = Some(self.track_length);
        self.playing = false;
    }

    fn play(&mut self) {
        self.playing = self.loaded.is_some();
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, position: f64) {
        let limit = self.duration.unwrap_or(0.0);
        self.position = position.clamp(0.0, limit);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}
