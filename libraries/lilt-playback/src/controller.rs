//! Playback controller - the single authority for what plays next
//!
//! Owns the playlist and playback state, issues commands to the media
//! transport and drives the view binding.

use crate::{
    assets::{AssetLayout, MediaAssets},
    error::{PlaybackError, Result},
    playlist::Playlist,
    time,
    transport::MediaTransport,
    types::{PlaybackConfig, PlaybackState, RepeatMode, StartPosition, Track},
    view::{NowPlaying, ViewBinding},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Central playback control
///
/// All state transitions happen in response to one of three stimuli:
/// - a user command (select, next, previous, play, pause, seek, mode)
/// - a transport progress tick ([`on_time_progress`](Self::on_time_progress))
/// - a transport end-of-track notice ([`on_track_ended`](Self::on_track_ended))
///
/// Manual `next`/`previous` are always linear. Only `on_track_ended` consults
/// the shuffle policy, so skipping stays predictable.
pub struct PlaybackController<T: MediaTransport, V: ViewBinding> {
    playlist: Playlist,
    state: PlaybackState,
    transport: T,
    view: V,
    rng: StdRng,
}

impl<T: MediaTransport, V: ViewBinding> PlaybackController<T, V> {
    /// Create a controller over a track sequence
    ///
    /// Fails with [`PlaybackError::EmptyPlaylist`] before touching the
    /// transport when `tracks` is empty.
    pub fn new(tracks: Vec<Track>, transport: T, view: V, config: PlaybackConfig) -> Result<Self> {
        let playlist = Playlist::new(tracks)?;
        Self::with_playlist(playlist, transport, view, config)
    }

    /// Create a controller over an existing playlist
    ///
    /// Loads the starting track into the transport and performs the first
    /// view refresh. Plays immediately only when `config.autoplay` is set.
    pub fn with_playlist(
        playlist: Playlist,
        transport: T,
        view: V,
        config: PlaybackConfig,
    ) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let current_index = match config.start {
            StartPosition::Random => rng.gen_range(1..=playlist.len()),
            StartPosition::Index(index) => {
                playlist.get(index)?;
                index
            }
        };

        info!(
            tracks = playlist.len(),
            start = current_index,
            mode = %config.initial_mode,
            "Playback controller ready"
        );

        let mut controller = Self {
            playlist,
            state: PlaybackState {
                current_index,
                mode: config.initial_mode,
                is_playing: false,
            },
            transport,
            view,
            rng,
        };

        controller.load_current();
        if config.autoplay {
            controller.start_playback();
        }
        controller.refresh();

        Ok(controller)
    }

    // ===== Navigation =====

    /// Select a track by 1-based index, load it and play it
    ///
    /// An index outside `1..=len` fails with [`PlaybackError::InvalidIndex`]
    /// and leaves state and transport untouched.
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        if !self.playlist.contains(index) {
            warn!(index, len = self.playlist.len(), "Rejected track selection");
            return Err(PlaybackError::InvalidIndex {
                index,
                len: self.playlist.len(),
            });
        }

        debug!(from = self.state.current_index, to = index, "Selecting track");
        self.jump_to(index);
        Ok(())
    }

    /// Skip to the following track, wrapping from N to 1
    pub fn next(&mut self) {
        let index = self.playlist.next_index(self.state.current_index);
        debug!(from = self.state.current_index, to = index, "Next track");
        self.jump_to(index);
    }

    /// Go back to the preceding track, wrapping from 1 to N
    pub fn previous(&mut self) {
        let index = self.playlist.previous_index(self.state.current_index);
        debug!(from = self.state.current_index, to = index, "Previous track");
        self.jump_to(index);
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// Re-issues `play` to the transport even when already playing.
    pub fn play(&mut self) {
        self.start_playback();
        self.view.render_play_state(true);
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.state.is_playing = false;
        self.transport.pause();
        self.view.render_play_state(false);
    }

    /// Pause when playing, play when paused
    pub fn toggle_playback(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    // ===== Seek =====

    /// Seek to a fraction of the track and continue playing
    ///
    /// The fraction is clamped to `[0, 1]`. Fails without seeking when the
    /// fraction is not finite or the transport has no usable duration yet.
    pub fn seek_to(&mut self, fraction: f64) -> Result<()> {
        let duration = self.transport.duration().unwrap_or(f64::NAN);
        let position = time::seek_position(fraction, duration).map_err(|e| {
            warn!(fraction, duration, "Rejected seek: {}", e);
            e
        })?;

        debug!(fraction, position, "Seeking");
        self.transport.seek(position);
        self.play();
        Ok(())
    }

    /// Seek from a click on a progress bar of `width` at `offset_x`
    pub fn seek_to_offset(&mut self, offset_x: f64, width: f64) -> Result<()> {
        let fraction = offset_x / width;
        if !width.is_finite() || width <= 0.0 {
            warn!(offset_x, width, "Rejected seek on zero-width progress bar");
            return Err(PlaybackError::InvalidSeekFraction(fraction));
        }
        self.seek_to(fraction)
    }

    // ===== Repeat Mode =====

    /// Set the repeat mode directly
    ///
    /// No transport side effect. The view gets one full refresh, which
    /// carries the new mode indicator.
    pub fn set_mode(&mut self, mode: RepeatMode) {
        debug!(from = %self.state.mode, to = %mode, "Repeat mode changed");
        self.state.mode = mode;
        self.refresh();
    }

    /// Advance RepeatAll -> RepeatOne -> Shuffle -> RepeatAll
    pub fn cycle_mode(&mut self) -> RepeatMode {
        let mode = self.state.mode.advance();
        self.set_mode(mode);
        mode
    }

    // ===== Transport Notifications =====

    /// Progress tick from the transport
    ///
    /// Renders the progress fraction and both formatted times. Before the
    /// transport knows the duration (NaN or zero) nothing is rendered and
    /// [`PlaybackError::InvalidDuration`] is returned.
    pub fn on_time_progress(&mut self, current: f64, duration: f64) -> Result<()> {
        let current_label = time::format_time(current)?;
        let total_label = time::format_time(duration)?;
        let fraction = time::progress_fraction(current, duration)
            .ok_or(PlaybackError::InvalidDuration(duration))?;

        self.view.render_progress(fraction);
        self.view.render_times(&current_label, &total_label);
        Ok(())
    }

    /// End-of-track notice from the transport
    ///
    /// - `RepeatAll`: same as [`next`](Self::next)
    /// - `RepeatOne`: rewind and replay the current track
    /// - `Shuffle`: play a random track other than the current one (a
    ///   single-track playlist replays its only track)
    pub fn on_track_ended(&mut self) {
        match self.state.mode {
            RepeatMode::RepeatAll => self.next(),
            RepeatMode::RepeatOne => self.replay_current(),
            RepeatMode::Shuffle => {
                let len = self.playlist.len();
                if len == 1 {
                    self.replay_current();
                    return;
                }

                // Offset in 1..len skips the current index and is uniform over the rest
                let offset = self.rng.gen_range(1..len);
                let index = (self.state.current_index - 1 + offset) % len + 1;
                debug!(from = self.state.current_index, to = index, "Shuffle pick");
                self.jump_to(index);
            }
        }
    }

    // ===== State Queries =====

    /// Snapshot of the current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// 1-based index of the selected track
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn mode(&self) -> RepeatMode {
        self.state.mode
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Currently selected track
    pub fn current_track(&self) -> &Track {
        self.playlist.at(self.state.current_index)
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Artwork and audio locations of the selected track
    pub fn assets(&self, layout: &AssetLayout) -> MediaAssets {
        layout.resolve(self.current_track())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable transport access for adapters that drive its clock
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tear down the controller, returning its collaborators
    pub fn into_parts(self) -> (T, V) {
        (self.transport, self.view)
    }

    // ===== Internal =====

    /// Load and play a validated index, then refresh once
    fn jump_to(&mut self, index: usize) {
        self.state.current_index = index;
        self.load_current();
        self.start_playback();
        self.refresh();
    }

    fn replay_current(&mut self) {
        debug!(index = self.state.current_index, "Replaying track");
        self.transport.seek(0.0);
        self.start_playback();
        self.refresh();
    }

    fn load_current(&mut self) {
        let track = self.playlist.at(self.state.current_index);
        self.transport.load(track);
    }

    fn start_playback(&mut self) {
        self.state.is_playing = true;
        self.transport.play();
    }

    fn refresh(&mut self) {
        let now_playing = NowPlaying {
            track: self.playlist.at(self.state.current_index),
            index: self.state.current_index,
            mode: self.state.mode,
            is_playing: self.state.is_playing,
        };
        self.view.refresh(&now_playing);
    }
}
