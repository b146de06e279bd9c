//! Inbound events
//!
//! Adapters (DOM bindings, terminal loops) own the actual event wiring and
//! translate what they receive into these values. Every stimulus the
//! controller reacts to is one of:
//! - a user command
//! - a transport progress tick
//! - a transport end-of-track notice

use crate::{
    controller::PlaybackController, error::Result, transport::MediaTransport, types::RepeatMode,
    view::ViewBinding,
};
use serde::{Deserialize, Serialize};

/// Explicit user command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlayerCommand {
    /// Pick a list row (1-based)
    Select { index: usize },
    Play,
    Pause,
    TogglePlayback,
    Next,
    Previous,
    /// Seek to a fraction of the track
    SeekTo { fraction: f64 },
    CycleMode,
    SetMode { mode: RepeatMode },
}

/// Notification raised by the media transport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TransportEvent {
    /// Periodic playhead update, in seconds
    TimeProgress { current: f64, duration: f64 },

    /// The loaded track reached its end
    Ended,
}

/// Any stimulus the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControllerEvent {
    Command(PlayerCommand),
    Transport(TransportEvent),
}

impl From<PlayerCommand> for ControllerEvent {
    fn from(command: PlayerCommand) -> Self {
        ControllerEvent::Command(command)
    }
}

impl From<TransportEvent> for ControllerEvent {
    fn from(event: TransportEvent) -> Self {
        ControllerEvent::Transport(event)
    }
}

impl<T: MediaTransport, V: ViewBinding> PlaybackController<T, V> {
    /// Route an event to the matching operation
    ///
    /// Errors are isolated to the event that caused them; state is left
    /// unchanged and later events proceed normally.
    pub fn dispatch(&mut self, event: impl Into<ControllerEvent>) -> Result<()> {
        match event.into() {
            ControllerEvent::Command(command) => match command {
                PlayerCommand::Select { index } => self.select_track(index)?,
                PlayerCommand::Play => self.play(),
                PlayerCommand::Pause => self.pause(),
                PlayerCommand::TogglePlayback => self.toggle_playback(),
                PlayerCommand::Next => self.next(),
                PlayerCommand::Previous => self.previous(),
                PlayerCommand::SeekTo { fraction } => self.seek_to(fraction)?,
                PlayerCommand::CycleMode => {
                    self.cycle_mode();
                }
                PlayerCommand::SetMode { mode } => self.set_mode(mode),
            },
            ControllerEvent::Transport(event) => match event {
                TransportEvent::TimeProgress { current, duration } => {
                    self.on_time_progress(current, duration)?;
                }
                TransportEvent::Ended => self.on_track_ended(),
            },
        }
        Ok(())
    }
}
