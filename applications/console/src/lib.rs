//! Lilt Console - terminal front-end for the playback controller
//!
//! Drives [`lilt_playback::PlaybackController`] from stdin with a simulated
//! transport, so playlists, repeat modes and shuffle can be exercised
//! without any audio hardware.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod transport;
pub mod view;

pub use config::{ConsoleConfig, Overrides};
pub use error::{ConsoleError, Result};
pub use session::Session;
pub use transport::SimulatedTransport;
pub use view::TerminalView;
