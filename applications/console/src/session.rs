//! Interactive session
//!
//! Reads commands line by line, feeds them to the controller and lets the
//! simulated clock run on `tick`.

use crate::commands::{self, ConsoleCommand, HELP};
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::transport::SimulatedTransport;
use crate::view::TerminalView;
use lilt_playback::{PlaybackController, Playlist};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub type ConsoleController<W> = PlaybackController<SimulatedTransport, TerminalView<W>>;

pub struct Session<W: Write> {
    controller: ConsoleController<W>,
}

impl<W: Write> Session<W> {
    /// Build the controller and print the initial screen
    pub fn new(config: &ConsoleConfig, playlist: Playlist, out: W) -> Result<Self> {
        config.validate()?;
        let view = TerminalView::new(out, &playlist).with_assets(config.assets.clone());
        let transport = SimulatedTransport::new(config.track_length_secs);
        let controller =
            PlaybackController::with_playlist(playlist, transport, view, config.player.clone())?;

        Ok(Self { controller })
    }

    pub fn controller(&self) -> &ConsoleController<W> {
        &self.controller
    }

    /// Run one command, returning `false` once the session should end
    pub fn execute(&mut self, command: ConsoleCommand) -> bool {
        match command {
            ConsoleCommand::Player(command) => {
                debug!(?command, "Player command");
                if let Err(e) = self.controller.dispatch(command) {
                    warn!(?command, error = %e, "Command rejected");
                    self.controller.view_mut().message(&format!("error: {}", e));
                }
            }
            ConsoleCommand::Tick(secs) => self.tick(secs),
            ConsoleCommand::List => self.controller.view_mut().render_rows(),
            ConsoleCommand::Help => self.controller.view_mut().message(HELP),
            ConsoleCommand::Quit => return false,
        }
        true
    }

    /// Let the clock run for `secs` seconds
    ///
    /// Steps at most one second at a time and never past the end of a track,
    /// so time left over after an end-of-track carries into the track that
    /// follows. Stops early once the transport is no longer playing.
    pub fn tick(&mut self, secs: u64) {
        let mut remaining = secs as f64;

        while remaining > 0.0 {
            let transport = self.controller.transport_mut();
            if !transport.is_playing() {
                debug!(remaining, "Clock stopped, dropping remaining time");
                break;
            }

            let step = remaining.min(1.0).min(transport.time_left());
            let events = transport.advance(step);
            remaining -= step;

            for event in events {
                if let Err(e) = self.controller.dispatch(event) {
                    warn!(?event, error = %e, "Transport event rejected");
                }
            }
        }
    }

    /// Process commands until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match commands::parse(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if !self.execute(command) {
                        info!("Quit requested");
                        break;
                    }
                }
                Err(e) => self.controller.view_mut().message(&e.to_string()),
            }
        }
        Ok(())
    }

    pub fn into_writer(self) -> W {
        let (_, view) = self.controller.into_parts();
        view.into_writer()
    }
}
