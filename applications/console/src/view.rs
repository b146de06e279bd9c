//! Terminal view
//!
//! Prints what a graphical player would draw: the now-playing header, a
//! progress bar with elapsed/total time, the playlist rows and the mode and
//! play/pause indicators.

use lilt_playback::{AssetLayout, Playlist, RepeatMode, Track, ViewBinding};
use std::fmt;
use std::io::Write;
use tracing::warn;

const BAR_WIDTH: usize = 20;

/// Label shown on the active playlist row
pub const PLAYING_LABEL: &str = "Playing";

/// Line-oriented view over any writer
pub struct TerminalView<W: Write> {
    out: W,
    rows: Vec<Track>,
    assets: Option<AssetLayout>,
    active: usize,
    progress: f64,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, playlist: &Playlist) -> Self {
        Self {
            out,
            rows: playlist.tracks().to_vec(),
            assets: None,
            active: 0,
            progress: 0.0,
        }
    }

    /// Also print artwork and audio locations in the now-playing header
    pub fn with_assets(mut self, layout: AssetLayout) -> Self {
        self.assets = Some(layout);
        self
    }

    /// Print every playlist row, marking the active one
    pub fn render_rows(&mut self) {
        let width = self
            .rows
            .iter()
            .map(|t| t.name.chars().count() + t.artist.chars().count())
            .max()
            .unwrap_or(0)
            + 3;

        let lines: Vec<String> = self
            .rows
            .iter()
            .zip(1..)
            .map(|(track, index)| {
                let active = index == self.active;
                let marker = if active { '>' } else { ' ' };
                let title = format!("{} - {}", track.name, track.artist);
                let status = if active {
                    PLAYING_LABEL
                } else {
                    track.duration_label.as_deref().unwrap_or_default()
                };
                let line = format!("{} {:>2}. {:<width$}  {}", marker, index, title, status);
                line.trim_end().to_string()
            })
            .collect();

        for line in lines {
            self.line(format_args!("{}", line));
        }
    }

    /// Free-form status or error line
    pub fn message(&mut self, text: &str) {
        self.line(format_args!("{}", text));
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

impl<W: Write> ViewBinding for TerminalView<W> {
    fn render_now_playing(&mut self, track: &Track) {
        self.progress = 0.0;
        self.line(format_args!("Now playing: {} - {}", track.name, track.artist));

        if let Some(layout) = &self.assets {
            let assets = layout.resolve(track);
            self.line(format_args!(
                "  artwork {}  audio {}",
                assets.image.display(),
                assets.audio.display()
            ));
        }
    }

    fn render_progress(&mut self, fraction: f64) {
        self.progress = fraction;
    }

    fn render_times(&mut self, current: &str, total: &str) {
        let bar = progress_bar(self.progress);
        self.line(format_args!("{} {} / {}", bar, current, total));
    }

    fn render_active_row(&mut self, index: usize) {
        self.active = index;
        self.render_rows();
    }

    fn render_mode_indicator(&mut self, mode: RepeatMode) {
        self.line(format_args!("Mode: {} ({})", mode.title(), mode.label()));
    }

    fn render_play_state(&mut self, is_playing: bool) {
        let state = if is_playing { "playing" } else { "paused" };
        self.line(format_args!("State: {}", state));
    }
}
