//! WASM-compatible PlaybackController wrapper

use super::bindings::{JsTransport, JsView};
use crate::{PlaybackConfig, PlaybackController, PlaybackError, RepeatMode, Track};
use wasm_bindgen::prelude::*;

fn to_js_error(error: PlaybackError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// WASM-compatible playback controller
///
/// Event listeners on the page call these methods; the controller calls
/// back into the transport and view objects supplied at construction.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: PlaybackController<JsTransport, JsView>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player
    ///
    /// `tracks` is an array of `{ name, artist, src }`; `config` may be
    /// `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        tracks: JsValue,
        transport: JsValue,
        view: JsValue,
        config: JsValue,
    ) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let tracks: Vec<Track> = serde_wasm_bindgen::from_value(tracks)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse tracks: {}", e)))?;

        let config: PlaybackConfig = if config.is_undefined() || config.is_null() {
            PlaybackConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let inner = PlaybackController::new(
            tracks,
            JsTransport::new(transport),
            JsView::new(view),
            config,
        )
        .map_err(to_js_error)?;

        Ok(Self { inner })
    }

    // ===== Playback Control =====

    pub fn play(&mut self) {
        self.inner.play();
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    #[wasm_bindgen(js_name = togglePlayback)]
    pub fn toggle_playback(&mut self) {
        self.inner.toggle_playback();
    }

    pub fn next(&mut self) {
        self.inner.next();
    }

    pub fn previous(&mut self) {
        self.inner.previous();
    }

    /// Select a list row (1-based)
    #[wasm_bindgen(js_name = selectTrack)]
    pub fn select_track(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner.select_track(index).map_err(to_js_error)
    }

    // ===== Seeking =====

    /// Seek by fraction (0.0 - 1.0)
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&mut self, fraction: f64) -> Result<(), JsValue> {
        self.inner.seek_to(fraction).map_err(to_js_error)
    }

    /// Seek from a progress-bar click (`event.offsetX`, `clientWidth`)
    #[wasm_bindgen(js_name = seekToOffset)]
    pub fn seek_to_offset(&mut self, offset_x: f64, width: f64) -> Result<(), JsValue> {
        self.inner
            .seek_to_offset(offset_x, width)
            .map_err(to_js_error)
    }

    // ===== Repeat Mode =====

    /// Advance the mode and return its label
    #[wasm_bindgen(js_name = cycleMode)]
    pub fn cycle_mode(&mut self) -> String {
        self.inner.cycle_mode().label().to_string()
    }

    /// Set mode ("repeat" | "repeat_one" | "shuffle")
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: RepeatMode = mode.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.inner.set_mode(mode);
        Ok(())
    }

    // ===== Transport Notifications =====

    /// Forward a `timeupdate` event
    ///
    /// Returns false when nothing was rendered (duration not known yet).
    #[wasm_bindgen(js_name = onTimeProgress)]
    pub fn on_time_progress(&mut self, current: f64, duration: f64) -> bool {
        self.inner.on_time_progress(current, duration).is_ok()
    }

    /// Forward an `ended` event
    #[wasm_bindgen(js_name = onTrackEnded)]
    pub fn on_track_ended(&mut self) {
        self.inner.on_track_ended();
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    pub fn mode(&self) -> String {
        self.inner.mode().label().to_string()
    }

    #[wasm_bindgen(js_name = modeTitle)]
    pub fn mode_title(&self) -> String {
        self.inner.mode().title().to_string()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    #[wasm_bindgen(js_name = currentTrack)]
    pub fn current_track(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.current_track()).unwrap_or(JsValue::NULL)
    }
}
