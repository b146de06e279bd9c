//! JS-backed implementations of the transport and view traits
//!
//! Missing methods on the JS side are skipped. Exceptions thrown by
//! callbacks are swallowed.

use crate::{MediaTransport, RepeatMode, Track, ViewBinding};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn track_to_js(track: &Track) -> JsValue {
    serde_wasm_bindgen::to_value(track).unwrap_or(JsValue::NULL)
}

/// Transport backed by a JS object
///
/// Expected methods: `load(track)`, `play()`, `pause()`, `seek(seconds)`,
/// `duration() -> number`.
pub struct JsTransport {
    target: JsValue,
}

impl JsTransport {
    pub fn new(target: JsValue) -> Self {
        Self { target }
    }

    fn call0(&self, name: &str) -> Option<JsValue> {
        method(&self.target, name)?.call0(&self.target).ok()
    }

    fn call1(&self, name: &str, arg: &JsValue) {
        if let Some(f) = method(&self.target, name) {
            f.call1(&self.target, arg).ok();
        }
    }
}

impl MediaTransport for JsTransport {
    fn load(&mut self, track: &Track) {
        self.call1("load", &track_to_js(track));
    }

    fn play(&mut self) {
        self.call0("play");
    }

    fn pause(&mut self) {
        self.call0("pause");
    }

    fn seek(&mut self, position: f64) {
        self.call1("seek", &JsValue::from_f64(position));
    }

    fn duration(&self) -> Option<f64> {
        self.call0("duration")?.as_f64()
    }
}

/// View backed by a JS object
///
/// Expected methods: `renderNowPlaying(track)`, `renderProgress(fraction)`,
/// `renderTimes(current, total)`, `renderActiveRow(index)`,
/// `renderModeIndicator(label, title)`, `renderPlayState(isPlaying)`.
pub struct JsView {
    target: JsValue,
}

impl JsView {
    pub fn new(target: JsValue) -> Self {
        Self { target }
    }

    fn call1(&self, name: &str, arg: &JsValue) {
        if let Some(f) = method(&self.target, name) {
            f.call1(&self.target, arg).ok();
        }
    }

    fn call2(&self, name: &str, a: &JsValue, b: &JsValue) {
        if let Some(f) = method(&self.target, name) {
            f.call2(&self.target, a, b).ok();
        }
    }
}

impl ViewBinding for JsView {
    fn render_now_playing(&mut self, track: &Track) {
        self.call1("renderNowPlaying", &track_to_js(track));
    }

    fn render_progress(&mut self, fraction: f64) {
        self.call1("renderProgress", &JsValue::from_f64(fraction));
    }

    fn render_times(&mut self, current: &str, total: &str) {
        self.call2(
            "renderTimes",
            &JsValue::from_str(current),
            &JsValue::from_str(total),
        );
    }

    fn render_active_row(&mut self, index: usize) {
        self.call1("renderActiveRow", &JsValue::from_f64(index as f64));
    }

    fn render_mode_indicator(&mut self, mode: RepeatMode) {
        self.call2(
            "renderModeIndicator",
            &JsValue::from_str(mode.label()),
            &JsValue::from_str(mode.title()),
        );
    }

    fn render_play_state(&mut self, is_playing: bool) {
        self.call1("renderPlayState", &JsValue::from_bool(is_playing));
    }
}
