//! WASM bindings for lilt-playback
//!
//! Lets a web page keep owning its DOM and `<audio>` element while the
//! playback state machine runs in Rust. The page hands in two plain JS
//! objects: one implementing the transport methods and one implementing the
//! render methods.

pub mod bindings;

pub mod player;

pub use bindings::{JsTransport, JsView};

pub use player::WasmPlayer;
