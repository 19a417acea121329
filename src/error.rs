//! Fatal error kinds
//!
//! Both variants end the running game instance. Ordinary input (clicks
//! outside the hot-zone, pointer moves, collisions) never produces one.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PongError {
    /// The host could not provide a 2D drawing context
    CanvasUnsupported,
    /// A structurally guaranteed value was missing
    Invariant(&'static str),
}

impl fmt::Display for PongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PongError::CanvasUnsupported => write!(f, "canvas unsupported"),
            PongError::Invariant(what) => write!(f, "internal invariant violated: {}", what),
        }
    }
}

impl std::error::Error for PongError {}

#[cfg(target_arch = "wasm32")]
impl From<PongError> for wasm_bindgen::JsValue {
    fn from(err: PongError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
