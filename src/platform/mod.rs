//! Platform abstraction layer
//!
//! Host-independent pieces live here; the browser glue (canvas lifecycle,
//! pointer events, tick scheduling) lives in `web`.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Cancellation flag owned by one screen instance.
///
/// Clones share the flag. A scheduled tick checks it before doing anything,
/// so a callback that outlives its screen becomes a no-op.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
