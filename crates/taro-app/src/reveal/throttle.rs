// crates/taro-app/src/reveal/throttle.rs
// Rate limiting for scroll-triggered re-evaluation

use serde::{Deserialize, Serialize};
use std::cell::Cell;

pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// How scroll events are collapsed into evaluations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollPolicy {
    /// At most one evaluation per animation frame
    #[default]
    AnimationFrame,
    /// One evaluation after scrolling has been quiet for `delay_ms`
    Debounce {
        #[serde(default = "default_debounce_ms")]
        delay_ms: u32,
    },
}

fn default_debounce_ms() -> u32 {
    DEFAULT_DEBOUNCE_MS
}

/// Coalesces bursts of events into a single pending evaluation.
///
/// `request` returns true only for the event that should schedule work;
/// everything until `complete` is folded into that pending run.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
    coalesced: Cell<u32>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> bool {
        if self.pending.replace(true) {
            self.coalesced.set(self.coalesced.get().saturating_add(1));
            false
        } else {
            true
        }
    }

    /// Clear the pending run; returns how many events were folded into it
    pub fn complete(&self) -> u32 {
        self.pending.set(false);
        self.coalesced.replace(0)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
