// crates/taro-app/src/reveal/visibility.rs
// Visibility evaluation against the viewport trigger zone

use serde::{Deserialize, Serialize};

/// Vertical edges of an element relative to the viewport top, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ElementBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Which edges decide whether an element has entered the trigger zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityMode {
    /// Top edge has crossed `viewport_height - offset`
    #[default]
    TopEdge,
    /// Element overlaps the viewport shrunk by `offset` on both sides
    Overlap,
}

impl VisibilityMode {
    /// Whether an element with `bounds` is in view.
    ///
    /// `offset_px` is the pre-trigger margin: the element counts as in view
    /// slightly before it is fully on screen.
    pub fn is_in_view(self, bounds: ElementBounds, viewport_height: f64, offset_px: f64) -> bool {
        match self {
            VisibilityMode::TopEdge => bounds.top <= viewport_height - offset_px,
            VisibilityMode::Overlap => {
                bounds.top + offset_px < viewport_height && bounds.bottom - offset_px > 0.0
            }
        }
    }
}
