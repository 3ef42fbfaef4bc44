// crates/taro-app/src/reveal/controller.rs
// Reveal state for the monitored group of elements

use super::visibility::{ElementBounds, VisibilityMode};

/// A node that can be measured and marked as revealed
pub trait RevealTarget {
    /// Current edges relative to the viewport top
    fn bounds(&self) -> ElementBounds;

    /// Apply the revealed marker class
    fn mark_revealed(&self, class: &str);
}

/// One monitored element and its one-way reveal flag
#[derive(Debug)]
pub struct ViewportElement<T> {
    target: T,
    revealed: bool,
}

impl<T> ViewportElement<T> {
    pub fn new(target: T) -> Self {
        Self { target, revealed: false }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Page-lifetime set of monitored elements.
///
/// Membership is fixed at construction; only the reveal flags and the
/// per-evaluation aggregate change afterwards.
#[derive(Debug)]
pub struct ElementGroup<T> {
    elements: Vec<ViewportElement<T>>,
    any_revealed_now: bool,
}

impl<T> ElementGroup<T> {
    pub fn new(targets: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: targets.into_iter().map(ViewportElement::new).collect(),
            any_revealed_now: false,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewportElement<T>> {
        self.elements.iter()
    }

    /// Whether any member was in view at the last evaluation
    pub fn any_revealed_now(&self) -> bool {
        self.any_revealed_now
    }

    pub fn revealed_count(&self) -> usize {
        self.elements.iter().filter(|e| e.revealed).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.elements.iter().all(|e| e.revealed)
    }
}

/// Applies visibility verdicts to a group
#[derive(Debug, Clone)]
pub struct RevealController {
    mode: VisibilityMode,
    revealed_class: String,
}

impl RevealController {
    pub fn new(mode: VisibilityMode, revealed_class: impl Into<String>) -> Self {
        Self {
            mode,
            revealed_class: revealed_class.into(),
        }
    }

    pub fn mode(&self) -> VisibilityMode {
        self.mode
    }

    /// Whether a single element is inside the trigger zone
    pub fn is_in_view<T: RevealTarget>(&self, target: &T, viewport_height: f64, offset_px: f64) -> bool {
        self.mode.is_in_view(target.bounds(), viewport_height, offset_px)
    }

    /// Re-evaluate every member and return whether any is in view right now.
    ///
    /// Newly in-view elements are flagged and marked once; flags are never cleared.
    pub fn reevaluate<T: RevealTarget>(
        &self,
        group: &mut ElementGroup<T>,
        viewport_height: f64,
        offset_px: f64,
    ) -> bool {
        let mut any_now = false;

        for element in group.elements.iter_mut() {
            let bounds = element.target.bounds();
            if !self.mode.is_in_view(bounds, viewport_height, offset_px) {
                continue;
            }
            any_now = true;

            if !element.revealed {
                element.revealed = true;
                element.target.mark_revealed(&self.revealed_class);
                log::debug!("Element revealed (top={})", bounds.top);
            }
        }

        group.any_revealed_now = any_now;
        any_now
    }
}
