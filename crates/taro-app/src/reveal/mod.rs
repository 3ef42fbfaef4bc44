// crates/taro-app/src/reveal/mod.rs
// Scroll-triggered reveal of text blocks

mod controller;
mod divider;
mod dom;
mod throttle;
mod visibility;

pub use controller::{ElementGroup, RevealController, RevealTarget, ViewportElement};
pub use divider::{AnimationCoordinator, DividerElement, DividerState, sync_divider_animation};
pub use dom::{PageEngine, install, viewport_height};
pub use throttle::{DEFAULT_DEBOUNCE_MS, FrameGate, ScrollPolicy};
pub use visibility::{ElementBounds, VisibilityMode};

use crate::config::RevealConfig;

/// Group, controller and divider wired together for one page
pub struct RevealEngine<T, D> {
    group: ElementGroup<T>,
    controller: RevealController,
    coordinator: AnimationCoordinator<D>,
    offset_px: f64,
}

impl<T: RevealTarget, D: DividerElement> RevealEngine<T, D> {
    pub fn new(config: &RevealConfig, targets: Vec<T>, divider: Option<D>) -> Self {
        Self {
            group: ElementGroup::new(targets),
            controller: RevealController::new(config.visibility, config.revealed_class.clone()),
            coordinator: AnimationCoordinator::new(divider),
            offset_px: config.threshold_px,
        }
    }

    /// Evaluate the group and hand the result to the divider
    pub fn refresh(&mut self, viewport_height: f64) -> bool {
        let any_now = self
            .controller
            .reevaluate(&mut self.group, viewport_height, self.offset_px);
        self.coordinator.sync(any_now);
        any_now
    }

    pub fn group(&self) -> &ElementGroup<T> {
        &self.group
    }

    pub fn coordinator(&self) -> &AnimationCoordinator<D> {
        &self.coordinator
    }
}
