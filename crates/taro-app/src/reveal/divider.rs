// crates/taro-app/src/reveal/divider.rs
// Divider animation toggle driven by the group's in-view flag

/// Decorative element whose ambient animation can be paused
pub trait DividerElement {
    fn set_animation_enabled(&self, enabled: bool);
}

/// The divider and its current animation flag.
///
/// Starts enabled: the stylesheet animates the divider by default.
#[derive(Debug)]
pub struct DividerState<D> {
    element: D,
    animation_enabled: bool,
}

impl<D: DividerElement> DividerState<D> {
    pub fn new(element: D) -> Self {
        Self {
            element,
            animation_enabled: true,
        }
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn element(&self) -> &D {
        &self.element
    }
}

/// Pause the divider while something is in view, resume otherwise.
/// Writes to the element only when the flag changes.
pub fn sync_divider_animation<D: DividerElement>(divider: &mut DividerState<D>, any_revealed_now: bool) {
    let enabled = !any_revealed_now;
    if divider.animation_enabled == enabled {
        return;
    }
    divider.animation_enabled = enabled;
    divider.element.set_animation_enabled(enabled);
    log::debug!("Divider animation {}", if enabled { "resumed" } else { "paused" });
}

/// Owns the optional divider; pages without one get a no-op coordinator
#[derive(Debug)]
pub struct AnimationCoordinator<D> {
    divider: Option<DividerState<D>>,
}

impl<D: DividerElement> AnimationCoordinator<D> {
    pub fn new(divider: Option<D>) -> Self {
        Self {
            divider: divider.map(DividerState::new),
        }
    }

    pub fn has_divider(&self) -> bool {
        self.divider.is_some()
    }

    pub fn divider(&self) -> Option<&DividerState<D>> {
        self.divider.as_ref()
    }

    pub fn sync(&mut self, any_revealed_now: bool) {
        if let Some(divider) = self.divider.as_mut() {
            sync_divider_animation(divider, any_revealed_now);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every animation write
    #[derive(Clone, Default)]
    pub(crate) struct FakeDivider {
        writes: Rc<RefCell<Vec<bool>>>,
    }

    impl FakeDivider {
        pub(crate) fn writes(&self) -> Vec<bool> {
            self.writes.borrow().clone()
        }
    }

    impl DividerElement for FakeDivider {
        fn set_animation_enabled(&self, enabled: bool) {
            self.writes.borrow_mut().push(enabled);
        }
    }

    #[test]
    fn test_no_hysteresis() {
        let mut divider = DividerState::new(FakeDivider::default());

        sync_divider_animation(&mut divider, true);
        assert!(!divider.animation_enabled());
        sync_divider_animation(&mut divider, false);
        assert!(divider.animation_enabled());
        sync_divider_animation(&mut divider, true);
        assert!(!divider.animation_enabled());

        assert_eq!(divider.element().writes(), vec![false, true, false]);
    }

    #[test]
    fn test_repeated_input_does_not_write() {
        let fake = FakeDivider::default();
        let mut divider = DividerState::new(fake.clone());

        sync_divider_animation(&mut divider, true);
        sync_divider_animation(&mut divider, true);
        sync_divider_animation(&mut divider, true);
        assert_eq!(fake.writes(), vec![false]);
    }

    #[test]
    fn test_initial_false_is_noop() {
        let fake = FakeDivider::default();
        let mut divider = DividerState::new(fake.clone());

        sync_divider_animation(&mut divider, false);
        assert!(divider.animation_enabled());
        assert!(fake.writes().is_empty());
    }

    #[test]
    fn test_coordinator_without_divider() {
        let mut coordinator: AnimationCoordinator<FakeDivider> = AnimationCoordinator::new(None);
        assert!(!coordinator.has_divider());

        coordinator.sync(true);
        coordinator.sync(false);
        assert!(coordinator.divider().is_none());
    }

    #[test]
    fn test_coordinator_with_divider() {
        let fake = FakeDivider::default();
        let mut coordinator = AnimationCoordinator::new(Some(fake.clone()));

        coordinator.sync(true);
        assert_eq!(coordinator.divider().map(|d| d.animation_enabled()), Some(false));
        coordinator.sync(false);
        assert_eq!(fake.writes(), vec![false, true]);
    }
}
