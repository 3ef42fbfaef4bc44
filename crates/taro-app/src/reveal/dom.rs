// crates/taro-app/src/reveal/dom.rs
// DOM bindings and scroll wiring for the reveal engine

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use super::{DividerElement, ElementBounds, FrameGate, RevealEngine, RevealTarget, ScrollPolicy};
use crate::config::RevealConfig;
use crate::error::Result;

pub type PageEngine = RevealEngine<Element, HtmlElement>;

impl RevealTarget for Element {
    fn bounds(&self) -> ElementBounds {
        let rect = self.get_bounding_client_rect();
        ElementBounds::new(rect.top(), rect.bottom())
    }

    fn mark_revealed(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("Failed to add class '{}': {:?}", class, e);
        }
    }
}

impl DividerElement for HtmlElement {
    fn set_animation_enabled(&self, enabled: bool) {
        let style = self.style();
        // Removing the inline override hands the animation back to the stylesheet
        let result = if enabled {
            style.remove_property("animation").map(|_| ())
        } else {
            style.set_property("animation", "none")
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle divider animation: {:?}", e);
        }
    }
}

/// Height of the layout viewport in CSS pixels
pub fn viewport_height(window: &Window) -> f64 {
    if let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) {
        return height;
    }
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.client_height() as f64)
        .unwrap_or(0.0)
}

fn collect_group(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn find_divider(document: &Document, selector: Option<&str>) -> Option<HtmlElement> {
    let selector = selector?;
    match document.query_selector(selector) {
        Ok(Some(el)) => el.dyn_into::<HtmlElement>().ok(),
        Ok(None) => None,
        Err(e) => {
            log::warn!("Bad divider selector '{}': {:?}", selector, e);
            None
        }
    }
}

/// Collect the group, run the first evaluation and listen for scrolling.
///
/// Returns `None` when nothing on the page matches the group selector.
pub fn install(
    window: &Window,
    document: &Document,
    config: &RevealConfig,
) -> Result<Option<Rc<RefCell<PageEngine>>>> {
    let targets = collect_group(document, &config.group_selector)?;
    if targets.is_empty() {
        log::debug!("Nothing matches '{}', reveal skipped", config.group_selector);
        return Ok(None);
    }

    let divider = find_divider(document, config.divider_selector.as_deref());
    if divider.is_none() {
        log::debug!("No divider on page, animation toggle skipped");
    }

    let engine = Rc::new(RefCell::new(RevealEngine::new(config, targets, divider)));
    log::info!(
        "Reveal engine monitoring {} elements (mode={:?}, offset={}px)",
        engine.borrow().group().len(),
        config.visibility,
        config.threshold_px
    );
    engine.borrow_mut().refresh(viewport_height(window));

    let on_scroll = scroll_handler(window.clone(), engine.clone(), config.scroll);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    Ok(Some(engine))
}

fn scroll_handler(
    window: Window,
    engine: Rc<RefCell<PageEngine>>,
    policy: ScrollPolicy,
) -> Closure<dyn FnMut(Event)> {
    match policy {
        ScrollPolicy::AnimationFrame => {
            let gate = Rc::new(FrameGate::new());
            // Holds the last scheduled frame; replaced only after it has run
            let frame_slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::default();
            Closure::wrap(Box::new(move |_: Event| {
                if !gate.request() {
                    return;
                }

                let frame_gate = gate.clone();
                let frame_engine = engine.clone();
                let frame_window = window.clone();
                let frame = Closure::once(move || {
                    let coalesced = frame_gate.complete();
                    log::trace!("Scroll frame ({} events coalesced)", coalesced);
                    frame_engine.borrow_mut().refresh(viewport_height(&frame_window));
                });

                match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                    Ok(_) => *frame_slot.borrow_mut() = Some(frame),
                    Err(e) => {
                        log::warn!("requestAnimationFrame failed, evaluating inline: {:?}", e);
                        drop(frame);
                        gate.complete();
                        engine.borrow_mut().refresh(viewport_height(&window));
                    }
                }
            }) as Box<dyn FnMut(_)>)
        }
        ScrollPolicy::Debounce { delay_ms } => {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
            Closure::wrap(Box::new(move |_: Event| {
                let timer_engine = engine.clone();
                let timer_window = window.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    timer_engine.borrow_mut().refresh(viewport_height(&timer_window));
                });
                // Dropping the previous Timeout cancels it
                *pending.borrow_mut() = Some(timeout);
            }) as Box<dyn FnMut(_)>)
        }
    }
}
