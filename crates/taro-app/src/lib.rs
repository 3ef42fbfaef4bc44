// crates/taro-app/src/lib.rs
// Taro Telegram Web App - WASM frontend

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::DocumentReadyState;

pub mod api;
pub mod config;
pub mod error;
pub mod pages;
pub mod params;
pub mod reveal;
pub mod telegram;

// Re-export shared types
pub use taro_types::*;

pub use config::{AppConfig, RevealConfig};
pub use error::{AppError, Result};

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Taro web app starting...");

    let ctx = match pages::PageContext::from_globals() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return;
        }
    };

    // A classic <script> can start us while the body is still parsing
    if is_dom_ready(ctx.document.ready_state()) {
        spawn_local(pages::run(ctx));
        return;
    }

    let document = ctx.document.clone();
    let on_ready = Closure::once_into_js(move || spawn_local(pages::run(ctx)));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("Cannot wait for DOMContentLoaded: {:?}", e);
    }
}

fn is_dom_ready(state: DocumentReadyState) -> bool {
    !matches!(state, DocumentReadyState::Loading)
}
