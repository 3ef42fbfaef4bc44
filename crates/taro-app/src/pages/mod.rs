// crates/taro-app/src/pages/mod.rs
// Page bootstrapping: detect which page is loaded and run it

mod answer;
mod menu;

pub use answer::{ANSWER_CONTAINER_ID, load_answer};
pub use menu::{MENU_CONTAINER_ID, load_menu};

use web_sys::{Document, Window};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::reveal;

/// Globals shared by every page
#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: AppConfig,
}

impl PageContext {
    pub fn from_globals() -> Result<Self> {
        let window = web_sys::window().ok_or(AppError::NoWindow)?;
        let document = window.document().ok_or(AppError::NoDocument)?;
        let config = AppConfig::load(&document);
        Ok(Self { window, document, config })
    }
}

/// Which page the module was loaded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Reading type menu (`#types_taro`)
    Menu,
    /// Stored reading (`#content`)
    Answer,
    /// Anything else; only the reveal engine runs
    Static,
}

impl Page {
    pub fn detect(document: &Document) -> Self {
        Self::from_presence(
            document.get_element_by_id(MENU_CONTAINER_ID).is_some(),
            document.get_element_by_id(ANSWER_CONTAINER_ID).is_some(),
        )
    }

    fn from_presence(has_menu: bool, has_answer: bool) -> Self {
        match (has_menu, has_answer) {
            (true, _) => Page::Menu,
            (false, true) => Page::Answer,
            (false, false) => Page::Static,
        }
    }
}

/// Load page content, then start the reveal engine on whatever is in the DOM.
///
/// Content arrives before the group is collected: the answer page's text
/// blocks and divider come from the server.
pub async fn run(ctx: PageContext) {
    let page = Page::detect(&ctx.document);
    log::debug!("Detected page: {:?}", page);

    match page {
        Page::Menu => load_menu(&ctx).await,
        Page::Answer => load_answer(&ctx).await,
        Page::Static => {}
    }

    if let Err(e) = reveal::install(&ctx.window, &ctx.document, &ctx.config.reveal) {
        log::warn!("Reveal engine not started: {}", e);
    }
}
