// crates/taro-app/src/pages/menu.rs
// Reading type menu

use super::PageContext;
use crate::api::{fetch_types_taro, inject_html};
use crate::telegram::{WebApp, install_choice_handler};

pub const MENU_CONTAINER_ID: &str = "types_taro";

pub async fn load_menu(ctx: &PageContext) {
    // Cards call the handler from onclick, so it must exist before they render
    match WebApp::from_window(&ctx.window) {
        Some(web_app) => {
            if let Err(e) = install_choice_handler(&ctx.window, web_app) {
                log::error!("Failed to install choice handler: {}", e);
            }
        }
        None => log::warn!("Telegram.WebApp not available, choices will not reach the bot"),
    }

    match fetch_types_taro(&ctx.config).await {
        Ok(html) => {
            if inject_html(&ctx.document, MENU_CONTAINER_ID, &html) {
                log::info!("Menu loaded");
            }
        }
        Err(e) => log::warn!("Failed to load menu: {}", e),
    }
}
