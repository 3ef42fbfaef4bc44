// crates/taro-app/src/pages/answer.rs
// Stored reading page, selected by the `id` query parameter

use super::PageContext;
use crate::api::{fetch_taro_answer, inject_html};
use crate::params::PageParams;

pub const ANSWER_CONTAINER_ID: &str = "content";

pub async fn load_answer(ctx: &PageContext) {
    let params = match PageParams::from_window(&ctx.window) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Failed to read page parameters: {}", e);
            return;
        }
    };

    let Some(id) = params.id else {
        log::warn!("No 'id' parameter, nothing to load");
        return;
    };

    match fetch_taro_answer(&ctx.config, &id).await {
        Ok(html) => {
            if inject_html(&ctx.document, ANSWER_CONTAINER_ID, &html) {
                log::info!("Reading {} loaded", id);
            }
        }
        Err(e) => log::warn!("Failed to load reading {}: {}", id, e),
    }
}
