// crates/taro-app/src/api.rs
// HTTP API functions for fetching page content from the Taro server

use taro_types::{ContentEnvelope, TYPES_TARO_PATH, taro_answer_path};
use web_sys::Document;

use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Menu of reading types as server-rendered HTML
pub async fn fetch_types_taro(config: &AppConfig) -> Result<String> {
    fetch_content(&api_url(&config.api_base, TYPES_TARO_PATH)).await
}

/// A stored reading as server-rendered HTML
pub async fn fetch_taro_answer(config: &AppConfig, id: &str) -> Result<String> {
    fetch_content(&api_url(&config.api_base, &taro_answer_path(id))).await
}

async fn fetch_content(url: &str) -> Result<String> {
    log::debug!("GET {}", url);

    let resp = gloo_net::http::Request::get(url).send().await?;
    if !resp.ok() {
        return Err(AppError::Status(resp.status()));
    }

    let envelope: ContentEnvelope = resp.json().await?;
    Ok(envelope.into_html()?)
}

/// Join the API origin and a route with exactly one slash between them
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Replace a container's markup; returns false when the container is absent
pub fn inject_html(document: &Document, container_id: &str, html: &str) -> bool {
    match document.get_element_by_id(container_id) {
        Some(container) => {
            container.set_inner_html(html);
            true
        }
        None => {
            log::debug!("No #{} on page, content dropped", container_id);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_with_single_slash() {
        assert_eq!(
            api_url("https://hse-server.tw1.ru", "/api_taro/get_types_taro"),
            "https://hse-server.tw1.ru/api_taro/get_types_taro"
        );
        assert_eq!(
            api_url("https://hse-server.tw1.ru/", "/api_taro/get_types_taro"),
            "https://hse-server.tw1.ru/api_taro/get_types_taro"
        );
        assert_eq!(api_url("http://localhost:3100", "x"), "http://localhost:3100/x");
    }

    #[test]
    fn test_answer_url() {
        assert_eq!(
            api_url("http://localhost:3100", &taro_answer_path("17")),
            "http://localhost:3100/api_taro/get_taro_answer/17"
        );
    }
}
