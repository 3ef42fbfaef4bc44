// crates/taro-app/src/error.rs
// Error types for the web app

use taro_types::EnvelopeError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("JS error: {0}")]
    Js(String),

    #[error("HTTP error: {0}")]
    Http(#[from] gloo_net::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("API error: {0}")]
    Api(String),

    #[error("empty API response")]
    EmptyResponse,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("host capability unavailable: {0}")]
    Unavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(msg) => AppError::Js(msg),
            None => AppError::Js(format!("{:?}", value)),
        }
    }
}

impl From<EnvelopeError> for AppError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Server(msg) => AppError::Api(msg),
            EnvelopeError::Empty => AppError::EmptyResponse,
        }
    }
}
