// crates/taro-types/src/lib.rs
// Shared types for the Taro web app (native + WASM compatible)
// No native-only dependencies allowed here

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════
// API ROUTES
// ═══════════════════════════════════════

/// Menu of reading types, rendered server-side as HTML cards
pub const TYPES_TARO_PATH: &str = "/api_taro/get_types_taro";

/// Prefix for a stored reading; the request id is appended
pub const TARO_ANSWER_PATH: &str = "/api_taro/get_taro_answer";

/// Path for a single reading by request id
pub fn taro_answer_path(id: &str) -> String {
    format!("{}/{}", TARO_ANSWER_PATH, id)
}

// ═══════════════════════════════════════
// API ENVELOPE
// ═══════════════════════════════════════

/// Response envelope shared by every content endpoint.
///
/// The server answers either `{"data": "<html>"}` or `{"error": ...}`.
/// `error` is kept as a raw JSON value: the server does not always send a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentEnvelope {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Outcome of unpacking a [`ContentEnvelope`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Server reported a failure
    Server(String),
    /// Neither `data` nor `error` present
    Empty,
}

impl ContentEnvelope {
    /// Take the HTML payload, preferring a reported error over data
    pub fn into_html(self) -> Result<String, EnvelopeError> {
        match self.error {
            Some(serde_json::Value::String(msg)) => return Err(EnvelopeError::Server(msg)),
            Some(serde_json::Value::Null) | None => {}
            Some(other) => return Err(EnvelopeError::Server(other.to_string())),
        }
        self.data.ok_or(EnvelopeError::Empty)
    }
}

// ═══════════════════════════════════════
// WEB APP DATA
// ═══════════════════════════════════════

/// Payload sent to the bot through `Telegram.WebApp.sendData`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WebAppData {
    /// User picked a reading type from the menu
    ChoiseTypeTaro { name: String },
}

impl WebAppData {
    pub fn choise_type_taro(name: impl Into<String>) -> Self {
        WebAppData::ChoiseTypeTaro { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Route tests
    // ============================================================================

    #[test]
    fn test_taro_answer_path() {
        assert_eq!(taro_answer_path("42"), "/api_taro/get_taro_answer/42");
    }

    // ============================================================================
    // ContentEnvelope tests
    // ============================================================================

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{"data": "<div class=\"card\"></div>"}"#;
        let env: ContentEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_html().unwrap(), "<div class=\"card\"></div>");
    }

    #[test]
    fn test_envelope_with_string_error() {
        let json = r#"{"error": "record not found"}"#;
        let env: ContentEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            env.into_html(),
            Err(EnvelopeError::Server("record not found".to_string()))
        );
    }

    #[test]
    fn test_envelope_with_object_error() {
        let json = r#"{"error": {}}"#;
        let env: ContentEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(env.into_html(), Err(EnvelopeError::Server(_))));
    }

    #[test]
    fn test_envelope_error_wins_over_data() {
        let json = r#"{"data": "<p></p>", "error": "partial"}"#;
        let env: ContentEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(env.into_html(), Err(EnvelopeError::Server(_))));
    }

    #[test]
    fn test_envelope_empty() {
        let env: ContentEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(env.into_html(), Err(EnvelopeError::Empty));
    }

    // ============================================================================
    // WebAppData tests
    // ============================================================================

    #[test]
    fn test_choise_type_taro_serialize() {
        let data = WebAppData::choise_type_taro("love");
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"type":"choise_type_taro","name":"love"}"#);
    }

    #[test]
    fn test_choise_type_taro_deserialize() {
        let json = r#"{"type": "choise_type_taro", "name": "career"}"#;
        let data: WebAppData = serde_json::from_str(json).unwrap();
        assert_eq!(data, WebAppData::choise_type_taro("career"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"type": "something_else", "name": "x"}"#;
        assert!(serde_json::from_str::<WebAppData>(json).is_err());
    }
}
