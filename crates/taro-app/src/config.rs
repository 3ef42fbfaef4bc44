// crates/taro-app/src/config.rs
// Page configuration from an inline JSON block, with defaults

use serde::Deserialize;

use crate::reveal::{ScrollPolicy, VisibilityMode};

pub const DEFAULT_API_BASE: &str = "https://hse-server.tw1.ru";
pub const DEFAULT_THRESHOLD_PX: f64 = 150.0;
pub const DEFAULT_GROUP_SELECTOR: &str = ".text-background";
pub const DEFAULT_DIVIDER_SELECTOR: &str = ".divider";
pub const DEFAULT_REVEALED_CLASS: &str = "fade-in";

/// Id of the optional `<script type="application/json">` holding overrides
pub const CONFIG_ELEMENT_ID: &str = "taro-config";

/// Top-level config structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the content API, without trailing path
    pub api_base: String,
    pub reveal: RevealConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Reveal engine settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    /// Pre-trigger margin in CSS pixels
    pub threshold_px: f64,
    /// Elements monitored for reveal, queried once
    pub group_selector: String,
    /// Decorative divider; `null` disables the animation toggle
    pub divider_selector: Option<String>,
    /// Class added to an element when it is revealed
    pub revealed_class: String,
    pub visibility: VisibilityMode,
    pub scroll: ScrollPolicy,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_THRESHOLD_PX,
            group_selector: DEFAULT_GROUP_SELECTOR.to_string(),
            divider_selector: Some(DEFAULT_DIVIDER_SELECTOR.to_string()),
            revealed_class: DEFAULT_REVEALED_CLASS.to_string(),
            visibility: VisibilityMode::default(),
            scroll: ScrollPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Parse overrides; unspecified fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.sanitize();
        Ok(config)
    }

    /// Load config from the page, falling back to defaults
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            log::debug!("No #{} block, using default config", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        let contents = element.text_content().unwrap_or_default();
        match Self::from_json(&contents) {
            Ok(config) => {
                log::debug!("Loaded config: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Failed to parse #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    fn sanitize(&mut self) {
        let threshold = self.reveal.threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            log::warn!("Invalid threshold_px {}, using {}", threshold, DEFAULT_THRESHOLD_PX);
            self.reveal.threshold_px = DEFAULT_THRESHOLD_PX;
        }

        if self.reveal.group_selector.trim().is_empty() {
            self.reveal.group_selector = DEFAULT_GROUP_SELECTOR.to_string();
        }

        // classList.add rejects empty tokens and tokens with whitespace
        let class = &self.reveal.revealed_class;
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            log::warn!("Invalid revealed_class {:?}, using {}", class, DEFAULT_REVEALED_CLASS);
            self.reveal.revealed_class = DEFAULT_REVEALED_CLASS.to_string();
        }

        if self
            .reveal
            .divider_selector
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            self.reveal.divider_selector = None;
        }

        let trimmed = self.api_base.trim_end_matches('/');
        if trimmed.len() != self.api_base.len() {
            self.api_base = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.reveal.threshold_px, 150.0);
        assert_eq!(config.reveal.group_selector, ".text-background");
        assert_eq!(config.reveal.divider_selector.as_deref(), Some(".divider"));
        assert_eq!(config.reveal.revealed_class, "fade-in");
        assert_eq!(config.reveal.visibility, VisibilityMode::TopEdge);
        assert_eq!(config.reveal.scroll, ScrollPolicy::AnimationFrame);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "api_base": "http://127.0.0.1:3100/",
            "reveal": { "threshold_px": 80, "visibility": "overlap" }
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:3100");
        assert_eq!(config.reveal.threshold_px, 80.0);
        assert_eq!(config.reveal.visibility, VisibilityMode::Overlap);
        assert_eq!(config.reveal.group_selector, DEFAULT_GROUP_SELECTOR);
    }

    #[test]
    fn test_negative_threshold_replaced() {
        let config = AppConfig::from_json(r#"{"reveal": {"threshold_px": -10}}"#).unwrap();
        assert_eq!(config.reveal.threshold_px, DEFAULT_THRESHOLD_PX);
    }

    #[test]
    fn test_divider_disabled() {
        let config = AppConfig::from_json(r#"{"reveal": {"divider_selector": null}}"#).unwrap();
        assert!(config.reveal.divider_selector.is_none());

        let config = AppConfig::from_json(r#"{"reveal": {"divider_selector": "  "}}"#).unwrap();
        assert!(config.reveal.divider_selector.is_none());
    }

    #[test]
    fn test_blank_group_selector_restored() {
        let config = AppConfig::from_json(r#"{"reveal": {"group_selector": ""}}"#).unwrap();
        assert_eq!(config.reveal.group_selector, DEFAULT_GROUP_SELECTOR);
    }

    #[test]
    fn test_unusable_revealed_class_restored() {
        for bad in ["", "   ", "fade in", "\tshown"] {
            let json = format!(r#"{{"reveal": {{"revealed_class": {:?}}}}}"#, bad);
            let config = AppConfig::from_json(&json).unwrap();
            assert_eq!(config.reveal.revealed_class, DEFAULT_REVEALED_CLASS, "kept {:?}", bad);
        }

        let config = AppConfig::from_json(r#"{"reveal": {"revealed_class": "shown"}}"#).unwrap();
        assert_eq!(config.reveal.revealed_class, "shown");
    }

    #[test]
    fn test_debounce_policy() {
        let json = r#"{"reveal": {"scroll": {"kind": "debounce", "delay_ms": 50}}}"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.reveal.scroll, ScrollPolicy::Debounce { delay_ms: 50 });
    }

    #[test]
    fn test_malformed_json() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }
}
