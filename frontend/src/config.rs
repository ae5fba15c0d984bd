use log::{warn, Level};
use serde::Deserialize;

use crate::controller::globe::GlobeConfig;
use crate::controller::preloader::Timings;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
    pub section_threshold: f64,
    pub anchor_offset: f64,
    pub globe_poll_ms: u32,
    pub lead_modal_delay_ms: u32,
    pub lead_modal_close_ms: u32,
    pub preloader: Timings,
    pub globe: GlobeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_threshold: 60.0,
            reveal_threshold: 0.12,
            reveal_root_margin: "0px 0px -40px 0px".to_string(),
            counter_threshold: 0.5,
            counter_duration_ms: 1800.0,
            section_threshold: 0.4,
            anchor_offset: crate::controller::anchors::ANCHOR_OFFSET,
            globe_poll_ms: 100,
            lead_modal_delay_ms: 900,
            lead_modal_close_ms: 2800,
            preloader: Timings::default(),
            globe: GlobeConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "nav_threshold": 40, "preloader": { "globe_fade_ms": 600 } }"#,
        )
        .unwrap();
        assert_eq!(config.nav_threshold, 40.0);
        assert_eq!(config.preloader.globe_fade_ms, 600);
        assert_eq!(config.preloader.thank_you_ms, 800);
        assert_eq!(config.counter_duration_ms, 1800.0);
        assert_eq!(config.globe, GlobeConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ nav_threshold: }").is_err());
    }

    #[test]
    fn test_markers_override() {
        let config = SiteConfig::from_json(
            r#"{ "globe": { "markers": [{ "location": [48.85, 2.35], "size": 0.1 }] } }"#,
        )
        .unwrap();
        assert_eq!(config.globe.markers.len(), 1);
        assert_eq!(config.globe.phi_step, 0.005);
    }
}
