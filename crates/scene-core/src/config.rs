//! Page-level configuration.
//!
//! Every field has a default taken from `constants.rs`, so an empty JSON
//! object (or no override at all) reproduces the stock scene. The page can
//! override any subset through the mount element's `data-scene-config`
//! attribute.

use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Id of the element the renderer canvas is appended to.
    pub container_id: String,
    /// Relative URL of the vector-animation JSON.
    pub asset_path: String,
    /// CSS selector of the page section that drives the scroll timeline.
    pub trigger_selector: String,
    /// Scroll timeline capability. `None` disables scroll binding entirely.
    pub scroll: Option<ScrollConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            asset_path: ASSET_PATH.to_string(),
            trigger_selector: TRIGGER_SELECTOR.to_string(),
            scroll: Some(ScrollConfig::default()),
        }
    }
}

impl SceneConfig {
    /// Parse an override document. Missing keys keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Seconds the timeline playhead takes to catch up with the scrollbar.
    pub scrub_seconds: f32,
    /// Uniform mesh scale reached at the end of the section.
    pub scale_to: f32,
    /// Camera depth reached at the end of the section.
    pub camera_z_to: f32,
    /// Container blur radius (CSS px) reached at the end of the section.
    pub blur_px: f32,
    /// Timeline duration of the closing fade, overlapping the end.
    pub fade_duration: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrub_seconds: SCRUB_SECONDS,
            scale_to: SCROLL_SCALE_TO,
            camera_z_to: SCROLL_CAMERA_Z_TO,
            blur_px: SCROLL_BLUR_PX,
            fade_duration: SCROLL_FADE_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_keeps_defaults() {
        let cfg = SceneConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn null_scroll_disables_binding() {
        let cfg = SceneConfig::from_json(r#"{ "scroll": null }"#).unwrap();
        assert!(cfg.scroll.is_none());
        assert_eq!(cfg.container_id, CONTAINER_ID);
    }

    #[test]
    fn partial_scroll_override_fills_rest() {
        let cfg = SceneConfig::from_json(r#"{ "scroll": { "scrub_seconds": 0.5 } }"#).unwrap();
        let scroll = cfg.scroll.unwrap();
        assert_eq!(scroll.scrub_seconds, 0.5);
        assert_eq!(scroll.scale_to, SCROLL_SCALE_TO);
    }
}
