//! Block Configuration
//!
//! Fixed strings, defaults and timings shared by the editor, the server
//! renderer and the front-end toggle. Hosts may override any field with a
//! partial JSON object.

use serde::{Deserialize, Serialize};

use crate::domain::{LinkTarget, NavResult};
use crate::render::RenderMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    /// Target given to newly added links
    pub default_target: LinkTarget,
    /// Which projection the public markup uses
    pub render_mode: RenderMode,
    pub placeholder_text: String,
    pub close_label: String,
    /// Wrapper class on the `<nav>` element
    pub block_class: String,
    /// Location of the hamburger icon asset
    pub icon_url: String,
    /// Delay before the open animation class is added
    pub open_delay_ms: u32,
    /// Delay between starting the close animation and hiding the list
    pub close_delay_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            default_target: LinkTarget::SelfTab,
            render_mode: RenderMode::Grouped,
            placeholder_text: "Nothing to list".to_string(),
            close_label: "Close Menu".to_string(),
            block_class: "wp-block-wcrh-custom-nav".to_string(),
            icon_url: "assets/menu.svg".to_string(),
            open_delay_ms: 10,
            close_delay_ms: 300,
        }
    }
}

impl NavConfig {
    pub fn from_json(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = NavConfig::from_json(r#"{"closeDelayMs": 450, "defaultTarget": "_blank"}"#).unwrap();
        assert_eq!(config.close_delay_ms, 450);
        assert_eq!(config.default_target, LinkTarget::NewTab);
        assert_eq!(config.open_delay_ms, 10);
        assert_eq!(config.render_mode, RenderMode::Grouped);
        assert_eq!(config.placeholder_text, "Nothing to list");
    }

    #[test]
    fn test_render_mode_names() {
        let config = NavConfig::from_json(r#"{"renderMode": "flat"}"#).unwrap();
        assert_eq!(config.render_mode, RenderMode::Flat);
    }
}
