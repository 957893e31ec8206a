//! Block Attributes
//!
//! The configuration object the host persists for one nav block.

use serde::{Deserialize, Serialize};
use super::entity::NavResult;
use super::link::{null_as_default, LinkRecord};

/// Persisted block configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockAttributes {
    /// Ordered link records; order is menu order
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<LinkRecord>,
    /// CSS colour or theme palette token for the mobile menu icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_color: Option<String>,
}

impl BlockAttributes {
    pub fn new(links: Vec<LinkRecord>) -> Self {
        Self {
            links,
            menu_color: None,
        }
    }

    pub fn from_json(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> NavResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Menu colour with blank values treated as unset
    pub fn menu_color(&self) -> Option<&str> {
        self.menu_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Class list for the editor's open-menu button
    pub fn fill_class(&self) -> String {
        match self.menu_color() {
            Some(color) => format!("svg-container fill-{}", color),
            None => "svg-container".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let attrs = BlockAttributes::from_json("{}").unwrap();
        assert!(attrs.links.is_empty());
        assert_eq!(attrs.menu_color(), None);
    }

    #[test]
    fn test_parse_host_payload() {
        let json = r##"{
            "links": [
                {"id":0,"text":"Home","url":"/","target":"_self","group":false,"isChild":false,"parentMenu":""},
                {"id":1,"text":"More","url":"","target":"_blank","group":true,"isChild":false,"parentMenu":""}
            ],
            "menuColor": "#ff0000"
        }"##;
        let attrs = BlockAttributes::from_json(json).unwrap();
        assert_eq!(attrs.links.len(), 2);
        assert!(attrs.links[1].group);
        assert_eq!(attrs.menu_color(), Some("#ff0000"));
    }

    #[test]
    fn test_blank_color_is_unset() {
        let mut attrs = BlockAttributes::default();
        attrs.menu_color = Some("  ".to_string());
        assert_eq!(attrs.menu_color(), None);
        assert_eq!(attrs.fill_class(), "svg-container");

        attrs.menu_color = Some("primary".to_string());
        assert_eq!(attrs.fill_class(), "svg-container fill-primary");
    }

    #[test]
    fn test_null_values_read_as_missing() {
        let attrs = BlockAttributes::from_json(
            r#"{"links":[{"id":0,"text":"Home","url":null,"target":null}],"menuColor":null}"#,
        )
        .unwrap();
        assert_eq!(attrs.links.len(), 1);
        assert_eq!(attrs.links[0].text, "Home");
        assert_eq!(attrs.links[0].url, "");
        assert_eq!(attrs.links[0].target, crate::domain::LinkTarget::SelfTab);
        assert_eq!(attrs.menu_color(), None);

        let attrs = BlockAttributes::from_json(r#"{"links":null}"#).unwrap();
        assert!(attrs.links.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(BlockAttributes::from_json("{\"links\": 3}").is_err());
    }

    #[test]
    fn test_round_trip_keeps_order() {
        let attrs = BlockAttributes::new(vec![
            LinkRecord::link(0, "A", "/a"),
            LinkRecord::link(1, "B", "/b"),
        ]);
        let back = BlockAttributes::from_json(&attrs.to_json().unwrap()).unwrap();
        assert_eq!(back, attrs);
    }
}
