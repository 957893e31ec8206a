//! Link Entity
//!
//! One navigation entry: a plain link, a submenu heading, or a link nested
//! under a submenu heading.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkTarget {
    /// Same tab
    #[default]
    SelfTab,
    /// New tab
    NewTab,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::SelfTab => "_self",
            LinkTarget::NewTab => "_blank",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "_blank" => LinkTarget::NewTab,
            _ => LinkTarget::SelfTab,
        }
    }

    /// Label shown in the editor's target radio
    pub fn label(&self) -> &'static str {
        match self {
            LinkTarget::SelfTab => "Same Tab",
            LinkTarget::NewTab => "New Tab",
        }
    }
}

impl From<String> for LinkTarget {
    fn from(s: String) -> Self {
        LinkTarget::from_str(&s)
    }
}

impl From<LinkTarget> for String {
    fn from(t: LinkTarget) -> Self {
        t.as_str().to_string()
    }
}

/// A navigation link or submenu parent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkRecord {
    /// Stable identifier, never reused within a list
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    /// Display label
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// Link target, ignored for groups
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target: LinkTarget,
    /// Submenu parent (heading with children, no url)
    #[serde(deserialize_with = "null_as_default")]
    pub group: bool,
    /// Nested under the record named by `parent_menu`
    #[serde(deserialize_with = "null_as_default")]
    pub is_child: bool,
    #[serde(
        serialize_with = "serialize_parent_menu",
        deserialize_with = "deserialize_parent_menu"
    )]
    pub parent_menu: Option<u32>,
}

impl LinkRecord {
    /// Create an empty top-level link
    pub fn new(id: u32, target: LinkTarget) -> Self {
        Self {
            id,
            target,
            ..Default::default()
        }
    }

    /// Create a top-level link with text and url
    pub fn link(id: u32, text: &str, url: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Create a submenu heading
    pub fn group(id: u32, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            group: true,
            ..Default::default()
        }
    }

    /// Create a link nested under `parent_id`
    pub fn child(id: u32, text: &str, url: &str, parent_id: u32) -> Self {
        Self {
            is_child: true,
            parent_menu: Some(parent_id),
            ..Self::link(id, text, url)
        }
    }

    pub fn is_top_level(&self) -> bool {
        !self.is_child
    }

    /// True when this record names itself as its parent
    pub fn is_self_parented(&self) -> bool {
        self.parent_menu == Some(self.id)
    }
}

/// A single field replacement, one variant per editable field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkField {
    Text(String),
    Url(String),
    Target(LinkTarget),
    Group(bool),
    IsChild(bool),
    ParentMenu(Option<u32>),
}

impl LinkField {
    /// Write this value into `record`, leaving every other field alone
    pub fn apply(self, record: &mut LinkRecord) {
        match self {
            LinkField::Text(v) => record.text = v,
            LinkField::Url(v) => record.url = v,
            LinkField::Target(v) => record.target = v,
            LinkField::Group(v) => record.group = v,
            LinkField::IsChild(v) => record.is_child = v,
            LinkField::ParentMenu(v) => record.parent_menu = v,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LinkField::Text(_) => "text",
            LinkField::Url(_) => "url",
            LinkField::Target(_) => "target",
            LinkField::Group(_) => "group",
            LinkField::IsChild(_) => "isChild",
            LinkField::ParentMenu(_) => "parentMenu",
        }
    }
}

/// Decode `null` the same as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The host stores "no parent" as an empty string and select widgets hand
// back ids as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawParentMenu {
    Id(u32),
    Text(String),
}

fn deserialize_parent_menu<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawParentMenu>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawParentMenu::Id(id)) => Some(id),
        Some(RawParentMenu::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

fn serialize_parent_menu<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(id) => serializer.serialize_u32(*id),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = LinkRecord::link(1, "Home", "/");
        assert_eq!(link.id, 1);
        assert_eq!(link.target, LinkTarget::SelfTab);
        assert!(link.is_top_level());
        assert_eq!(link.parent_menu, None);
    }

    #[test]
    fn test_child_creation() {
        let child = LinkRecord::child(2, "Team", "/team", 1);
        assert!(child.is_child);
        assert_eq!(child.parent_menu, Some(1));
        assert!(!child.is_self_parented());
    }

    #[test]
    fn test_target_strings() {
        assert_eq!(LinkTarget::NewTab.as_str(), "_blank");
        assert_eq!(LinkTarget::from_str("_blank"), LinkTarget::NewTab);
        assert_eq!(LinkTarget::from_str("_top"), LinkTarget::SelfTab);
    }

    #[test]
    fn test_parent_menu_from_host_values() {
        let empty: LinkRecord = serde_json::from_str(r#"{"id":1,"parentMenu":""}"#).unwrap();
        assert_eq!(empty.parent_menu, None);

        let text: LinkRecord = serde_json::from_str(r#"{"id":1,"parentMenu":"4"}"#).unwrap();
        assert_eq!(text.parent_menu, Some(4));

        let number: LinkRecord = serde_json::from_str(r#"{"id":1,"parentMenu":0}"#).unwrap();
        assert_eq!(number.parent_menu, Some(0));

        let null: LinkRecord = serde_json::from_str(r#"{"parentMenu":null}"#).unwrap();
        assert_eq!(null.parent_menu, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let link: LinkRecord = serde_json::from_str(r#"{"text":"About"}"#).unwrap();
        assert_eq!(link.text, "About");
        assert_eq!(link.url, "");
        assert_eq!(link.target, LinkTarget::SelfTab);
        assert!(!link.group);
        assert!(!link.is_child);
    }

    #[test]
    fn test_null_fields_default() {
        let link: LinkRecord = serde_json::from_str(
            r#"{"id":null,"text":null,"url":null,"target":null,"group":null,"isChild":null,"parentMenu":null}"#,
        )
        .unwrap();
        assert_eq!(link, LinkRecord::default());
    }

    #[test]
    fn test_serializes_host_shape() {
        let link = LinkRecord::new(3, LinkTarget::NewTab);
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["target"], "_blank");
        assert_eq!(json["isChild"], false);
        assert_eq!(json["parentMenu"], "");
    }

    #[test]
    fn test_field_apply_touches_one_field() {
        let mut link = LinkRecord::link(0, "Home", "/");
        LinkField::Url("/start".to_string()).apply(&mut link);
        assert_eq!(link.url, "/start");
        assert_eq!(link.text, "Home");
        assert_eq!(LinkField::IsChild(true).name(), "isChild");
    }
}
