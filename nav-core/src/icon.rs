//! Menu Icon
//!
//! Inline recolouring of the hamburger icon asset.

use std::sync::OnceLock;

use maud::html;
use regex::Regex;

use crate::domain::{NavError, NavResult};

/// Bundled hamburger icon
pub const MENU_ICON_SVG: &str = include_str!("../../assets/menu.svg");

fn root_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<svg\b([^>]*?)(/?)>").expect("valid svg tag pattern"))
}

fn style_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)\s+style\s*=\s*("[^"]*"|'[^']*')"#).expect("valid style attribute pattern")
    })
}

/// Set `fill` on the root `<svg>` element.
///
/// Any existing `style` attribute on the root is replaced. Without a colour
/// the asset is returned unchanged.
pub fn recolor(svg: &str, color: Option<&str>) -> NavResult<String> {
    let tag = root_tag()
        .captures(svg)
        .ok_or_else(|| NavError::InvalidAsset("no <svg> root element".to_string()))?;

    let Some(color) = color else {
        return Ok(svg.to_string());
    };

    let whole = tag.get(0).map(|m| m.range()).unwrap_or(0..0);
    let attrs = style_attr().replace_all(&tag[1], "");
    let escaped = html! { (color) }.into_string();

    let mut out = String::with_capacity(svg.len() + escaped.len() + 16);
    out.push_str(&svg[..whole.start]);
    out.push_str(&format!("<svg style=\"fill: {}\"{}{}>", escaped, attrs, &tag[2]));
    out.push_str(&svg[whole.end..]);
    log::debug!("[ICON] Recoloured menu icon with {}", color);
    Ok(out)
}
