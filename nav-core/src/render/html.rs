//! Public Markup
//!
//! Server-side `<nav>` markup for the block. Text and attribute values are
//! escaped by maud; the icon is trusted asset markup and goes in verbatim.

use maud::{html, Markup, PreEscaped};

use super::{project, MenuEntry, RenderMode};
use crate::config::NavConfig;
use crate::domain::BlockAttributes;
use crate::icon;

/// Render the block's public markup.
///
/// `icon_svg` is the raw icon asset; it is recoloured with the block's menu
/// colour before insertion. An asset that cannot be recoloured is dropped.
pub fn render_nav(attrs: &BlockAttributes, config: &NavConfig, icon_svg: Option<&str>) -> String {
    let entries = project(&attrs.links, config.render_mode);
    let icon = icon_svg.and_then(|svg| match icon::recolor(svg, attrs.menu_color()) {
        Ok(styled) => Some(styled),
        Err(e) => {
            log::warn!("[RENDER] Skipping menu icon: {}", e);
            None
        }
    });

    let markup = html! {
        nav class=(config.block_class) {
            @match config.render_mode {
                RenderMode::Grouped => {
                    button id="open-mobile-menu" {
                        @if let Some(svg) = &icon {
                            (PreEscaped(svg))
                        }
                    }
                    ul class="toplevel" {
                        @for entry in &entries {
                            (grouped_item(entry, config))
                        }
                        li {
                            button id="close-mobile-menu" { (config.close_label) }
                        }
                    }
                }
                RenderMode::Flat => {
                    ul {
                        @for entry in &entries {
                            (flat_item(entry, config))
                        }
                    }
                }
            }
        }
    };
    markup.into_string()
}

fn anchor(text: &str, href: &str, target: &str) -> Markup {
    html! {
        a href=(href) target=(target) { (text) }
    }
}

fn grouped_item(entry: &MenuEntry, config: &NavConfig) -> Markup {
    html! {
        @match entry {
            MenuEntry::Link { text, href, target } => {
                li class="nav-item" { (anchor(text, href, target)) }
            }
            MenuEntry::Label { text } => {
                li class="nav-item" { span { (text) } }
            }
            MenuEntry::Group { label, children } => {
                li class="nav-item" {
                    span { (label) }
                    ul class="submenu" {
                        @for child in children {
                            (grouped_item(child, config))
                        }
                    }
                }
            }
            MenuEntry::Placeholder => {
                li { (config.placeholder_text) }
            }
        }
    }
}

fn flat_item(entry: &MenuEntry, config: &NavConfig) -> Markup {
    html! {
        @match entry {
            MenuEntry::Link { text, href, target } => {
                li { (anchor(text, href, target)) }
            }
            MenuEntry::Label { text } | MenuEntry::Group { label: text, .. } => {
                li { span { (text) } }
            }
            MenuEntry::Placeholder => {
                li { (config.placeholder_text) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LinkRecord;

    fn grouped_attrs() -> BlockAttributes {
        BlockAttributes::new(vec![
            LinkRecord::link(0, "Home", "/"),
            LinkRecord::group(1, "About"),
            LinkRecord::child(2, "Team", "/team", 1),
        ])
    }

    #[test]
    fn test_grouped_markup() {
        let out = render_nav(&grouped_attrs(), &NavConfig::default(), None);
        assert!(out.starts_with(r#"<nav class="wp-block-wcrh-custom-nav"><button id="open-mobile-menu"></button>"#));
        assert!(out.contains(r#"<ul class="toplevel"><li class="nav-item"><a href="/" target="_self">Home</a></li>"#));
        assert!(out.contains(
            r#"<li class="nav-item"><span>About</span><ul class="submenu"><li class="nav-item"><a href="/team" target="_self">Team</a></li></ul></li>"#
        ));
        assert!(out.ends_with(r#"<li><button id="close-mobile-menu">Close Menu</button></li></ul></nav>"#));
        assert_eq!(out.matches("Team").count(), 1);
    }

    #[test]
    fn test_flat_markup() {
        let config = NavConfig {
            render_mode: RenderMode::Flat,
            ..NavConfig::default()
        };
        let attrs = BlockAttributes::new(vec![LinkRecord::link(0, "Home", "/")]);
        let out = render_nav(&attrs, &config, None);
        assert_eq!(
            out,
            r#"<nav class="wp-block-wcrh-custom-nav"><ul><li><a href="/" target="_self">Home</a></li></ul></nav>"#
        );
    }

    #[test]
    fn test_empty_list_placeholder() {
        let out = render_nav(&BlockAttributes::default(), &NavConfig::default(), None);
        assert!(out.contains("<li>Nothing to list</li>"));
    }

    #[test]
    fn test_text_and_urls_are_escaped() {
        let attrs = BlockAttributes::new(vec![LinkRecord::link(0, "<b>Tom & Jerry</b>", "/a?x=\"1\"")]);
        let out = render_nav(&attrs, &NavConfig::default(), None);
        assert!(out.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(out.contains(r#"href="/a?x=&quot;1&quot;""#));
    }

    #[test]
    fn test_icon_is_recoloured() {
        let mut attrs = grouped_attrs();
        attrs.menu_color = Some("#123456".to_string());
        let out = render_nav(&attrs, &NavConfig::default(), Some(r#"<svg viewBox="0 0 1 1"></svg>"#));
        assert!(out.contains(r#"<button id="open-mobile-menu"><svg style="fill: #123456" viewBox="0 0 1 1"></svg></button>"#));
    }

    #[test]
    fn test_broken_icon_is_dropped() {
        let out = render_nav(&grouped_attrs(), &NavConfig::default(), Some("not an svg"));
        assert!(out.contains(r#"<button id="open-mobile-menu"></button>"#));
    }
}
