//! Front-End Mobile Menu
//!
//! Binds the hamburger open/close buttons of the rendered `<nav>` and plays
//! the class steps from `nav_core::mobile`.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use nav_core::mobile::{ClassOp, ClassStep, ClassTarget, MobileMenu, BODY_OPEN_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::NavConfig;

const OPEN_BUTTON: &str = "#open-mobile-menu";
const CLOSE_BUTTON: &str = "#close-mobile-menu";
const MENU_LIST: &str = "nav ul";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn apply(step: &ClassStep, body: &web_sys::HtmlElement, list: &web_sys::Element) {
    let classes = match step.target {
        ClassTarget::Body => body.class_list(),
        ClassTarget::List => list.class_list(),
    };
    let result = match step.op {
        ClassOp::Add => classes.add_1(step.class),
        ClassOp::Remove => classes.remove_1(step.class),
    };
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[MENU] class {} failed: {:?}", step.class, e).into());
    }
}

fn toggle(config: NavConfig) {
    let Some(doc) = document() else { return };
    let (Some(body), Ok(Some(list))) = (doc.body(), doc.query_selector(MENU_LIST)) else {
        web_sys::console::warn_1(&"[MENU] nav list not found".into());
        return;
    };

    let current = MobileMenu::from_body_open(body.class_list().contains(BODY_OPEN_CLASS));
    let (_, steps) = current.toggle(&config);

    spawn_local(async move {
        for step in &steps {
            if step.delay_ms > 0 {
                TimeoutFuture::new(step.delay_ms).await;
            }
            apply(step, &body, &list);
        }
    });
}

/// Attach click handlers to both menu buttons
pub fn bind_mobile_menu(config: NavConfig) {
    let Some(doc) = document() else { return };

    for selector in [OPEN_BUTTON, CLOSE_BUTTON] {
        let Ok(Some(button)) = doc.query_selector(selector) else {
            web_sys::console::warn_1(&format!("[MENU] {} not found", selector).into());
            continue;
        };
        let config = config.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || toggle(config.clone()));
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}
