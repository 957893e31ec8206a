//! Custom Nav Frontend Entry Point
//!
//! Mounts the editor when the block editor host is present; otherwise wires
//! the public menu's mobile toggle.

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;
mod mobile;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }

    if commands::host_present() {
        mount_to_body(App);
        return;
    }

    let config = commands::load_config().unwrap_or_default();
    let bind = move || mobile::bind_mobile_menu(config.clone());
    match web_sys::window().and_then(|w| w.document()) {
        Some(doc) if doc.ready_state() == "loading" => {
            let on_ready = Closure::<dyn FnMut()>::new(bind);
            let _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
            on_ready.forget();
        }
        _ => bind(),
    }
}
