//! Host Bridge
//!
//! Bindings to the block editor host: attribute storage, palette colours,
//! block configuration, and the icon asset fetch.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use serde::Serialize;
use crate::models::{BlockAttributes, LinkRecord, NavConfig, PaletteColor};

/// Global object the host registers before loading this bundle
const HOST_OBJECT: &str = "wcrhCustomNav";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "wcrhCustomNav"], js_name = getAttributes)]
    fn get_attributes() -> JsValue;

    #[wasm_bindgen(js_namespace = ["window", "wcrhCustomNav"], js_name = setAttributes)]
    fn set_attributes(update: JsValue);

    #[wasm_bindgen(js_namespace = ["window", "wcrhCustomNav"], js_name = getPaletteColors)]
    fn get_palette_colors() -> JsValue;

    #[wasm_bindgen(js_namespace = ["window", "wcrhCustomNav"], js_name = getConfig)]
    fn get_config() -> JsValue;
}

// ========================
// Attribute Update Structs
// ========================

#[derive(Serialize)]
pub struct LinksUpdate<'a> {
    pub links: &'a [LinkRecord],
}

#[derive(Serialize)]
pub struct MenuColorUpdate<'a> {
    #[serde(rename = "menuColor")]
    pub menu_color: Option<&'a str>,
}

// ========================
// Attribute Commands
// ========================

/// True when running inside the block editor
pub fn host_present() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(HOST_OBJECT)).ok())
        .is_some_and(|host| host.is_object())
}

pub fn load_attributes() -> Result<BlockAttributes, String> {
    let value = get_attributes();
    if value.is_undefined() || value.is_null() {
        return Ok(BlockAttributes::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

pub fn save_links(links: &[LinkRecord]) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&LinksUpdate { links }).map_err(|e| e.to_string())?;
    set_attributes(js_args);
    Ok(())
}

pub fn save_menu_color(menu_color: Option<&str>) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&MenuColorUpdate { menu_color }).map_err(|e| e.to_string())?;
    set_attributes(js_args);
    Ok(())
}

// ========================
// Settings Commands
// ========================

pub fn load_palette() -> Result<Vec<PaletteColor>, String> {
    let value = get_palette_colors();
    if value.is_undefined() || value.is_null() {
        return Ok(Vec::new());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Block configuration from the host, or defaults outside the editor
pub fn load_config() -> Result<NavConfig, String> {
    if !host_present() {
        return Ok(NavConfig::default());
    }
    let value = get_config();
    if value.is_undefined() || value.is_null() {
        return Ok(NavConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

// ========================
// Asset Commands
// ========================

/// Fetch the raw icon markup
pub async fn fetch_icon(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch {} failed: {:?}", url, e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;
    if !response.ok() {
        return Err(format!("fetch {} returned HTTP {}", url, response.status()));
    }
    let body = response.text().map_err(|e| format!("{:?}", e))?;
    let text = JsFuture::from(body).await.map_err(|e| format!("{:?}", e))?;
    text.as_string().ok_or_else(|| "icon body is not text".to_string())
}
