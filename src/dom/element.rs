// ============================================================================
// ELEMENT HELPERS
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Drops whatever `root` shows and puts `content` in its place.
pub fn replace_children(root: &Element, content: &Element) -> Result<(), JsValue> {
    root.set_inner_html("");
    append_child(root, content)
}
