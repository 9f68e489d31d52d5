//! Purpose: Native browser DOM adapter plus JavaScript exports.
//! Exports: `ElementHandle` for `HtmlElement`, `EventHandle` for `Event`, `json_data_from_js`,
//! and camelCase `wasm_bindgen` functions mirroring the helper surface.
//! Role: Bridges `web-sys` handles into the host-neutral helpers.
//! Invariants: JS exceptions surface as `ErrorKind::Host` and cross back to JS as thrown strings.
//! Invariants: `fromJson` hands already-structured JS values back by identity.

use crate::core::class::{add_class, has_class, remove_class};
use crate::core::element::ElementHandle;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::event::{EventHandle, stop_propagation};
use crate::core::visibility::{hide_element, show_element};
use crate::json::{JsonData, from_json};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement};

fn host_error(op: &str, err: JsValue) -> Error {
    Error::new(ErrorKind::Host).with_message(format!("{op} failed: {err:?}"))
}

fn to_js_error(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl ElementHandle for HtmlElement {
    fn contains_class(&self, name: &str) -> Result<bool> {
        Ok(self.class_list().contains(name))
    }

    fn add_class_token(&self, name: &str) -> Result<()> {
        self.class_list()
            .add_1(name)
            .map_err(|err| host_error("classList.add", err))
    }

    fn remove_class_token(&self, name: &str) -> Result<()> {
        self.class_list()
            .remove_1(name)
            .map_err(|err| host_error("classList.remove", err))
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        Element::set_attribute(self, name, value).map_err(|err| host_error("setAttribute", err))
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        Element::remove_attribute(self, name).map_err(|err| host_error("removeAttribute", err))
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<()> {
        self.style()
            .set_property(name, value)
            .map_err(|err| host_error("style.setProperty", err))
    }

    fn clear_inline_style(&self) -> Result<()> {
        Element::remove_attribute(self, "style").map_err(|err| host_error("removeAttribute", err))
    }
}

impl EventHandle for Event {
    fn stop_propagation(&self) -> Result<()> {
        Event::stop_propagation(self);
        Ok(())
    }

    fn prevent_default(&self) -> Result<()> {
        Event::prevent_default(self);
        Ok(())
    }
}

/// Classify a JS value: `null`/`undefined` are absent, strings are text, the rest is structured.
pub fn json_data_from_js(input: &JsValue) -> JsonData<Value> {
    if input.is_null() || input.is_undefined() {
        return JsonData::Absent;
    }
    if let Some(text) = input.as_string() {
        return JsonData::Text(text);
    }
    match js_sys::JSON::stringify(input) {
        Ok(encoded) => JsonData::Text(String::from(encoded)),
        Err(_) => JsonData::Absent,
    }
}

#[wasm_bindgen(js_name = hideElement)]
pub fn hide_element_js(element: &HtmlElement) -> std::result::Result<(), JsValue> {
    hide_element(element).map_err(to_js_error)
}

#[wasm_bindgen(js_name = showElement)]
pub fn show_element_js(element: &HtmlElement) -> std::result::Result<(), JsValue> {
    show_element(element).map_err(to_js_error)
}

#[wasm_bindgen(js_name = hasClass)]
pub fn has_class_js(element: &HtmlElement, name: &str) -> std::result::Result<bool, JsValue> {
    has_class(element, name).map_err(to_js_error)
}

#[wasm_bindgen(js_name = addClass)]
pub fn add_class_js(element: &HtmlElement, name: &str) -> std::result::Result<(), JsValue> {
    add_class(element, name).map_err(to_js_error)
}

#[wasm_bindgen(js_name = removeClass)]
pub fn remove_class_js(element: &HtmlElement, name: &str) -> std::result::Result<(), JsValue> {
    remove_class(element, name).map_err(to_js_error)
}

#[wasm_bindgen(js_name = stopPropagation)]
pub fn stop_propagation_js(event: &Event) {
    stop_propagation(event);
}

#[wasm_bindgen(js_name = fromJson)]
pub fn from_json_js(input: JsValue) -> JsValue {
    let is_text = input.is_string();
    if !is_text && !input.is_null() && !input.is_undefined() {
        return input;
    }
    let normalized = from_json(json_data_from_js(&input));
    js_sys::JSON::parse(&normalized.to_string()).unwrap_or_else(|_| js_sys::Object::new().into())
}
