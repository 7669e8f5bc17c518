// ============================================================================
// ELEMENT HELPERS - Acceso al DOM y lectura de formularios
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::forms::FormValues;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Vacía el contenido del elemento (los listeners de los hijos se liberan con ellos)
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Valor actual de un input o select (checkbox → "true"/"false")
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        if input.type_() == "checkbox" {
            return Some(input.checked().to_string());
        }
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}

/// Lee los controles `[name=...]` de un formulario
pub fn read_form_values(form: &Element, fields: &[&str]) -> FormValues {
    let mut values = FormValues::new();
    for field in fields {
        match form.query_selector(&format!("[name='{}']", field)) {
            Ok(Some(control)) => {
                if let Some(value) = control_value(&control) {
                    values.insert(field.to_string(), value);
                }
            }
            _ => log::warn!("⚠️ [FORM] Campo no encontrado: {}", field),
        }
    }
    values
}

/// `window.confirm`; sin ventana se toma como cancelado
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
