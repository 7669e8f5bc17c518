// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Atributo booleano (`disabled`, `required`, `selected`...) solo si `on`
    pub fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        if on {
            set_attribute(&self.element, name, "")?;
        }
        Ok(self)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Result<Self, JsValue> {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}

/// Atajo: elemento con clase y texto
pub fn text_element(tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new(tag)?.class(class).text(text).build())
}
