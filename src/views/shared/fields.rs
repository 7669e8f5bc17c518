// ============================================================================
// FORM FIELDS - Inputs, selects y botones con su mensaje de error
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, text_element, ElementBuilder};

pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn same(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    /// Opciones cuyo valor y texto coinciden
    pub fn from_values<I, S>(values: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().map(|v| Self::same(v.as_ref())).collect()
    }
}

fn field_group(name: &str, label: &str, control: Element, error: Option<&str>) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class(if error.is_some() { "form-group has-error" } else { "form-group" })
        .build();
    let label_el = ElementBuilder::new("label")?
        .class("form-label")
        .attr("for", &format!("field-{}", name))?
        .text(label)
        .build();

    append_child(&group, &label_el)?;
    append_child(&group, &control)?;
    if let Some(message) = error {
        append_child(&group, &text_element("p", "form-error", message)?)?;
    }
    Ok(group)
}

/// `<input>` con etiqueta. `input_type`: text, email, password, date, number...
pub fn text_field(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    placeholder: &str,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(&format!("field-{}", name))?
        .attr("name", name)?
        .attr("type", input_type)?
        .attr("value", value)?
        .attr("placeholder", placeholder)?
        .build();
    field_group(name, label, input, error)
}

/// `<select>` con una primera opción vacía (`placeholder`)
pub fn select_field(
    name: &str,
    label: &str,
    placeholder: &str,
    options: &[SelectOption],
    selected: &str,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .class("form-select")
        .id(&format!("field-{}", name))?
        .attr("name", name)?
        .build();

    let empty = ElementBuilder::new("option")?
        .attr("value", "")?
        .text(placeholder)
        .flag("selected", selected.is_empty())?
        .build();
    append_child(&select, &empty)?;

    for option in options {
        let el = ElementBuilder::new("option")?
            .attr("value", &option.value)?
            .text(&option.label)
            .flag("selected", option.value == selected)?
            .build();
        append_child(&select, &el)?;
    }

    field_group(name, label, select, error)
}

/// Botón con variante (`primary`, `secondary`, `outline`, `danger`)
pub fn button(label: &str, variant: &str, button_type: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(&format!("btn btn-{}", variant))
        .attr("type", button_type)?
        .text(label)
        .build())
}
