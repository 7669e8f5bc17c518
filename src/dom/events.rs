// ============================================================================
// EVENT HANDLING
// ============================================================================
// Los listeners de elementos se sueltan con `forget()`: al reemplazar el
// contenido de #app el navegador libera los nodos y sus listeners.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::control_value;

fn listen<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", move |event: Event| {
        if let Ok(event) = event.dyn_into::<MouseEvent>() {
            handler(event);
        }
    })
}

/// Valor del control que disparó el evento
fn target_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| control_value(&el))
}

/// `input`: llamado en cada tecla con el valor actual del control
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "input", move |event: Event| {
        if let Some(value) = target_value(&event) {
            handler(value);
        }
    })
}

/// `change`: selects, fechas y checkboxes
pub fn on_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "change", move |event: Event| {
        if let Some(value) = target_value(&event) {
            handler(value);
        }
    })
}

/// `submit` sin recargar la página
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |event: Event| {
        event.prevent_default();
        handler();
    })
}
