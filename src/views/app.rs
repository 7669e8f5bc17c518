use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Page};
use crate::views::{
    render_catalogo_dialog, render_dashboard, render_login, render_navbar, render_trabajo_dialog,
    render_trabajos_page,
};

/// Árbol completo de la app: login o navbar + página + diálogo abierto
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if !state.auth.is_logged_in() {
        return render_login(state);
    }

    let layout = ElementBuilder::new("div")?.class("layout").build();
    append_child(&layout, &render_navbar(state)?)?;

    let page = match state.current_page() {
        Page::Dashboard => render_dashboard(state)?,
        Page::Trabajos => render_trabajos_page(state)?,
    };
    append_child(&layout, &page)?;

    let trabajo_dialog = state.trabajo_dialog.borrow().clone();
    if let Some(dialog) = trabajo_dialog {
        append_child(&layout, &render_trabajo_dialog(state, dialog.editing)?)?;
    }

    let catalogo_dialog = state.catalogo_dialog.borrow().clone();
    if let Some(dialog) = catalogo_dialog {
        append_child(&layout, &render_catalogo_dialog(state, dialog)?)?;
    }

    Ok(layout)
}
