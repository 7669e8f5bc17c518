use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, text_element, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::CatalogoKind;
use crate::views::shared::button;
use crate::views::trabajos::{filter_bar::render_filter_bar, table::render_table};

/// "Gestión de Trabajos": acciones, filtros y tabla
pub fn render_trabajos_page(state: &AppState) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("main")?.class("page trabajos").build();

    let header = ElementBuilder::new("div")?.class("page-header").build();
    append_child(&header, &text_element("h1", "page-title", "Gestión de Trabajos")?)?;

    let actions = ElementBuilder::new("div")?.class("page-actions").build();
    let nuevo = button("➕ Nuevo Trabajo", "primary", "button")?;
    {
        let state = state.clone();
        on_click(&nuevo, move |_| state.open_trabajo_dialog(None))?;
    }
    append_child(&actions, &nuevo)?;

    for kind in CatalogoKind::ALL {
        let btn = button(kind.plural(), "outline", "button")?;
        let state = state.clone();
        on_click(&btn, move |_| state.open_catalogo_dialog(kind, None))?;
        append_child(&actions, &btn)?;
    }
    append_child(&header, &actions)?;

    append_child(&main, &header)?;
    append_child(&main, &render_filter_bar(state)?)?;
    append_child(&main, &render_table(state)?)?;
    Ok(main)
}
