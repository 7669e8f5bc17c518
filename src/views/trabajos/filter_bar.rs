// ============================================================================
// FILTER BAR - Criterios de la tabla de trabajos
// ============================================================================
// Cada cambio actualiza solo las filas (ver dom::incremental), así el input
// de búsqueda conserva el foco mientras se escribe.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_change, on_click, on_input, ElementBuilder};
use crate::models::TipoPA;
use crate::state::AppState;
use crate::views::shared::{button, select_field, text_field, SelectOption};

pub fn render_filter_bar(state: &AppState) -> Result<Element, JsValue> {
    let criteria = state.trabajos.criteria();
    let catalogos = &state.catalogos;

    let panel = ElementBuilder::new("div")?.class("panel filter-bar").build();
    append_child(
        &panel,
        &ElementBuilder::new("h3")?.class("panel-title").text("Filtros").build(),
    )?;

    let grid = ElementBuilder::new("div")?.class("filter-grid").build();

    let tipos = SelectOption::from_values(TipoPA::ALL.iter().map(TipoPA::as_str));
    let tipo_pa = select_field("tipoPA", "Tipo de PA", "Todos", &tipos, &criteria.tipo_pa, None)?;
    listen_change(state, &tipo_pa, "tipoPA")?;
    append_child(&grid, &tipo_pa)?;

    let periodos = SelectOption::from_values(catalogos.periodos.nombres());
    let periodo = select_field("periodo", "Periodo", "Todos", &periodos, &criteria.periodo, None)?;
    listen_change(state, &periodo, "periodo")?;
    append_child(&grid, &periodo)?;

    let proveedores = SelectOption::from_values(catalogos.proveedores.nombres());
    let proveedor = select_field(
        "proveedor",
        "Proveedor",
        "Todos",
        &proveedores,
        &criteria.proveedor,
        None,
    )?;
    listen_change(state, &proveedor, "proveedor")?;
    append_child(&grid, &proveedor)?;

    let busqueda = text_field("busqueda", "Buscar", "text", &criteria.busqueda, "Buscar...", None)?;
    {
        let state = state.clone();
        on_input(&busqueda, move |value| state.change_filter("busqueda", &value))?;
    }
    append_child(&grid, &busqueda)?;

    let inicio = text_field("fechaInicio", "Fecha Inicio", "date", &criteria.fecha_inicio, "", None)?;
    listen_change(state, &inicio, "fechaInicio")?;
    append_child(&grid, &inicio)?;

    let fin = text_field("fechaFin", "Fecha Fin", "date", &criteria.fecha_fin, "", None)?;
    listen_change(state, &fin, "fechaFin")?;
    append_child(&grid, &fin)?;

    append_child(&panel, &grid)?;

    let limpiar = button("Limpiar", "outline", "button")?;
    {
        let state = state.clone();
        on_click(&limpiar, move |_| state.reset_filters())?;
    }
    append_child(&panel, &limpiar)?;

    Ok(panel)
}

/// El evento `change` burbujea desde el control hasta su grupo
fn listen_change(state: &AppState, group: &Element, field: &'static str) -> Result<(), JsValue> {
    let state = state.clone();
    on_change(group, move |value| state.change_filter(field, &value))
}
