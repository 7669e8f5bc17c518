// ============================================================================
// INCREMENTAL DOM UPDATES - Solo las filas de la tabla de trabajos
// ============================================================================
// Escribir en la barra de filtros no debe reconstruir la página: se perdería
// el foco del input. Se reemplaza solo el <tbody> y el contador.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::AppState;
use crate::views::trabajos::table::{render_rows, ROWS_ID, COUNT_ID};

pub fn update_trabajo_rows(state: &AppState) -> Result<(), JsValue> {
    let tbody = get_element_by_id(ROWS_ID)
        .ok_or_else(|| JsValue::from_str("Rows not found, needs full render"))?;

    let filtrados = state.trabajos.filtrados();
    clear_children(&tbody);
    for row in render_rows(state, &filtrados)? {
        append_child(&tbody, &row)?;
    }

    if let Some(count) = get_element_by_id(COUNT_ID) {
        count.set_text_content(Some(&format!("{} de {}", filtrados.len(), state.trabajos.len())));
    }

    log::debug!("🔄 [UPDATE] {} filas renderizadas", filtrados.len());
    Ok(())
}
