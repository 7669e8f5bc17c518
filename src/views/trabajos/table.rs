// ============================================================================
// TRABAJOS TABLE - Filas con estilo por estado y acciones
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, confirm, on_click, text_element, ElementBuilder};
use crate::models::{EstadoTrabajo, Trabajo};
use crate::state::AppState;
use crate::utils::{format_date, sort_by_status, MONEDA};

pub const ROWS_ID: &str = "trabajos-tbody";
pub const COUNT_ID: &str = "trabajos-count";

const HEADINGS: [&str; 9] = [
    "Cliente",
    "Curso",
    "Proveedor",
    "Tipo PA",
    "Fecha Reg.",
    "Fecha Entrega",
    "Precio",
    "Estado",
    "Acciones",
];

pub fn render_table(state: &AppState) -> Result<Element, JsValue> {
    let filtrados = state.trabajos.filtrados();

    let panel = ElementBuilder::new("div")?.class("panel table-panel").build();

    let count = ElementBuilder::new("p")?
        .class("table-count")
        .id(COUNT_ID)?
        .text(&format!("{} de {}", filtrados.len(), state.trabajos.len()))
        .build();
    append_child(&panel, &count)?;

    if state.trabajos.is_loading() {
        append_child(&panel, &text_element("p", "table-loading", "Cargando...")?)?;
    }

    let table = ElementBuilder::new("table")?.class("table").build();
    let head_row = ElementBuilder::new("tr")?.build();
    for heading in HEADINGS {
        let th = ElementBuilder::new("th")?.attr("scope", "col")?.text(heading).build();
        append_child(&head_row, &th)?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head_row)?.build())?;

    let tbody = ElementBuilder::new("tbody")?.id(ROWS_ID)?.build();
    for row in render_rows(state, &filtrados)? {
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;

    let scroll = ElementBuilder::new("div")?.class("table-scroll").child(table)?.build();
    append_child(&panel, &scroll)?;
    Ok(panel)
}

/// Filas del `<tbody>`, ordenadas por estado para mostrarse
pub fn render_rows(state: &AppState, trabajos: &[Trabajo]) -> Result<Vec<Element>, JsValue> {
    if trabajos.is_empty() {
        let cell = ElementBuilder::new("td")?
            .class("table-empty")
            .attr("colspan", &HEADINGS.len().to_string())?
            .text("No hay trabajos disponibles")
            .build();
        return Ok(vec![ElementBuilder::new("tr")?.child(cell)?.build()]);
    }

    sort_by_status(trabajos)
        .iter()
        .map(|trabajo| render_row(state, trabajo))
        .collect()
}

fn render_row(state: &AppState, trabajo: &Trabajo) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?
        .class(trabajo.estado.row_class())
        .attr("data-id", &trabajo.id)?
        .build();

    let cells = [
        trabajo.nombre_cliente.clone(),
        trabajo.curso.clone(),
        trabajo.proveedor.clone(),
        trabajo.tipo_pa.to_string(),
        format_date(Some(&trabajo.fecha_registro)),
        format_date(trabajo.fecha_entrega.as_deref()),
        format!("{} {}", MONEDA, trabajo.precio),
    ];
    for text in &cells {
        append_child(&row, &text_element("td", "", text)?)?;
    }

    let badge = text_element("span", trabajo.estado.color_class(), trabajo.estado.as_str())?;
    append_child(&row, &ElementBuilder::new("td")?.child(badge)?.build())?;

    append_child(&row, &render_actions(state, trabajo)?)?;
    Ok(row)
}

/// Toggle y eliminar quedan deshabilitados mientras hay una petición en curso
fn render_actions(state: &AppState, trabajo: &Trabajo) -> Result<Element, JsValue> {
    let cell = ElementBuilder::new("td")?.class("table-actions").build();
    let busy = state.trabajos.is_loading();

    let toggle_variant = match trabajo.estado {
        EstadoTrabajo::Terminado => "btn btn-sm btn-secondary",
        EstadoTrabajo::Pendiente | EstadoTrabajo::Cancelado => "btn btn-sm btn-primary",
    };
    let toggle = ElementBuilder::new("button")?
        .class(toggle_variant)
        .attr("type", "button")?
        .flag("disabled", busy)?
        .text(trabajo.estado.action_label())
        .build();
    {
        let state = state.clone();
        let id = trabajo.id.clone();
        let button = toggle.clone();
        on_click(&toggle, move |_| {
            let _ = button.set_attribute("disabled", "");
            let state = state.clone();
            let id = id.clone();
            spawn_local(async move {
                state.trabajos_vm().toggle_status(&id).await;
            });
        })?;
    }
    append_child(&cell, &toggle)?;

    let edit = ElementBuilder::new("button")?
        .class("btn btn-sm btn-secondary")
        .attr("type", "button")?
        .attr("title", "Editar")?
        .text("✏️")
        .build();
    {
        let state = state.clone();
        let id = trabajo.id.clone();
        on_click(&edit, move |_| state.open_trabajo_dialog(Some(id.clone())))?;
    }
    append_child(&cell, &edit)?;

    let delete = ElementBuilder::new("button")?
        .class("btn btn-sm btn-danger")
        .attr("type", "button")?
        .attr("title", "Eliminar")?
        .flag("disabled", busy)?
        .text("🗑️")
        .build();
    {
        let state = state.clone();
        let id = trabajo.id.clone();
        let button = delete.clone();
        on_click(&delete, move |_| {
            if !confirm("¿Estás seguro de eliminar este trabajo?") {
                return;
            }
            let _ = button.set_attribute("disabled", "");
            let state = state.clone();
            let id = id.clone();
            spawn_local(async move {
                state.trabajos_vm().delete(&id).await;
            });
        })?;
    }
    append_child(&cell, &delete)?;

    if let Some(url) = &trabajo.url {
        let link = ElementBuilder::new("a")?
            .class("btn btn-sm btn-outline")
            .attr("href", url)?
            .attr("target", "_blank")?
            .attr("rel", "noopener noreferrer")?
            .attr("title", "Abrir enlace")?
            .text("🔗")
            .build();
        append_child(&cell, &link)?;
    }

    Ok(cell)
}
