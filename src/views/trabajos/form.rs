// ============================================================================
// TRABAJO DIALOG - Alta y edición de trabajos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, read_form_values, ElementBuilder};
use crate::forms::{trabajo_defaults, trabajo_values, value, FormValues};
use crate::models::{EstadoTrabajo, TipoPA, TipoTrabajo};
use crate::state::AppState;
use crate::viewmodels::SubmitOutcome;
use crate::views::shared::{button, render_dialog, select_field, text_field, SelectOption};

const FIELDS: [&str; 11] = [
    "nombreCliente",
    "proveedor",
    "curso",
    "tipoPA",
    "tipoTrabajo",
    "fechaRegistro",
    "fechaEntrega",
    "periodo",
    "precio",
    "url",
    "estado",
];

pub fn render_trabajo_dialog(state: &AppState, editing: Option<String>) -> Result<Element, JsValue> {
    let initial = editing
        .as_deref()
        .and_then(|id| state.trabajos.get(id))
        .map(|t| trabajo_values(&t))
        .unwrap_or_else(trabajo_defaults);
    let values = state.draft_or(initial);

    let form = ElementBuilder::new("form")?
        .class("form-grid")
        .attr("novalidate", "")?
        .build();

    for field in render_fields(state, &values)? {
        append_child(&form, &field)?;
    }

    let footer = ElementBuilder::new("div")?.class("form-footer").build();
    let submit = button(
        if editing.is_some() { "Actualizar" } else { "Guardar" },
        "primary",
        "submit",
    )?;
    append_child(&footer, &submit)?;
    append_child(&form, &footer)?;

    {
        let state = state.clone();
        let form_ref = form.clone();
        let editing = editing.clone();
        on_submit(&form, move || {
            let values = read_form_values(&form_ref, &FIELDS);
            let state = state.clone();
            let editing = editing.clone();
            let submit = submit.clone();
            let _ = submit.set_attribute("disabled", "");
            spawn_local(async move {
                match state.trabajos_vm().submit(editing.as_deref(), &values).await {
                    SubmitOutcome::Saved => state.close_trabajo_dialog(),
                    SubmitOutcome::Invalid(errors) => state.set_form_errors(errors, values),
                    SubmitOutcome::Failed => {
                        let _ = submit.remove_attribute("disabled");
                    }
                }
            });
        })?;
    }

    let title = if editing.is_some() { "Editar Trabajo" } else { "Nuevo Trabajo" };
    let state = state.clone();
    render_dialog(title, form, move || state.close_trabajo_dialog())
}

fn render_fields(state: &AppState, values: &FormValues) -> Result<Vec<Element>, JsValue> {
    let catalogos = &state.catalogos;
    let err = |field: &str| state.field_error(field);
    let v = |field: &str| value(values, field);

    let tipos_pa = SelectOption::from_values(TipoPA::ALL.iter().map(TipoPA::as_str));
    let tipos_trabajo = SelectOption::from_values(TipoTrabajo::ALL.iter().map(TipoTrabajo::as_str));
    let estados = SelectOption::from_values(EstadoTrabajo::ALL.iter().map(EstadoTrabajo::as_str));
    let proveedores = SelectOption::from_values(catalogos.proveedores.nombres());
    let cursos = SelectOption::from_values(catalogos.cursos.nombres());
    let periodos = SelectOption::from_values(catalogos.periodos.nombres());

    Ok(vec![
        text_field("nombreCliente", "Nombre del Cliente", "text", v("nombreCliente"), "Estudiante", err("nombreCliente"))?,
        select_field("proveedor", "Proveedor", "Seleccionar...", &proveedores, v("proveedor"), err("proveedor"))?,
        select_field("curso", "Curso", "Seleccionar...", &cursos, v("curso"), err("curso"))?,
        select_field("tipoPA", "Tipo de PA", "Seleccionar...", &tipos_pa, v("tipoPA"), err("tipoPA"))?,
        select_field("tipoTrabajo", "Tipo de Trabajo", "Seleccionar...", &tipos_trabajo, v("tipoTrabajo"), err("tipoTrabajo"))?,
        text_field("fechaRegistro", "Fecha de Registro", "date", v("fechaRegistro"), "", err("fechaRegistro"))?,
        text_field("fechaEntrega", "Fecha de Entrega", "date", v("fechaEntrega"), "Por definir", err("fechaEntrega"))?,
        select_field("periodo", "Periodo", "Seleccionar...", &periodos, v("periodo"), err("periodo"))?,
        text_field("precio", "Precio (Soles)", "number", v("precio"), "20", err("precio"))?,
        text_field("url", "URL", "text", v("url"), "https://...", err("url"))?,
        select_field("estado", "Estado", "Seleccionar...", &estados, v("estado"), err("estado"))?,
    ])
}
