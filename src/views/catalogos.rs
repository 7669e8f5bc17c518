// ============================================================================
// CATALOGO DIALOG - Cursos, proveedores y periodos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_submit, read_form_values, text_element, ElementBuilder};
use crate::forms::{nombre_values, proveedor_values, value, FormValues};
use crate::models::CatalogEntity;
use crate::state::{AppState, CatalogoDialog};
use crate::stores::CatalogList;
use crate::viewmodels::{CatalogoKind, SubmitOutcome};
use crate::views::shared::{button, render_dialog, text_field};

pub fn render_catalogo_dialog(state: &AppState, dialog: CatalogoDialog) -> Result<Element, JsValue> {
    let CatalogoDialog { kind, editing } = dialog;
    let catalogos = &state.catalogos;

    let initial = match (kind, editing.as_deref()) {
        (CatalogoKind::Cursos, Some(id)) => catalogos.cursos.get(id).map(|c| nombre_values(&c.nombre)),
        (CatalogoKind::Periodos, Some(id)) => catalogos.periodos.get(id).map(|p| nombre_values(&p.nombre)),
        (CatalogoKind::Proveedores, Some(id)) => catalogos.proveedores.get(id).map(|p| proveedor_values(&p)),
        (_, None) => None,
    };
    let values = state.draft_or(initial.unwrap_or_default());

    let body = ElementBuilder::new("div")?.class("catalogo-dialog").build();
    append_child(&body, &render_form(state, kind, editing.clone(), &values)?)?;

    let list = match kind {
        CatalogoKind::Cursos => render_list(state, kind, &catalogos.cursos)?,
        CatalogoKind::Proveedores => render_list(state, kind, &catalogos.proveedores)?,
        CatalogoKind::Periodos => render_list(state, kind, &catalogos.periodos)?,
    };
    append_child(&body, &list)?;

    let title = match editing {
        Some(_) => format!("Editar {}", kind.singular()),
        None => format!("Agregar {}", kind.singular()),
    };
    let state = state.clone();
    render_dialog(&title, body, move || state.close_catalogo_dialog())
}

fn render_form(
    state: &AppState,
    kind: CatalogoKind,
    editing: Option<String>,
    values: &FormValues,
) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .class("form-stack")
        .attr("novalidate", "")?
        .build();

    let placeholder = format!("Ingrese el nombre del {}", kind.singular().to_lowercase());
    append_child(
        &form,
        &text_field("nombre", "Nombre", "text", value(values, "nombre"), &placeholder, state.field_error("nombre"))?,
    )?;

    let fields: &'static [&'static str] = match kind {
        CatalogoKind::Proveedores => {
            append_child(
                &form,
                &text_field(
                    "celular",
                    "Celular",
                    "tel",
                    value(values, "celular"),
                    "Ingrese el número de celular",
                    state.field_error("celular"),
                )?,
            )?;
            &["nombre", "celular"]
        }
        CatalogoKind::Cursos | CatalogoKind::Periodos => &["nombre"],
    };

    let footer = ElementBuilder::new("div")?.class("form-footer").build();
    let cancel = button("Cancelar", "outline", "button")?;
    {
        let state = state.clone();
        on_click(&cancel, move |_| state.close_catalogo_dialog())?;
    }
    let submit = button(if editing.is_some() { "Actualizar" } else { "Guardar" }, "primary", "submit")?;
    append_child(&footer, &cancel)?;
    append_child(&footer, &submit)?;
    append_child(&form, &footer)?;

    {
        let state = state.clone();
        let form_ref = form.clone();
        on_submit(&form, move || {
            let values = read_form_values(&form_ref, fields);
            let state = state.clone();
            let editing = editing.clone();
            let submit = submit.clone();
            let _ = submit.set_attribute("disabled", "");
            spawn_local(async move {
                match state.catalogo_vm().submit(kind, editing.as_deref(), &values).await {
                    SubmitOutcome::Saved => state.close_catalogo_dialog(),
                    SubmitOutcome::Invalid(errors) => state.set_form_errors(errors, values),
                    SubmitOutcome::Failed => {
                        let _ = submit.remove_attribute("disabled");
                    }
                }
            });
        })?;
    }

    Ok(form)
}

/// Elementos existentes; ✏️ pasa el diálogo a modo edición
fn render_list<E: CatalogEntity>(
    state: &AppState,
    kind: CatalogoKind,
    list: &CatalogList<E>,
) -> Result<Element, JsValue> {
    let items = list.items();
    let ul = ElementBuilder::new("ul")?.class("catalogo-list").build();

    if items.is_empty() {
        append_child(&ul, &text_element("li", "catalogo-empty", "Sin registros")?)?;
        return Ok(ul);
    }

    for item in items {
        let li = ElementBuilder::new("li")?.class("catalogo-item").build();
        append_child(&li, &text_element("span", "catalogo-nombre", item.nombre())?)?;

        let edit = ElementBuilder::new("button")?
            .class("btn btn-sm btn-secondary")
            .attr("type", "button")?
            .attr("title", "Editar")?
            .text("✏️")
            .build();
        let state = state.clone();
        let id = item.id().to_string();
        on_click(&edit, move |_| state.open_catalogo_dialog(kind, Some(id.clone())))?;
        append_child(&li, &edit)?;
        append_child(&ul, &li)?;
    }
    Ok(ul)
}
