// ============================================================================
// DASHBOARD VIEW - Tarjetas, gráficos de barras y actividad reciente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, text_element, ElementBuilder};
use crate::models::{DashboardStats, EstadoTrabajo, Trabajo};
use crate::state::AppState;
use crate::utils::{current_month, format_date};
use crate::viewmodels::DashboardViewModel;

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let stats = state.dashboard_vm().stats();

    let main = ElementBuilder::new("main")?.class("page dashboard").build();
    append_child(&main, &text_element("h1", "page-title", "Dashboard")?)?;

    let cards = ElementBuilder::new("div")?.class("stat-grid").build();
    for card in [
        stat_card("Total de Trabajos", &stats.total.to_string(), "📄", "stat-blue")?,
        stat_card("Trabajos Completados", &stats.completados.to_string(), "✅", "stat-green")?,
        stat_card("Trabajos Pendientes", &stats.pendientes.to_string(), "🕒", "stat-yellow")?,
        stat_card(
            &DashboardViewModel::ingresos_title(current_month()),
            &DashboardViewModel::ingresos_label(&stats),
            "💲",
            "stat-purple",
        )?,
    ] {
        append_child(&cards, &card)?;
    }
    append_child(&main, &cards)?;

    let charts = ElementBuilder::new("div")?.class("chart-grid").build();
    append_child(&charts, &render_estado_chart(&stats)?)?;
    append_child(&charts, &render_tipo_pa_chart(&stats)?)?;
    append_child(&main, &charts)?;

    append_child(&main, &render_recent(&stats.recientes)?)?;
    Ok(main)
}

fn stat_card(titulo: &str, valor: &str, icono: &str, color: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("stat-card").build();
    append_child(&card, &text_element("div", &format!("stat-icon {}", color), icono)?)?;
    let body = ElementBuilder::new("div")?
        .class("stat-body")
        .child(text_element("p", "stat-title", titulo)?)?
        .child(text_element("p", "stat-value", valor)?)?
        .build();
    append_child(&card, &body)?;
    Ok(card)
}

/// Barra horizontal con ancho proporcional a `count / max`
fn bar_row(label: &str, count: usize, max: usize, bar_class: &str) -> Result<Element, JsValue> {
    let percent = if max == 0 { 0 } else { count * 100 / max };
    let row = ElementBuilder::new("div")?.class("bar-row").build();
    append_child(&row, &text_element("span", "bar-label", label)?)?;
    let track = ElementBuilder::new("div")?.class("bar-track").build();
    let fill = ElementBuilder::new("div")?
        .class(&format!("bar-fill {}", bar_class))
        .attr("style", &format!("width: {}%", percent))?
        .build();
    append_child(&track, &fill)?;
    append_child(&row, &track)?;
    append_child(&row, &text_element("span", "bar-count", &count.to_string())?)?;
    Ok(row)
}

fn render_estado_chart(stats: &DashboardStats) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("panel").build();
    append_child(&panel, &text_element("h2", "panel-title", "Trabajos por Estado")?)?;
    let max = stats.por_estado.iter().map(|(_, n)| *n).max().unwrap_or(0);
    for (estado, count) in &stats.por_estado {
        let class = match estado {
            EstadoTrabajo::Pendiente => "bar-pendiente",
            EstadoTrabajo::Cancelado => "bar-cancelado",
            EstadoTrabajo::Terminado => "bar-terminado",
        };
        append_child(&panel, &bar_row(estado.as_str(), *count, max, class)?)?;
    }
    Ok(panel)
}

fn render_tipo_pa_chart(stats: &DashboardStats) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("panel").build();
    append_child(&panel, &text_element("h2", "panel-title", "Trabajos por Tipo de PA")?)?;
    let max = stats.max_por_tipo_pa();
    for (tipo, count) in &stats.por_tipo_pa {
        append_child(&panel, &bar_row(tipo.as_str(), *count, max, "bar-tipo-pa")?)?;
    }
    Ok(panel)
}

fn render_recent(recientes: &[Trabajo]) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("panel").build();
    append_child(
        &panel,
        &text_element("h2", "panel-title", "Resumen de Actividad Reciente")?,
    )?;

    let table = ElementBuilder::new("table")?.class("table").build();
    let head_row = ElementBuilder::new("tr")?.build();
    for heading in ["Cliente", "Curso", "Fecha", "Estado"] {
        append_child(&head_row, &text_element("th", "", heading)?)?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head_row)?.build())?;

    let tbody = ElementBuilder::new("tbody")?.build();
    if recientes.is_empty() {
        let cell = ElementBuilder::new("td")?
            .class("table-empty")
            .attr("colspan", "4")?
            .text("No hay trabajos disponibles")
            .build();
        append_child(&tbody, &ElementBuilder::new("tr")?.child(cell)?.build())?;
    }
    for trabajo in recientes {
        let row = ElementBuilder::new("tr")?
            .child(text_element("td", "", &trabajo.nombre_cliente)?)?
            .child(text_element("td", "", &trabajo.curso)?)?
            .child(text_element("td", "", &format_date(Some(&trabajo.fecha_registro)))?)?
            .child(
                ElementBuilder::new("td")?
                    .child(text_element("span", trabajo.estado.color_class(), trabajo.estado.as_str())?)?
                    .build(),
            )?
            .build();
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;
    append_child(&panel, &table)?;
    Ok(panel)
}
