// ============================================================================
// DIALOG - Modal genérico (overlay + panel + cerrar)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};

/// Diálogo modal. Click en el overlay o en ✕ llama a `on_close`.
pub fn render_dialog<F>(title: &str, body: Element, on_close: F) -> Result<Element, JsValue>
where
    F: Fn() + 'static,
{
    let on_close = std::rc::Rc::new(on_close);

    let overlay = ElementBuilder::new("div")?
        .class("dialog-overlay")
        .attr("role", "dialog")?
        .attr("aria-modal", "true")?
        .build();

    let panel = ElementBuilder::new("div")?.class("dialog-panel").build();

    let header = ElementBuilder::new("div")?.class("dialog-header").build();
    let heading = ElementBuilder::new("h2")?.class("dialog-title").text(title).build();
    let close_btn = ElementBuilder::new("button")?
        .class("dialog-close")
        .attr("type", "button")?
        .attr("aria-label", "Cerrar")?
        .text("✕")
        .build();
    {
        let on_close = on_close.clone();
        on_click(&close_btn, move |_| on_close())?;
    }
    append_child(&header, &heading)?;
    append_child(&header, &close_btn)?;

    let content = ElementBuilder::new("div")?.class("dialog-body").child(body)?.build();
    append_child(&panel, &header)?;
    append_child(&panel, &content)?;
    append_child(&overlay, &panel)?;

    // solo clicks directos sobre el fondo, no los que burbujean desde el panel
    {
        let overlay_ref = overlay.clone();
        on_click(&overlay, move |event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el == overlay_ref)
                .unwrap_or(false);
            if on_backdrop {
                on_close();
            }
        })?;
    }

    Ok(overlay)
}
