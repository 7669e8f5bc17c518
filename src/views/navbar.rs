use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, text_element, ElementBuilder};
use crate::state::{AppState, Page};

/// Barra superior: navegación entre páginas, usuario y logout
pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("navbar").build();
    append_child(&nav, &text_element("div", "navbar-brand", "📚 Trabajos Admin")?)?;

    let links = ElementBuilder::new("div")?.class("navbar-links").build();
    let current = state.current_page();
    for (page, label) in [(Page::Dashboard, "Dashboard"), (Page::Trabajos, "Trabajos")] {
        let link = ElementBuilder::new("button")?
            .class(if page == current { "nav-link active" } else { "nav-link" })
            .attr("type", "button")?
            .text(label)
            .build();
        let state = state.clone();
        on_click(&link, move |_| state.set_page(page))?;
        append_child(&links, &link)?;
    }
    append_child(&nav, &links)?;

    let user = ElementBuilder::new("div")?.class("navbar-user").build();
    if let Some(email) = state.auth.email() {
        append_child(&user, &text_element("span", "navbar-email", &email)?)?;
    }
    let logout = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .attr("type", "button")?
        .text("Cerrar sesión")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| state.logout())?;
    }
    append_child(&user, &logout)?;
    append_child(&nav, &user)?;

    Ok(nav)
}
