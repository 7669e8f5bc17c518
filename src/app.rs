// ============================================================================
// APP - Aplicación principal: dueña del AppState y del nodo #app
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::incremental::update_trabajo_rows;
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::{AppState, IncrementalUpdate};
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        if state.auth_vm().restore() {
            load_data(&state);
        }

        // Cualquier cambio en los stores programa un re-render (agrupado)
        state.trabajos.subscribe(crate::schedule_render);
        state.catalogos.subscribe(crate::schedule_render);

        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] App::render()");
        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::TrabajoRows => update_trabajo_rows(&self.state),
        }
    }
}

/// Carga inicial de trabajos y catálogos (tras login o sesión restaurada)
pub fn load_data(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        log::info!("📥 [APP] Cargando datos...");
        let catalogos_ok = state.catalogo_vm().load().await;
        let trabajos_ok = state.trabajos_vm().load().await;
        if catalogos_ok && trabajos_ok {
            log::info!("✅ [APP] Datos cargados");
        }
    });
}
