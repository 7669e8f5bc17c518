// ============================================================================
// TRABAJOS ADMIN - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Formularios, diálogos y notificaciones
// - Stores: Caché local de trabajos y catálogos + motor de filtros
// - Services: SOLO comunicación API, sesión y toasts
// - State: Estado de UI con Rc<RefCell>
// - Models: Estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod forms;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

#[cfg(test)]
mod testing;

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static RENDER_SCHEDULED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Trabajos Admin - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| *cell.borrow_mut() = Some(app));
    Ok(())
}

/// Re-render completo
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Programa un re-render completo en el próximo tick; varias llamadas seguidas
/// producen un solo render.
pub fn schedule_render() {
    if RENDER_SCHEDULED.with(|flag| flag.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_SCHEDULED.with(|flag| flag.set(false));
        rerender_app();
    })
    .forget();
}

pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            // ya estamos renderizando: reintentar en el próximo tick
            schedule_render();
            return;
        };
        let Some(app) = slot.as_mut() else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
            return;
        };

        match update_type {
            UpdateType::Incremental(update) => {
                log::debug!("🔄 [UPDATE] Actualización incremental: {:?}", update);
                if let Err(e) = app.update_incremental(update) {
                    log::debug!("🔄 [UPDATE] Cambiando a re-render completo: {:?}", e);
                    if let Err(e) = app.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                }
            }
            UpdateType::FullRender => {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            }
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
