// ============================================================================
// NOTIFICACIONES - Toasts de éxito/error (fire-and-forget)
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::dom::{append_child, body, get_element_by_id, ElementBuilder};

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

const TOAST_CONTAINER_ID: &str = "toast-container";

/// Toasts en el DOM. El contenedor cuelga de `<body>` para sobrevivir a los re-renders de `#app`.
pub struct ToastNotifier {
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms }
    }

    fn show(&self, kind: &str, message: &str) {
        if let Err(e) = self.try_show(kind, message) {
            log::warn!("⚠️ [TOAST] No se pudo mostrar \"{}\": {:?}", message, e);
        }
    }

    fn try_show(&self, kind: &str, message: &str) -> Result<(), wasm_bindgen::JsValue> {
        let container = match get_element_by_id(TOAST_CONTAINER_ID) {
            Some(container) => container,
            None => {
                let container = ElementBuilder::new("div")?
                    .id(TOAST_CONTAINER_ID)?
                    .class("toast-container")
                    .build();
                let body = body().ok_or_else(|| wasm_bindgen::JsValue::from_str("No body"))?;
                append_child(&body, &container)?;
                container
            }
        };

        let toast = ElementBuilder::new("div")?
            .class(&format!("toast toast-{}", kind))
            .attr("role", "alert")?
            .text(message)
            .build();
        append_child(&container, &toast)?;

        Timeout::new(self.duration_ms, move || toast.remove()).forget();
        Ok(())
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        log::info!("✅ {}", message);
        self.show("success", message);
    }

    fn error(&self, message: &str) {
        log::error!("❌ {}", message);
        self.show("error", message);
    }
}
