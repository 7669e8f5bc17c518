// ============================================================================
// VIEWS - Funciones que construyen DOM a partir del AppState (sin lógica)
// ============================================================================

pub mod app;
pub mod login;
pub mod navbar;
pub mod dashboard;
pub mod trabajos;
pub mod catalogos;
pub mod shared;

pub use app::render_app;
pub use login::render_login;
pub use navbar::render_navbar;
pub use dashboard::render_dashboard;
pub use trabajos::{render_trabajo_dialog, render_trabajos_page};
pub use catalogos::render_catalogo_dialog;
