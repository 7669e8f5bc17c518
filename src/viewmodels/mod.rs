// ============================================================================
// VIEWMODELS - Lógica de pantallas: formularios, diálogos y notificaciones
// ============================================================================
// Los errores de validación vuelven a la vista (sin toast); los errores del
// store se notifican una sola vez y no se propagan.
// ============================================================================

pub mod trabajos_viewmodel;
pub mod catalogo_viewmodel;
pub mod auth_viewmodel;
pub mod dashboard_viewmodel;

pub use trabajos_viewmodel::TrabajosViewModel;
pub use catalogo_viewmodel::{CatalogoKind, CatalogoViewModel};
pub use auth_viewmodel::{AuthViewModel, LoginOutcome};
pub use dashboard_viewmodel::DashboardViewModel;

use crate::error::AppError;

/// Resultado de enviar un formulario de alta/edición
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Guardado; el diálogo se cierra
    Saved,
    /// Errores por campo; el diálogo sigue abierto
    Invalid(AppError),
    /// El backend falló (ya notificado); el diálogo sigue abierto
    Failed,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}
