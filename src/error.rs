// ============================================================================
// ERRORES - Taxonomía única para stores, servicios y formularios
// ============================================================================

use thiserror::Error;

/// Error de validación de un campo de formulario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Detectado en el formulario, nunca llega al store
    #[error("validación fallida en {} campo(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// El registro ya no existe en el backend
    #[error("{resource} {id} no encontrado")]
    NotFound { resource: &'static str, id: String },

    #[error("credenciales inválidas")]
    InvalidCredentials,

    /// Fallo de red o del backend
    #[error("error de transporte: {0}")]
    Transport(String),
}

impl AppError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { resource, id: id.into() }
    }

    /// Mensaje del campo indicado, si hubo error de validación en él
    pub fn field_message(&self, field: &str) -> Option<&'static str> {
        match self {
            Self::Validation(errors) => errors
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
