// ============================================================================
// AUTH VIEWMODEL - Login / logout
// ============================================================================

use crate::error::AppError;
use crate::forms::{parse_login, FormValues};
use crate::services::AuthService;
use crate::state::AuthState;

/// Mensaje inline del formulario cuando el backend rechaza el login
pub const LOGIN_ERROR: &str = "Credenciales inválidas. Inténtalo de nuevo.";

#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    LoggedIn,
    /// Errores por campo, sin llamar al backend
    Invalid(AppError),
    /// Error mostrado dentro del formulario (no hay toast)
    Rejected(&'static str),
}

#[derive(Clone)]
pub struct AuthViewModel {
    auth: AuthState,
    service: AuthService,
}

impl AuthViewModel {
    pub fn new(auth: AuthState, service: AuthService) -> Self {
        Self { auth, service }
    }

    pub async fn login(&self, values: &FormValues) -> LoginOutcome {
        let form = match parse_login(values) {
            Ok(form) => form,
            Err(e) => return LoginOutcome::Invalid(e),
        };

        log::info!("🔐 [AUTH] Iniciando sesión: {}", form.email);
        match self
            .service
            .login(&form.email, &form.password, form.remember_me)
            .await
        {
            Ok(session) => {
                self.auth.set_session(Some(session));
                LoginOutcome::LoggedIn
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login fallido: {}", e);
                LoginOutcome::Rejected(LOGIN_ERROR)
            }
        }
    }

    /// Recupera la sesión guardada al arrancar la app
    pub fn restore(&self) -> bool {
        match AuthService::restore_session() {
            Some(session) => {
                log::info!("🔓 [AUTH] Sesión restaurada: {}", session.email);
                self.auth.set_session(Some(session));
                true
            }
            None => false,
        }
    }

    pub fn logout(&self) {
        log::info!("👋 [AUTH] Cerrando sesión");
        AuthService::clear_session();
        self.auth.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::form_values;
    use crate::services::ApiClient;
    use futures::executor::block_on;

    #[test]
    fn invalid_form_returns_field_errors_without_session() {
        let auth = AuthState::new();
        let vm = AuthViewModel::new(auth.clone(), AuthService::new(ApiClient::new(auth.token.clone())));

        let outcome = block_on(vm.login(&form_values([("email", "admin"), ("password", "")])));

        match outcome {
            LoginOutcome::Invalid(e) => {
                assert_eq!(e.field_message("email"), Some("Correo inválido"));
                assert_eq!(e.field_message("password"), Some("La contraseña es requerida"));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(!auth.is_logged_in());
    }
}
