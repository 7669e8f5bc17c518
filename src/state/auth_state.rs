// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Session;

/// Estado de autenticación. `token` se comparte con el ApiClient para
/// que cada request lleve el bearer de la sesión actual.
#[derive(Clone, Default)]
pub struct AuthState {
    pub session: Rc<RefCell<Option<Session>>>,
    pub token: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    /// Crear nuevo estado de autenticación
    pub fn new() -> Self {
        Self::default()
    }

    /// Establecer sesión (None = logout)
    pub fn set_session(&self, session: Option<Session>) {
        *self.token.borrow_mut() = session.as_ref().map(|s| s.token.clone());
        *self.session.borrow_mut() = session;
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Email del usuario logueado
    pub fn email(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.email.clone())
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        self.set_session(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_drives_token() {
        let auth = AuthState::new();
        assert!(!auth.is_logged_in());

        auth.set_session(Some(Session {
            token: "abc".to_string(),
            email: "admin@ejemplo.com".to_string(),
            remember_me: true,
        }));
        assert_eq!(auth.token.borrow().as_deref(), Some("abc"));
        assert_eq!(auth.email().as_deref(), Some("admin@ejemplo.com"));

        auth.logout();
        assert!(!auth.is_logged_in());
        assert!(auth.token.borrow().is_none());
    }
}
