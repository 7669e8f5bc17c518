use crate::error::AppResult;
use crate::models::{LoginRequest, Session};
use crate::services::api_client::ApiClient;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, StorageKind, SESSION_STORAGE_KEY};

/// Autenticación contra el backend + persistencia de la sesión en el navegador
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Login con email y contraseña. Falla con `InvalidCredentials` si el backend los rechaza.
    pub async fn login(&self, email: &str, password: &str, remember_me: bool) -> AppResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.api.login(&request).await?;
        let session = Session {
            token: response.token,
            email: response.user.map(|u| u.email).unwrap_or(request.email),
            remember_me,
        };

        if let Err(e) = Self::persist_session(&session) {
            log::error!("❌ [AUTH] Error guardando sesión: {}", e);
        }

        log::info!("✅ [AUTH] Sesión iniciada: {}", session.email);
        Ok(session)
    }

    /// "Mantener sesión iniciada" → localStorage; si no, solo dura la pestaña
    pub fn persist_session(session: &Session) -> Result<(), String> {
        let kind = if session.remember_me {
            StorageKind::Local
        } else {
            StorageKind::Session
        };
        save_to_storage(kind, SESSION_STORAGE_KEY, session)
    }

    /// Sesión guardada por un login anterior, si existe
    pub fn restore_session() -> Option<Session> {
        load_from_storage::<Session>(StorageKind::Local, SESSION_STORAGE_KEY)
            .or_else(|| load_from_storage::<Session>(StorageKind::Session, SESSION_STORAGE_KEY))
    }

    /// Borra la sesión de ambos storages
    pub fn clear_session() {
        for kind in [StorageKind::Local, StorageKind::Session] {
            if let Err(e) = remove_from_storage(kind, SESSION_STORAGE_KEY) {
                log::warn!("⚠️ [AUTH] {}", e);
            }
        }
    }
}
