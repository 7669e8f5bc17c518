// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y traduce status a AppError
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, LoginResponse};

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: Option<String>,
    /// Bearer de la sesión actual, compartido con AuthState
    token: Rc<RefCell<Option<String>>>,
}

impl ApiClient {
    pub fn new(token: Rc<RefCell<Option<String>>>) -> Self {
        Self {
            base_url: CONFIG.backend_url().trim_end_matches('/').to_string(),
            api_key: CONFIG.api_key.clone(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let mut builder = builder.header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.header("apikey", key);
        }
        if let Some(token) = self.token.borrow().as_ref() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        builder
    }

    /// GET → JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_ok(response, None).await?;
        parse_json(response).await
    }

    /// POST JSON → JSON
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| AppError::Transport(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_ok(response, None).await?;
        parse_json(response).await
    }

    /// PATCH JSON → JSON. 404 se traduce a `not_found`.
    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        not_found: AppError,
    ) -> AppResult<T> {
        let response = self
            .authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| AppError::Transport(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_ok(response, Some(not_found)).await?;
        parse_json(response).await
    }

    /// DELETE. 404 se traduce a `not_found`.
    pub async fn delete(&self, path: &str, not_found: AppError) -> AppResult<()> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(response, Some(not_found)).await?;
        Ok(())
    }

    /// Login. 400/401 → `InvalidCredentials`.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        log::info!("🔐 [API] Login para: {}", request.email);

        let response = self
            .authorize(Request::post(&self.url("/auth/login")))
            .json(request)
            .map_err(|e| AppError::Transport(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        if matches!(response.status(), 400 | 401) {
            log::warn!("⚠️ [API] Credenciales rechazadas ({})", response.status());
            return Err(AppError::InvalidCredentials);
        }

        let response = ensure_ok(response, None).await?;
        parse_json(response).await
    }
}

fn network_error(e: gloo_net::Error) -> AppError {
    AppError::Transport(format!("Network error: {}", e))
}

async fn ensure_ok(response: Response, not_found: Option<AppError>) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    if status == 404 {
        if let Some(err) = not_found {
            log::warn!("⚠️ [API] {}", err);
            return Err(err);
        }
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    log::error!("❌ [API] HTTP {}: {}", status, error_text);
    Err(AppError::Transport(format!("HTTP error {}: {}", status, error_text)))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Transport(format!("Parse error: {}", e)))
}
