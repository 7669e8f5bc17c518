// ============================================================================
// REPOSITORY - Contrato con el backend de persistencia (CRUD por entidad)
// ============================================================================

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::Entity;
use crate::services::api_client::ApiClient;

/// Persistencia de una entidad. Single-thread (WASM), por eso `?Send`.
#[async_trait(?Send)]
pub trait Repository<E: Entity> {
    async fn list(&self) -> AppResult<Vec<E>>;

    async fn create(&self, input: &E::Input) -> AppResult<E>;

    /// Falla con `NotFound` si el registro ya no existe
    async fn update(&self, id: &str, patch: &E::Patch) -> AppResult<E>;

    /// Falla con `NotFound` si el registro ya no existe
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Implementación HTTP: `/{recurso}` y `/{recurso}/{id}`
pub struct RestRepository<E> {
    client: ApiClient,
    _entity: PhantomData<E>,
}

impl<E: Entity> RestRepository<E> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    fn item_path(id: &str) -> String {
        format!("/{}/{}", E::RESOURCE, id)
    }

    fn not_found(id: &str) -> AppError {
        AppError::not_found(E::LABEL, id)
    }
}

#[async_trait(?Send)]
impl<E: Entity> Repository<E> for RestRepository<E> {
    async fn list(&self) -> AppResult<Vec<E>> {
        let items: Vec<E> = self.client.get_json(&format!("/{}", E::RESOURCE)).await?;
        log::info!("📋 [API] {} {} recibidos", items.len(), E::RESOURCE);
        Ok(items)
    }

    async fn create(&self, input: &E::Input) -> AppResult<E> {
        self.client.post_json(&format!("/{}", E::RESOURCE), input).await
    }

    async fn update(&self, id: &str, patch: &E::Patch) -> AppResult<E> {
        self.client
            .patch_json(&Self::item_path(id), patch, Self::not_found(id))
            .await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.client
            .delete(&Self::item_path(id), Self::not_found(id))
            .await
    }
}
