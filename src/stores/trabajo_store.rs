// ============================================================================
// TRABAJO STORE - Lista completa + vista filtrada de trabajos
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{AppError, AppResult};
use crate::models::{EstadoTrabajo, FilterCriteria, Trabajo, TrabajoInput, TrabajoPatch};
use crate::services::Repository;
use crate::state::{ReactiveState, Subscribers};
use crate::stores::filter::apply_filters;
use crate::stores::loading::LoadingGuard;
use crate::utils::today;

/// Caché de trabajos. Solo se modifica a través de sus operaciones; ante un
/// error del backend la caché queda intacta y el error vuelve al llamador.
#[derive(Clone)]
pub struct TrabajoStore {
    repo: Rc<dyn Repository<Trabajo>>,
    trabajos: ReactiveState<Vec<Trabajo>>,
    filtrados: ReactiveState<Vec<Trabajo>>,
    criteria: ReactiveState<FilterCriteria>,
    in_flight: Rc<Cell<usize>>,
    subscribers: Subscribers,
}

impl TrabajoStore {
    pub fn new(repo: Rc<dyn Repository<Trabajo>>) -> Self {
        let subscribers = Subscribers::new();
        Self {
            repo,
            trabajos: ReactiveState::with_subscribers(Vec::new(), subscribers.clone()),
            filtrados: ReactiveState::with_subscribers(Vec::new(), subscribers.clone()),
            criteria: ReactiveState::with_subscribers(FilterCriteria::default(), subscribers.clone()),
            in_flight: Rc::new(Cell::new(0)),
            subscribers,
        }
    }

    /// Suscribirse a cambios de la caché
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback);
    }

    pub fn trabajos(&self) -> Vec<Trabajo> {
        self.trabajos.get()
    }

    pub fn filtrados(&self) -> Vec<Trabajo> {
        self.filtrados.get()
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.criteria.get()
    }

    pub fn get(&self, id: &str) -> Option<Trabajo> {
        self.trabajos.with(|all| all.iter().find(|t| t.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.trabajos.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Reemplaza la caché con la lista del backend
    pub async fn fetch_all(&self) -> AppResult<Vec<Trabajo>> {
        let _loading = LoadingGuard::raise(&self.in_flight, &self.subscribers);
        let trabajos = self.repo.list().await?;
        log::info!("📋 [TRABAJOS] {} trabajos cargados", trabajos.len());
        self.replace_all(trabajos.clone());
        Ok(trabajos)
    }

    pub async fn add(&self, input: TrabajoInput) -> AppResult<Trabajo> {
        let _loading = LoadingGuard::raise(&self.in_flight, &self.subscribers);
        let created = self.repo.create(&input).await?;
        log::info!("➕ [TRABAJOS] Trabajo creado: {}", created.id);
        self.trabajos.update_silent(|all| all.push(created.clone()));
        self.refresh_filtered();
        Ok(created)
    }

    pub async fn update(&self, id: &str, patch: TrabajoPatch) -> AppResult<Trabajo> {
        let _loading = LoadingGuard::raise(&self.in_flight, &self.subscribers);
        let updated = self.repo.update(id, &patch).await?;
        log::info!("✏️ [TRABAJOS] Trabajo actualizado: {}", id);
        self.replace_one(id, updated.clone());
        Ok(updated)
    }

    pub async fn remove(&self, id: &str) -> AppResult<()> {
        let _loading = LoadingGuard::raise(&self.in_flight, &self.subscribers);
        self.repo.delete(id).await?;
        log::info!("🗑️ [TRABAJOS] Trabajo eliminado: {}", id);
        self.trabajos.update_silent(|all| all.retain(|t| t.id != id));
        self.refresh_filtered();
        Ok(())
    }

    /// Cambia estado y fecha de entrega en una sola llamada
    pub async fn set_status(
        &self,
        id: &str,
        estado: EstadoTrabajo,
        fecha_entrega: Option<String>,
    ) -> AppResult<Trabajo> {
        self.update(id, TrabajoPatch::estado(estado, fecha_entrega)).await
    }

    /// Terminado → Pendiente (limpia la fecha de entrega);
    /// Pendiente/Cancelado → Terminado (fecha de entrega = hoy).
    pub async fn toggle_status(&self, id: &str) -> AppResult<EstadoTrabajo> {
        let actual = self
            .get(id)
            .ok_or_else(|| AppError::not_found("trabajo", id))?
            .estado;

        let nuevo = actual.toggled();
        let fecha_entrega = match nuevo {
            EstadoTrabajo::Terminado => Some(today()),
            EstadoTrabajo::Pendiente | EstadoTrabajo::Cancelado => None,
        };

        self.set_status(id, nuevo, fecha_entrega).await?;
        Ok(nuevo)
    }

    /// Reemplaza todos los criterios y recalcula la vista
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.criteria.update_silent(|c| *c = criteria);
        self.apply_filters();
    }

    /// Cambia un criterio por nombre de campo del formulario
    pub fn set_filter(&self, field: &str, value: &str) {
        let mut changed = false;
        self.criteria.update_silent(|c| changed = c.set(field, value));
        if changed {
            self.apply_filters();
        } else {
            log::warn!("⚠️ [TRABAJOS] Campo de filtro desconocido: {}", field);
        }
    }

    pub fn reset_filters(&self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Recalcula la vista filtrada sin notificar: la vista de filtros
    /// refresca solo las filas de la tabla.
    pub fn apply_filters(&self) {
        let criteria = self.criteria.get();
        let filtrados = self.trabajos.with(|all| apply_filters(all, &criteria));
        self.filtrados.update_silent(|f| *f = filtrados);
    }

    fn replace_all(&self, trabajos: Vec<Trabajo>) {
        self.trabajos.update_silent(|all| *all = trabajos);
        self.refresh_filtered();
    }

    fn replace_one(&self, id: &str, updated: Trabajo) {
        self.trabajos.update_silent(|all| {
            if let Some(slot) = all.iter_mut().find(|t| t.id == id) {
                *slot = updated;
            }
        });
        self.refresh_filtered();
    }

    /// Recalcula la vista y notifica una sola vez
    fn refresh_filtered(&self) {
        self.apply_filters();
        self.subscribers.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{trabajo, trabajo_input, MockRepository};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::task::noop_waker_ref;
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::task::Context;

    /// `list()` queda pendiente hasta que se suelta la compuerta
    struct GatedRepository {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        items: Vec<Trabajo>,
    }

    #[async_trait(?Send)]
    impl Repository<Trabajo> for GatedRepository {
        async fn list(&self) -> AppResult<Vec<Trabajo>> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(self.items.clone())
        }

        async fn create(&self, _input: &TrabajoInput) -> AppResult<Trabajo> {
            Err(AppError::Transport("solo lectura".to_string()))
        }

        async fn update(&self, _id: &str, _patch: &TrabajoPatch) -> AppResult<Trabajo> {
            Err(AppError::Transport("solo lectura".to_string()))
        }

        async fn delete(&self, _id: &str) -> AppResult<()> {
            Err(AppError::Transport("solo lectura".to_string()))
        }
    }

    fn count_notifications(store: &TrabajoStore) -> Rc<Cell<usize>> {
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        store.subscribe(move || hits_clone.set(hits_clone.get() + 1));
        hits
    }

    fn store_with(items: Vec<Trabajo>) -> (TrabajoStore, Rc<MockRepository<Trabajo>>) {
        let repo = Rc::new(MockRepository::new(items));
        let store = TrabajoStore::new(repo.clone());
        block_on(store.fetch_all()).unwrap();
        (store, repo)
    }

    #[test]
    fn fetch_all_replaces_cache_and_view() {
        let (store, _) = store_with(vec![
            trabajo("1", "2024-I", EstadoTrabajo::Pendiente),
            trabajo("2", "2024-II", EstadoTrabajo::Terminado),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.filtrados().len(), 2);
        assert!(!store.is_loading());
    }

    #[test]
    fn toggle_pair_sets_then_clears_fecha_entrega() {
        let (store, _) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);

        let nuevo = block_on(store.toggle_status("1")).unwrap();
        assert_eq!(nuevo, EstadoTrabajo::Terminado);
        let t = store.get("1").unwrap();
        assert_eq!(t.estado, EstadoTrabajo::Terminado);
        assert!(t.fecha_entrega.as_deref().is_some_and(|f| !f.is_empty()));

        let nuevo = block_on(store.toggle_status("1")).unwrap();
        assert_eq!(nuevo, EstadoTrabajo::Pendiente);
        let t = store.get("1").unwrap();
        assert_eq!(t.estado, EstadoTrabajo::Pendiente);
        assert_eq!(t.fecha_entrega, None);
    }

    #[test]
    fn toggle_from_cancelado_completes() {
        let (store, _) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Cancelado)]);
        assert_eq!(block_on(store.toggle_status("1")).unwrap(), EstadoTrabajo::Terminado);
    }

    #[test]
    fn toggle_on_vanished_record_is_not_found_and_keeps_list() {
        let (store, repo) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);
        repo.remove_remote("1");

        let err = block_on(store.toggle_status("1")).unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let t = store.get("1").unwrap();
        assert_eq!(t.estado, EstadoTrabajo::Pendiente);
        assert!(!store.is_loading());
    }

    #[test]
    fn add_failure_leaves_cache_untouched() {
        let (store, repo) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);
        repo.fail_next(AppError::Transport("offline".to_string()));

        let err = block_on(store.add(trabajo_input("2024-I"))).unwrap_err();
        assert_eq!(err, AppError::Transport("offline".to_string()));
        assert_eq!(store.len(), 1);
        assert!(!store.is_loading());
    }

    #[test]
    fn add_and_remove_patch_cache_in_place() {
        let (store, repo) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);

        let created = block_on(store.add(trabajo_input("2024-II"))).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(repo.list_calls(), 1);

        block_on(store.remove(&created.id)).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&created.id).is_none());
    }

    #[test]
    fn mutations_keep_filtered_view_in_sync() {
        let (store, _) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);
        store.set_filter("periodo", "2024-II");
        assert!(store.filtrados().is_empty());

        block_on(store.add(trabajo_input("2024-II"))).unwrap();
        assert_eq!(store.filtrados().len(), 1);

        store.reset_filters();
        assert_eq!(store.filtrados().len(), 2);
    }

    #[test]
    fn filter_changes_do_not_notify_but_mutations_do() {
        let (store, _) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);
        let hits = count_notifications(&store);

        store.set_filter("busqueda", "fís");
        assert_eq!(hits.get(), 0);

        // inicio de la petición, cambio de caché, fin de la petición
        block_on(store.toggle_status("1")).unwrap();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn loading_is_announced_while_request_is_pending() {
        let (release, gate) = oneshot::channel();
        let store = TrabajoStore::new(Rc::new(GatedRepository {
            gate: RefCell::new(Some(gate)),
            items: vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)],
        }));
        let hits = count_notifications(&store);

        let mut fetch = Box::pin(store.fetch_all());
        let mut cx = Context::from_waker(noop_waker_ref());
        assert!(fetch.as_mut().poll(&mut cx).is_pending());
        assert!(store.is_loading());
        assert_eq!(hits.get(), 1);

        release.send(()).unwrap();
        assert_eq!(block_on(fetch).unwrap().len(), 1);
        assert!(!store.is_loading());
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn failed_request_still_announces_end_of_loading() {
        let (store, repo) = store_with(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);
        let hits = count_notifications(&store);
        repo.fail_next(AppError::Transport("offline".to_string()));

        assert!(block_on(store.remove("1")).is_err());
        assert!(!store.is_loading());
        assert_eq!(hits.get(), 2);
        assert_eq!(store.len(), 1);
    }
}
