// ============================================================================
// CATALOGO STORE - Cursos, proveedores y periodos
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::AppResult;
use crate::models::{CatalogEntity, Curso, Periodo, Proveedor};
use crate::services::Repository;
use crate::state::{ReactiveState, Subscribers};
use crate::stores::loading::LoadingGuard;

/// Lista cacheada de una entidad de catálogo
pub struct CatalogList<E: CatalogEntity> {
    repo: Rc<dyn Repository<E>>,
    items: ReactiveState<Vec<E>>,
    in_flight: Rc<Cell<usize>>,
    subscribers: Subscribers,
}

impl<E: CatalogEntity> Clone for CatalogList<E> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            items: self.items.clone(),
            in_flight: self.in_flight.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<E: CatalogEntity> CatalogList<E> {
    pub fn new(repo: Rc<dyn Repository<E>>, subscribers: Subscribers) -> Self {
        Self {
            repo,
            items: ReactiveState::with_subscribers(Vec::new(), subscribers.clone()),
            in_flight: Rc::new(Cell::new(0)),
            subscribers,
        }
    }

    pub fn items(&self) -> Vec<E> {
        self.items.get()
    }

    /// Nombres en orden de llegada, para poblar selects
    pub fn nombres(&self) -> Vec<String> {
        self.items
            .with(|items| items.iter().map(|e| e.nombre().to_string()).collect())
    }

    pub fn get(&self, id: &str) -> Option<E> {
        self.items.with(|items| items.iter().find(|e| e.id() == id).cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    pub async fn fetch_all(&self) -> AppResult<Vec<E>> {
        let _loading = LoadingGuard::raise(&self.in_flight, &self.subscribers);
        let items = self.repo.list().await?;
        log::info!("📚 [CATALOGO] {} {} cargados", items.len(), E::RESOURCE);
        self.items.set(items.clone());
        Ok(items)
    }

    pub async fn add(&self, input: E::Input) -> AppResult<E> {
        let _loading = LoadingGuard::raise(&self.in_flight, &self.subscribers);
        let created = self.repo.create(&input).await?;
        log::info!("➕ [CATALOGO] {} creado: {}", E::LABEL, created.id());
        self.items.update(|items| items.push(created.clone()));
        Ok(created)
    }

    pub async fn update(&self, id: &str, patch: E::Patch) -> AppResult<E> {
        let _loading = LoadingGuard::raise(&self.in_flight, &self.subscribers);
        let updated = self.repo.update(id, &patch).await?;
        log::info!("✏️ [CATALOGO] {} actualizado: {}", E::LABEL, id);
        self.items.update(|items| {
            if let Some(slot) = items.iter_mut().find(|e| e.id() == id) {
                *slot = updated.clone();
            }
        });
        Ok(updated)
    }
}

/// Los tres catálogos comparten una lista de subscribers
#[derive(Clone)]
pub struct CatalogoStore {
    pub cursos: CatalogList<Curso>,
    pub proveedores: CatalogList<Proveedor>,
    pub periodos: CatalogList<Periodo>,
    subscribers: Subscribers,
}

impl CatalogoStore {
    pub fn new(
        cursos: Rc<dyn Repository<Curso>>,
        proveedores: Rc<dyn Repository<Proveedor>>,
        periodos: Rc<dyn Repository<Periodo>>,
    ) -> Self {
        let subscribers = Subscribers::new();
        Self {
            cursos: CatalogList::new(cursos, subscribers.clone()),
            proveedores: CatalogList::new(proveedores, subscribers.clone()),
            periodos: CatalogList::new(periodos, subscribers.clone()),
            subscribers,
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback);
    }

    pub fn is_loading(&self) -> bool {
        self.cursos.is_loading() || self.proveedores.is_loading() || self.periodos.is_loading()
    }

    /// Carga los tres catálogos; el primer error corta la carga
    pub async fn fetch_all(&self) -> AppResult<()> {
        self.cursos.fetch_all().await?;
        self.proveedores.fetch_all().await?;
        self.periodos.fetch_all().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{CursoInput, ProveedorInput};
    use crate::testing::MockRepository;
    use futures::executor::block_on;

    fn curso(id: &str, nombre: &str) -> Curso {
        Curso { id: id.to_string(), nombre: nombre.to_string() }
    }

    fn store() -> (CatalogoStore, Rc<MockRepository<Proveedor>>) {
        let proveedores = Rc::new(MockRepository::new(vec![Proveedor {
            id: "1".to_string(),
            nombre: "Luis".to_string(),
            celular: "987654321".to_string(),
        }]));
        let store = CatalogoStore::new(
            Rc::new(MockRepository::new(vec![curso("1", "Física"), curso("2", "Matemáticas")])),
            proveedores.clone(),
            Rc::new(MockRepository::<Periodo>::new(Vec::new())),
        );
        block_on(store.fetch_all()).unwrap();
        (store, proveedores)
    }

    #[test]
    fn fetch_all_loads_every_catalog() {
        let (store, _) = store();
        assert_eq!(store.cursos.nombres(), vec!["Física", "Matemáticas"]);
        assert_eq!(store.proveedores.items().len(), 1);
        assert!(store.periodos.items().is_empty());
        assert!(!store.is_loading());
    }

    #[test]
    fn add_and_update_patch_list() {
        let (store, _) = store();
        let created = block_on(store.cursos.add(CursoInput { nombre: "Química".to_string() })).unwrap();
        assert_eq!(store.cursos.items().len(), 3);

        block_on(store.cursos.update(&created.id, CursoInput { nombre: "Química II".to_string() }))
            .unwrap();
        assert_eq!(store.cursos.get(&created.id).unwrap().nombre, "Química II");
    }

    #[test]
    fn failed_add_keeps_list() {
        let (store, repo) = store();
        repo.fail_next(AppError::Transport("500".to_string()));
        let input = ProveedorInput { nombre: "Ana".to_string(), celular: "912345678".to_string() };

        assert!(block_on(store.proveedores.add(input)).is_err());
        assert_eq!(store.proveedores.items().len(), 1);
        assert!(!store.proveedores.is_loading());
    }
}
