// ============================================================================
// TESTING - Dobles de prueba: repositorio en memoria y notificador que graba
// ============================================================================

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{
    Curso, CursoInput, Entity, EstadoTrabajo, Periodo, PeriodoInput, Proveedor, ProveedorInput,
    TipoPA, TipoTrabajo, Trabajo, TrabajoInput, TrabajoPatch,
};
use crate::services::{Notifier, Repository};

pub fn trabajo(id: &str, periodo: &str, estado: EstadoTrabajo) -> Trabajo {
    Trabajo {
        id: id.to_string(),
        nombre_cliente: "Estudiante".to_string(),
        proveedor: "Luis".to_string(),
        curso: "Física".to_string(),
        tipo_pa: TipoPA::Pa01,
        tipo_trabajo: TipoTrabajo::Individual,
        fecha_registro: "2024-03-01".to_string(),
        fecha_entrega: None,
        periodo: periodo.to_string(),
        precio: 20.0,
        url: None,
        estado,
    }
}

pub fn trabajo_input(periodo: &str) -> TrabajoInput {
    TrabajoInput::from(&trabajo("", periodo, EstadoTrabajo::Pendiente))
}

/// Lo que el backend hace con los payloads: crear a partir del input y
/// aplicar patches sobre el registro guardado.
pub trait InMemoryEntity: Entity {
    fn from_input(id: String, input: &Self::Input) -> Self;

    fn apply_patch(&mut self, patch: &Self::Patch);
}

impl InMemoryEntity for Trabajo {
    fn from_input(id: String, input: &TrabajoInput) -> Self {
        let input = input.clone();
        Self {
            id,
            nombre_cliente: input.nombre_cliente,
            proveedor: input.proveedor,
            curso: input.curso,
            tipo_pa: input.tipo_pa,
            tipo_trabajo: input.tipo_trabajo,
            fecha_registro: input.fecha_registro,
            fecha_entrega: input.fecha_entrega,
            periodo: input.periodo,
            precio: input.precio,
            url: input.url,
            estado: input.estado,
        }
    }

    fn apply_patch(&mut self, patch: &TrabajoPatch) {
        let patch = patch.clone();
        if let Some(v) = patch.nombre_cliente { self.nombre_cliente = v; }
        if let Some(v) = patch.proveedor { self.proveedor = v; }
        if let Some(v) = patch.curso { self.curso = v; }
        if let Some(v) = patch.tipo_pa { self.tipo_pa = v; }
        if let Some(v) = patch.tipo_trabajo { self.tipo_trabajo = v; }
        if let Some(v) = patch.fecha_registro { self.fecha_registro = v; }
        if let Some(v) = patch.fecha_entrega { self.fecha_entrega = v; }
        if let Some(v) = patch.periodo { self.periodo = v; }
        if let Some(v) = patch.precio { self.precio = v; }
        if let Some(v) = patch.url { self.url = v; }
        if let Some(v) = patch.estado { self.estado = v; }
    }
}

impl InMemoryEntity for Curso {
    fn from_input(id: String, input: &CursoInput) -> Self {
        Self { id, nombre: input.nombre.clone() }
    }

    fn apply_patch(&mut self, patch: &CursoInput) {
        self.nombre = patch.nombre.clone();
    }
}

impl InMemoryEntity for Periodo {
    fn from_input(id: String, input: &PeriodoInput) -> Self {
        Self { id, nombre: input.nombre.clone() }
    }

    fn apply_patch(&mut self, patch: &PeriodoInput) {
        self.nombre = patch.nombre.clone();
    }
}

impl InMemoryEntity for Proveedor {
    fn from_input(id: String, input: &ProveedorInput) -> Self {
        Self {
            id,
            nombre: input.nombre.clone(),
            celular: input.celular.clone(),
        }
    }

    fn apply_patch(&mut self, patch: &ProveedorInput) {
        self.nombre = patch.nombre.clone();
        self.celular = patch.celular.clone();
    }
}

/// Backend en memoria. `fail_next` hace fallar la siguiente llamada.
pub struct MockRepository<E: InMemoryEntity> {
    items: RefCell<Vec<E>>,
    next_id: Cell<u32>,
    fail_next: RefCell<Option<AppError>>,
    list_calls: Cell<usize>,
}

impl<E: InMemoryEntity> MockRepository<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self {
            next_id: Cell::new(items.len() as u32 + 100),
            items: RefCell::new(items),
            fail_next: RefCell::new(None),
            list_calls: Cell::new(0),
        }
    }

    pub fn fail_next(&self, error: AppError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    /// Borra del "backend" sin pasar por el store
    pub fn remove_remote(&self, id: &str) {
        self.items.borrow_mut().retain(|e| e.id() != id);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    fn check(&self) -> AppResult<()> {
        match self.fail_next.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<E: InMemoryEntity> Repository<E> for MockRepository<E> {
    async fn list(&self) -> AppResult<Vec<E>> {
        self.check()?;
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(self.items.borrow().clone())
    }

    async fn create(&self, input: &E::Input) -> AppResult<E> {
        self.check()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = E::from_input(id.to_string(), input);
        self.items.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: &E::Patch) -> AppResult<E> {
        self.check()?;
        let mut items = self.items.borrow_mut();
        let item = items
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| AppError::not_found(E::LABEL, id))?;
        item.apply_patch(patch);
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.check()?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|e| e.id() != id);
        if items.len() == before {
            return Err(AppError::not_found(E::LABEL, id));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Success)
    }

    fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices.borrow_mut().push((NoticeKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices.borrow_mut().push((NoticeKind::Error, message.to_string()));
    }
}
