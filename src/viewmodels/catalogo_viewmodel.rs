// ============================================================================
// CATALOGO VIEWMODEL - Diálogos de cursos, proveedores y periodos
// ============================================================================

use std::rc::Rc;

use crate::forms::{parse_curso, parse_periodo, parse_proveedor, FormValues};
use crate::models::CatalogEntity;
use crate::services::Notifier;
use crate::stores::{CatalogList, CatalogoStore};
use crate::viewmodels::SubmitOutcome;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatalogoKind {
    Cursos,
    Proveedores,
    Periodos,
}

impl CatalogoKind {
    pub const ALL: [CatalogoKind; 3] = [Self::Cursos, Self::Proveedores, Self::Periodos];

    /// Título del botón y del diálogo
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Cursos => "Cursos",
            Self::Proveedores => "Proveedores",
            Self::Periodos => "Periodos",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Cursos => "Curso",
            Self::Proveedores => "Proveedor",
            Self::Periodos => "Periodo",
        }
    }
}

#[derive(Clone)]
pub struct CatalogoViewModel {
    store: CatalogoStore,
    notifier: Rc<dyn Notifier>,
}

impl CatalogoViewModel {
    pub fn new(store: CatalogoStore, notifier: Rc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &CatalogoStore {
        &self.store
    }

    pub async fn load(&self) -> bool {
        match self.store.fetch_all().await {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ [CATALOGO] Error cargando catálogos: {}", e);
                self.notifier.error("Error al cargar los catálogos");
                false
            }
        }
    }

    /// Alta o edición de un elemento de catálogo
    pub async fn submit(
        &self,
        kind: CatalogoKind,
        editing: Option<&str>,
        values: &FormValues,
    ) -> SubmitOutcome {
        match kind {
            CatalogoKind::Cursos => match parse_curso(values) {
                Ok(input) => self.save(&self.store.cursos, editing, input, kind).await,
                Err(e) => SubmitOutcome::Invalid(e),
            },
            CatalogoKind::Proveedores => match parse_proveedor(values) {
                Ok(input) => self.save(&self.store.proveedores, editing, input, kind).await,
                Err(e) => SubmitOutcome::Invalid(e),
            },
            CatalogoKind::Periodos => match parse_periodo(values) {
                Ok(input) => self.save(&self.store.periodos, editing, input, kind).await,
                Err(e) => SubmitOutcome::Invalid(e),
            },
        }
    }

    async fn save<E: CatalogEntity>(
        &self,
        list: &CatalogList<E>,
        editing: Option<&str>,
        input: E::Input,
        kind: CatalogoKind,
    ) -> SubmitOutcome {
        let result = match editing {
            Some(id) => list.update(id, E::patch_from_input(input)).await,
            None => list.add(input).await,
        };

        let (hecho, accion) = match editing {
            Some(_) => ("actualizado", "actualizar"),
            None => ("agregado", "agregar"),
        };

        match result {
            Ok(_) => {
                self.notifier
                    .success(&format!("{} {} correctamente", kind.singular(), hecho));
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::error!("❌ [CATALOGO] Error guardando {}: {}", E::LABEL, e);
                self.notifier.error(&format!("Error al {} {}", accion, E::LABEL));
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::forms::{form_values, nombre_values};
    use crate::models::{Curso, Periodo, Proveedor};
    use crate::testing::{MockRepository, RecordingNotifier};
    use futures::executor::block_on;

    struct Fixture {
        vm: CatalogoViewModel,
        periodos: Rc<MockRepository<Periodo>>,
        notifier: Rc<RecordingNotifier>,
    }

    fn setup() -> Fixture {
        let periodos = Rc::new(MockRepository::new(vec![Periodo {
            id: "1".to_string(),
            nombre: "2024-I".to_string(),
        }]));
        let notifier = Rc::new(RecordingNotifier::default());
        let store = CatalogoStore::new(
            Rc::new(MockRepository::<Curso>::new(Vec::new())),
            Rc::new(MockRepository::<Proveedor>::new(Vec::new())),
            periodos.clone(),
        );
        let vm = CatalogoViewModel::new(store, notifier.clone());
        assert!(block_on(vm.load()));
        Fixture { vm, periodos, notifier }
    }

    #[test]
    fn messages_per_catalog() {
        let f = setup();

        let outcome = block_on(f.vm.submit(CatalogoKind::Cursos, None, &nombre_values("Física")));
        assert!(outcome.is_saved());
        let outcome = block_on(f.vm.submit(
            CatalogoKind::Proveedores,
            None,
            &form_values([("nombre", "Luis"), ("celular", "987654321")]),
        ));
        assert!(outcome.is_saved());
        let outcome = block_on(f.vm.submit(CatalogoKind::Periodos, Some("1"), &nombre_values("2024-II")));
        assert!(outcome.is_saved());

        assert_eq!(
            f.notifier.successes(),
            vec![
                "Curso agregado correctamente",
                "Proveedor agregado correctamente",
                "Periodo actualizado correctamente",
            ]
        );
        assert_eq!(f.vm.store().periodos.nombres(), vec!["2024-II"]);
    }

    #[test]
    fn backend_failure_uses_lowercase_label() {
        let f = setup();
        f.periodos.fail_next(AppError::Transport("500".to_string()));

        let outcome = block_on(f.vm.submit(CatalogoKind::Periodos, Some("1"), &nombre_values("2024-II")));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(f.notifier.errors(), vec!["Error al actualizar periodo"]);
        assert_eq!(f.vm.store().periodos.nombres(), vec!["2024-I"]);
    }

    #[test]
    fn invalid_celular_stays_in_form() {
        let f = setup();
        let outcome = block_on(f.vm.submit(
            CatalogoKind::Proveedores,
            None,
            &form_values([("nombre", "Luis"), ("celular", "12")]),
        ));
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(f.notifier.notices.borrow().is_empty());
        assert!(f.vm.store().proveedores.items().is_empty());
    }
}
