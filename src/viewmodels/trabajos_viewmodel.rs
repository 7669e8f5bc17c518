// ============================================================================
// TRABAJOS VIEWMODEL
// ============================================================================

use std::rc::Rc;

use crate::forms::{parse_trabajo, FormValues};
use crate::models::{EstadoTrabajo, TrabajoPatch};
use crate::services::Notifier;
use crate::stores::TrabajoStore;
use crate::viewmodels::SubmitOutcome;

#[derive(Clone)]
pub struct TrabajosViewModel {
    store: TrabajoStore,
    notifier: Rc<dyn Notifier>,
}

impl TrabajosViewModel {
    pub fn new(store: TrabajoStore, notifier: Rc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &TrabajoStore {
        &self.store
    }

    /// Carga la lista completa
    pub async fn load(&self) -> bool {
        match self.store.fetch_all().await {
            Ok(_) => true,
            Err(e) => {
                log::error!("❌ [TRABAJOS] Error cargando trabajos: {}", e);
                self.notifier.error("Error al cargar los trabajos");
                false
            }
        }
    }

    /// Alta (`editing = None`) o edición completa de un trabajo
    pub async fn submit(&self, editing: Option<&str>, values: &FormValues) -> SubmitOutcome {
        let input = match parse_trabajo(values) {
            Ok(input) => input,
            Err(e) => return SubmitOutcome::Invalid(e),
        };

        let result = match editing {
            Some(id) => self
                .store
                .update(id, TrabajoPatch::from(input))
                .await
                .map(|_| "Trabajo actualizado correctamente"),
            None => self
                .store
                .add(input)
                .await
                .map(|_| "Trabajo agregado correctamente"),
        };

        match result {
            Ok(message) => {
                self.notifier.success(message);
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::error!("❌ [TRABAJOS] Error guardando trabajo: {}", e);
                self.notifier.error(if editing.is_some() {
                    "Error al actualizar trabajo"
                } else {
                    "Error al agregar trabajo"
                });
                SubmitOutcome::Failed
            }
        }
    }

    /// Botón Enviar/Devolver de la tabla
    pub async fn toggle_status(&self, id: &str) -> Option<EstadoTrabajo> {
        match self.store.toggle_status(id).await {
            Ok(nuevo) => {
                self.notifier.success(&format!("Estado actualizado a: {}", nuevo));
                Some(nuevo)
            }
            Err(e) => {
                log::error!("❌ [TRABAJOS] Error cambiando estado de {}: {}", id, e);
                self.notifier.error("Error al actualizar el estado");
                None
            }
        }
    }

    /// Elimina tras la confirmación de la vista
    pub async fn delete(&self, id: &str) -> bool {
        match self.store.remove(id).await {
            Ok(()) => {
                self.notifier.success("Trabajo eliminado correctamente");
                true
            }
            Err(e) => {
                log::error!("❌ [TRABAJOS] Error eliminando {}: {}", id, e);
                self.notifier.error("Error al eliminar el trabajo");
                false
            }
        }
    }

    pub fn change_filter(&self, field: &str, value: &str) {
        self.store.set_filter(field, value);
    }

    pub fn reset_filters(&self) {
        self.store.reset_filters();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::forms::trabajo_values;
    use crate::models::Trabajo;
    use crate::testing::{trabajo, MockRepository, RecordingNotifier};
    use futures::executor::block_on;

    fn setup(items: Vec<Trabajo>) -> (TrabajosViewModel, Rc<MockRepository<Trabajo>>, Rc<RecordingNotifier>) {
        let repo = Rc::new(MockRepository::new(items));
        let notifier = Rc::new(RecordingNotifier::default());
        let vm = TrabajosViewModel::new(TrabajoStore::new(repo.clone()), notifier.clone());
        assert!(block_on(vm.load()));
        (vm, repo, notifier)
    }

    fn valid_values() -> FormValues {
        trabajo_values(&trabajo("x", "2024-I", EstadoTrabajo::Pendiente))
    }

    #[test]
    fn failed_add_notifies_once_and_keeps_list() {
        let (vm, repo, notifier) = setup(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);
        repo.fail_next(AppError::Transport("timeout".to_string()));

        let outcome = block_on(vm.submit(None, &valid_values()));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(vm.store().len(), 1);
        assert_eq!(notifier.errors(), vec!["Error al agregar trabajo"]);
        assert!(notifier.successes().is_empty());
    }

    #[test]
    fn invalid_form_never_reaches_store() {
        let (vm, repo, notifier) = setup(Vec::new());
        let mut values = valid_values();
        values.insert("precio".into(), "-1".into());

        let outcome = block_on(vm.submit(None, &values));

        match outcome {
            SubmitOutcome::Invalid(e) => {
                assert_eq!(e.field_message("precio"), Some("El precio debe ser positivo"))
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(vm.store().is_empty());
        assert!(notifier.notices.borrow().is_empty());
        assert_eq!(repo.list_calls(), 1);
    }

    #[test]
    fn add_and_edit_messages() {
        let (vm, _, notifier) = setup(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);

        assert!(block_on(vm.submit(None, &valid_values())).is_saved());
        let mut values = valid_values();
        values.insert("curso".into(), "Química".into());
        assert!(block_on(vm.submit(Some("1"), &values)).is_saved());

        assert_eq!(vm.store().get("1").unwrap().curso, "Química");
        assert_eq!(
            notifier.successes(),
            vec!["Trabajo agregado correctamente", "Trabajo actualizado correctamente"]
        );
    }

    #[test]
    fn toggle_notifies_new_estado() {
        let (vm, _, notifier) = setup(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);

        assert_eq!(block_on(vm.toggle_status("1")), Some(EstadoTrabajo::Terminado));
        assert_eq!(block_on(vm.toggle_status("1")), Some(EstadoTrabajo::Pendiente));
        assert_eq!(block_on(vm.toggle_status("404")), None);

        assert_eq!(
            notifier.successes(),
            vec!["Estado actualizado a: Terminado", "Estado actualizado a: Pendiente"]
        );
        assert_eq!(notifier.errors(), vec!["Error al actualizar el estado"]);
    }

    #[test]
    fn delete_missing_record_reports_error() {
        let (vm, repo, notifier) = setup(vec![trabajo("1", "2024-I", EstadoTrabajo::Pendiente)]);
        repo.remove_remote("1");

        assert!(!block_on(vm.delete("1")));
        assert_eq!(vm.store().len(), 1);
        assert_eq!(notifier.errors(), vec!["Error al eliminar el trabajo"]);
    }
}
