// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::forms::FormValues;
use crate::models::{Curso, Periodo, Proveedor, Trabajo};
use crate::services::{ApiClient, AuthService, Notifier, RestRepository, ToastNotifier};
use crate::state::AuthState;
use crate::stores::{CatalogoStore, TrabajoStore};
use crate::viewmodels::{
    AuthViewModel, CatalogoKind, CatalogoViewModel, DashboardViewModel, TrabajosViewModel,
};

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (login/logout, cambio de página, diálogos, datos)
    FullRender,
}

#[derive(Clone, Debug)]
pub enum IncrementalUpdate {
    /// Filas de la tabla de trabajos tras un cambio de filtro
    TrabajoRows,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Dashboard,
    Trabajos,
}

/// Diálogo de catálogo abierto y elemento en edición (si hay)
#[derive(Clone, PartialEq, Debug)]
pub struct CatalogoDialog {
    pub kind: CatalogoKind,
    pub editing: Option<String>,
}

/// Diálogo de trabajo: `editing = None` es alta
#[derive(Clone, PartialEq, Debug)]
pub struct TrabajoDialog {
    pub editing: Option<String>,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub api: ApiClient,
    pub trabajos: TrabajoStore,
    pub catalogos: CatalogoStore,
    pub notifier: Rc<dyn Notifier>,

    // UI State
    pub page: Rc<RefCell<Page>>,
    pub trabajo_dialog: Rc<RefCell<Option<TrabajoDialog>>>,
    pub catalogo_dialog: Rc<RefCell<Option<CatalogoDialog>>>,
    /// Errores por campo del diálogo abierto
    pub form_errors: Rc<RefCell<Option<AppError>>>,
    /// Valores enviados por última vez, para no perderlos al re-renderizar
    pub draft: Rc<RefCell<Option<FormValues>>>,
    /// Error inline del formulario de login
    pub login_error: Rc<RefCell<Option<String>>>,
}

impl AppState {
    pub fn new() -> Self {
        let auth = AuthState::new();
        let api = ApiClient::new(auth.token.clone());

        let trabajos = TrabajoStore::new(Rc::new(RestRepository::<Trabajo>::new(api.clone())));
        let catalogos = CatalogoStore::new(
            Rc::new(RestRepository::<Curso>::new(api.clone())),
            Rc::new(RestRepository::<Proveedor>::new(api.clone())),
            Rc::new(RestRepository::<Periodo>::new(api.clone())),
        );

        Self {
            auth,
            api,
            trabajos,
            catalogos,
            notifier: Rc::new(ToastNotifier::new(CONFIG.ui_config.toast_duration_ms)),
            page: Rc::new(RefCell::new(Page::Dashboard)),
            trabajo_dialog: Rc::new(RefCell::new(None)),
            catalogo_dialog: Rc::new(RefCell::new(None)),
            form_errors: Rc::new(RefCell::new(None)),
            draft: Rc::new(RefCell::new(None)),
            login_error: Rc::new(RefCell::new(None)),
        }
    }

    // ========================================================================
    // ViewModels (clones baratos de stores y servicios)
    // ========================================================================

    pub fn trabajos_vm(&self) -> TrabajosViewModel {
        TrabajosViewModel::new(self.trabajos.clone(), self.notifier.clone())
    }

    pub fn catalogo_vm(&self) -> CatalogoViewModel {
        CatalogoViewModel::new(self.catalogos.clone(), self.notifier.clone())
    }

    pub fn auth_vm(&self) -> AuthViewModel {
        AuthViewModel::new(self.auth.clone(), AuthService::new(self.api.clone()))
    }

    pub fn dashboard_vm(&self) -> DashboardViewModel {
        DashboardViewModel::new(self.trabajos.clone())
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub fn current_page(&self) -> Page {
        *self.page.borrow()
    }

    pub fn set_page(&self, page: Page) {
        *self.page.borrow_mut() = page;
        crate::rerender_app();
    }

    fn clear_form(&self) {
        *self.form_errors.borrow_mut() = None;
        *self.draft.borrow_mut() = None;
    }

    pub fn open_trabajo_dialog(&self, editing: Option<String>) {
        self.clear_form();
        *self.trabajo_dialog.borrow_mut() = Some(TrabajoDialog { editing });
        crate::rerender_app();
    }

    pub fn close_trabajo_dialog(&self) {
        self.clear_form();
        *self.trabajo_dialog.borrow_mut() = None;
        crate::rerender_app();
    }

    pub fn open_catalogo_dialog(&self, kind: CatalogoKind, editing: Option<String>) {
        self.clear_form();
        *self.catalogo_dialog.borrow_mut() = Some(CatalogoDialog { kind, editing });
        crate::rerender_app();
    }

    pub fn close_catalogo_dialog(&self) {
        self.clear_form();
        *self.catalogo_dialog.borrow_mut() = None;
        crate::rerender_app();
    }

    /// Errores de validación junto con los valores que los produjeron
    pub fn set_form_errors(&self, errors: AppError, values: FormValues) {
        *self.form_errors.borrow_mut() = Some(errors);
        *self.draft.borrow_mut() = Some(values);
        crate::rerender_app();
    }

    /// Borrador pendiente o, si no hay, los valores iniciales dados
    pub fn draft_or(&self, initial: FormValues) -> FormValues {
        self.draft.borrow().clone().unwrap_or(initial)
    }

    pub fn set_login_error(&self, message: Option<String>) {
        if message.is_none() {
            self.clear_form();
        }
        *self.login_error.borrow_mut() = message;
        crate::rerender_app();
    }

    /// Mensaje de validación del campo en el diálogo abierto
    pub fn field_error(&self, field: &str) -> Option<&'static str> {
        self.form_errors
            .borrow()
            .as_ref()
            .and_then(|e| e.field_message(field))
    }

    /// Cambio de filtro: recalcula la vista y refresca solo las filas
    pub fn change_filter(&self, field: &str, value: &str) {
        self.trabajos_vm().change_filter(field, value);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::TrabajoRows));
    }

    pub fn reset_filters(&self) {
        self.trabajos_vm().reset_filters();
        crate::rerender_app();
    }

    /// Logout: limpia sesión, diálogos y vuelve al dashboard
    pub fn logout(&self) {
        self.auth_vm().logout();
        *self.trabajo_dialog.borrow_mut() = None;
        *self.catalogo_dialog.borrow_mut() = None;
        self.clear_form();
        *self.login_error.borrow_mut() = None;
        *self.page.borrow_mut() = Page::Dashboard;
        crate::rerender_app();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
