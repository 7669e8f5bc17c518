// ============================================================================
// STORES - Caché local de trabajos y catálogos, inyectada en la UI
// ============================================================================

pub mod loading;
pub mod filter;
pub mod trabajo_store;
pub mod catalogo_store;

pub use loading::LoadingGuard;
pub use filter::apply_filters;
pub use trabajo_store::TrabajoStore;
pub use catalogo_store::{CatalogList, CatalogoStore};
