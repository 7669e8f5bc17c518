pub mod entity;
pub mod trabajo;
pub mod catalogo;
pub mod filters;
pub mod auth;
pub mod dashboard;

pub use entity::{Entity, CatalogEntity};
pub use trabajo::{Trabajo, TrabajoInput, TrabajoPatch, TipoPA, TipoTrabajo, EstadoTrabajo};
pub use catalogo::{Curso, CursoInput, Periodo, PeriodoInput, Proveedor, ProveedorInput};
pub use filters::FilterCriteria;
pub use auth::{LoginRequest, LoginResponse, Session, UserInfo};
pub use dashboard::DashboardStats;
