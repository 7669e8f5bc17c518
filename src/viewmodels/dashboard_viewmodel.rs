use crate::config::CONFIG;
use crate::models::DashboardStats;
use crate::stores::TrabajoStore;
use crate::utils::{mes_actual, MONEDA};

/// Dashboard: agregados sobre la lista completa, sin filtros
#[derive(Clone)]
pub struct DashboardViewModel {
    store: TrabajoStore,
}

impl DashboardViewModel {
    pub fn new(store: TrabajoStore) -> Self {
        Self { store }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_trabajos(&self.store.trabajos(), CONFIG.ui_config.recent_rows)
    }

    /// "Ingresos (marzo)"
    pub fn ingresos_title(month: u32) -> String {
        format!("Ingresos ({})", mes_actual(month))
    }

    /// "S/ 50", "S/ 35.5"
    pub fn ingresos_label(stats: &DashboardStats) -> String {
        format!("{} {}", MONEDA, stats.ingresos)
    }
}
