use super::trabajo::{EstadoTrabajo, TipoPA, Trabajo};

/// Agregados del dashboard, calculados sobre la lista completa (sin filtros)
#[derive(Clone, PartialEq, Debug)]
pub struct DashboardStats {
    pub total: usize,
    pub completados: usize,
    pub pendientes: usize,
    pub cancelados: usize,
    /// Suma de precios de trabajos terminados (S/)
    pub ingresos: f64,
    pub por_estado: Vec<(EstadoTrabajo, usize)>,
    pub por_tipo_pa: Vec<(TipoPA, usize)>,
    pub recientes: Vec<Trabajo>,
}

impl DashboardStats {
    pub fn from_trabajos(trabajos: &[Trabajo], recent_rows: usize) -> Self {
        let count = |estado: EstadoTrabajo| trabajos.iter().filter(|t| t.estado == estado).count();

        let ingresos = trabajos
            .iter()
            .filter(|t| t.estado == EstadoTrabajo::Terminado)
            .map(|t| t.precio)
            .sum();

        let por_estado = EstadoTrabajo::ALL
            .into_iter()
            .map(|estado| (estado, count(estado)))
            .collect();

        let por_tipo_pa = TipoPA::ALL
            .into_iter()
            .map(|tipo| (tipo, trabajos.iter().filter(|t| t.tipo_pa == tipo).count()))
            .collect();

        Self {
            total: trabajos.len(),
            completados: count(EstadoTrabajo::Terminado),
            pendientes: count(EstadoTrabajo::Pendiente),
            cancelados: count(EstadoTrabajo::Cancelado),
            ingresos,
            por_estado,
            por_tipo_pa,
            recientes: trabajos.iter().take(recent_rows).cloned().collect(),
        }
    }

    /// Mayor valor de `por_tipo_pa`, para escalar las barras del gráfico
    pub fn max_por_tipo_pa(&self) -> usize {
        self.por_tipo_pa.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trabajo::TipoTrabajo;

    fn trabajo(id: &str, estado: EstadoTrabajo, tipo_pa: TipoPA, precio: f64) -> Trabajo {
        Trabajo {
            id: id.to_string(),
            nombre_cliente: "Estudiante".to_string(),
            proveedor: "Luis".to_string(),
            curso: "Física".to_string(),
            tipo_pa,
            tipo_trabajo: TipoTrabajo::Individual,
            fecha_registro: "2024-03-01".to_string(),
            fecha_entrega: None,
            periodo: "2024-I".to_string(),
            precio,
            url: None,
            estado,
        }
    }

    #[test]
    fn revenue_counts_only_terminados() {
        let trabajos = vec![
            trabajo("1", EstadoTrabajo::Terminado, TipoPA::Pa01, 20.0),
            trabajo("2", EstadoTrabajo::Pendiente, TipoPA::Pa01, 50.0),
            trabajo("3", EstadoTrabajo::Terminado, TipoPA::Ef, 30.0),
            trabajo("4", EstadoTrabajo::Cancelado, TipoPA::Es, 10.0),
        ];

        let stats = DashboardStats::from_trabajos(&trabajos, 5);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completados, 2);
        assert_eq!(stats.pendientes, 1);
        assert_eq!(stats.cancelados, 1);
        assert_eq!(stats.ingresos, 50.0);
        assert_eq!(stats.por_tipo_pa[0], (TipoPA::Pa01, 2));
        assert_eq!(stats.max_por_tipo_pa(), 2);
        assert_eq!(stats.recientes.len(), 4);
    }

    #[test]
    fn recent_rows_are_capped() {
        let trabajos: Vec<Trabajo> = (0..8)
            .map(|i| trabajo(&i.to_string(), EstadoTrabajo::Pendiente, TipoPA::Pa02, 20.0))
            .collect();

        let stats = DashboardStats::from_trabajos(&trabajos, 5);
        assert_eq!(stats.recientes.len(), 5);
        assert_eq!(stats.recientes[0].id, "0");
    }
}
