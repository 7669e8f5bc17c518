use crate::models::Trabajo;

/// Ordena por estado para visualización (Pendiente, Terminado, Cancelado).
/// Orden estable: dentro de un mismo estado se conserva el orden original.
pub fn sort_by_status(trabajos: &[Trabajo]) -> Vec<Trabajo> {
    let mut sorted = trabajos.to_vec();
    sorted.sort_by_key(|t| t.estado.sort_rank());
    sorted
}
