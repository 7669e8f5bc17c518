use crate::models::{FilterCriteria, Trabajo};

/// Subconjunto visible de `all` según `criteria`.
///
/// - `tipo_pa`, `periodo`, `proveedor`: igualdad exacta (sensible a mayúsculas)
/// - `busqueda`: subcadena sin distinguir mayúsculas en cliente o curso
/// - `fecha_inicio` / `fecha_fin`: cotas inclusivas sobre `fecha_registro`
///   (comparación lexicográfica, fechas en `YYYY-MM-DD`)
///
/// Los criterios vacíos no filtran; el resto se combina con AND y se conserva
/// el orden de entrada.
pub fn apply_filters(all: &[Trabajo], criteria: &FilterCriteria) -> Vec<Trabajo> {
    let busqueda = criteria.busqueda.to_lowercase();

    all.iter()
        .filter(|t| criteria.tipo_pa.is_empty() || t.tipo_pa.as_str() == criteria.tipo_pa)
        .filter(|t| criteria.periodo.is_empty() || t.periodo == criteria.periodo)
        .filter(|t| criteria.proveedor.is_empty() || t.proveedor == criteria.proveedor)
        .filter(|t| {
            busqueda.is_empty()
                || t.nombre_cliente.to_lowercase().contains(&busqueda)
                || t.curso.to_lowercase().contains(&busqueda)
        })
        .filter(|t| criteria.fecha_inicio.is_empty() || t.fecha_registro.as_str() >= criteria.fecha_inicio.as_str())
        .filter(|t| criteria.fecha_fin.is_empty() || t.fecha_registro.as_str() <= criteria.fecha_fin.as_str())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstadoTrabajo, TipoPA};
    use crate::testing::trabajo;

    fn sample() -> Vec<Trabajo> {
        let mut a = trabajo("1", "2024-I", EstadoTrabajo::Pendiente);
        a.curso = "Matemáticas".to_string();
        a.fecha_registro = "2024-03-10".to_string();

        let mut b = trabajo("2", "2024-II", EstadoTrabajo::Terminado);
        b.nombre_cliente = "María Pérez".to_string();
        b.proveedor = "Carla".to_string();
        b.tipo_pa = TipoPA::Ef;
        b.fecha_registro = "2024-08-01".to_string();

        let mut c = trabajo("3", "2024-I", EstadoTrabajo::Cancelado);
        c.proveedor = "carla".to_string();
        c.fecha_registro = "2024-03-11".to_string();

        vec![a, b, c]
    }

    fn ids(trabajos: &[Trabajo]) -> Vec<&str> {
        trabajos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_input_unchanged() {
        let all = sample();
        assert_eq!(apply_filters(&all, &FilterCriteria::default()), all);
    }

    #[test]
    fn period_filter_is_sound_and_complete() {
        let all = sample();
        let criteria = FilterCriteria {
            periodo: "2024-I".to_string(),
            ..Default::default()
        };

        let result = apply_filters(&all, &criteria);
        assert!(result.iter().all(|t| t.periodo == "2024-I"));
        assert_eq!(result.len(), all.iter().filter(|t| t.periodo == "2024-I").count());
        assert_eq!(ids(&result), ["1", "3"]);
    }

    #[test]
    fn period_scenario_returns_first_element_only() {
        let all = vec![
            trabajo("a", "2024-I", EstadoTrabajo::Pendiente),
            trabajo("b", "2024-II", EstadoTrabajo::Terminado),
        ];
        let criteria = FilterCriteria {
            periodo: "2024-I".to_string(),
            ..Default::default()
        };

        assert_eq!(apply_filters(&all, &criteria), vec![all[0].clone()]);
    }

    #[test]
    fn search_is_case_insensitive_on_cliente_or_curso() {
        let all = sample();
        let by_curso = FilterCriteria {
            busqueda: "mat".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &by_curso)), ["1"]);

        let by_cliente = FilterCriteria {
            busqueda: "PÉREZ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &by_cliente)), ["2"]);
    }

    #[test]
    fn provider_match_is_exact() {
        let all = sample();
        let criteria = FilterCriteria {
            proveedor: "Carla".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &criteria)), ["2"]);
    }

    #[test]
    fn date_range_is_inclusive() {
        let all = sample();
        let same_day = FilterCriteria {
            fecha_inicio: "2024-03-10".to_string(),
            fecha_fin: "2024-03-10".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &same_day)), ["1"]);

        let from_only = FilterCriteria {
            fecha_inicio: "2024-03-11".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &from_only)), ["2", "3"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let all = sample();
        let criteria = FilterCriteria {
            periodo: "2024-I".to_string(),
            tipo_pa: "EF".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&all, &criteria).is_empty());
    }
}
