use serde::{Deserialize, Serialize};

/// Criterios del filtro de trabajos. Cadena vacía = sin filtrar.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct FilterCriteria {
    pub tipo_pa: String,
    pub periodo: String,
    pub proveedor: String,
    pub busqueda: String,
    pub fecha_inicio: String, // YYYY-MM-DD
    pub fecha_fin: String,    // YYYY-MM-DD
}

impl FilterCriteria {
    /// Nombres de los campos tal como aparecen en el formulario de filtros
    pub const FIELDS: [&'static str; 6] = [
        "tipoPA",
        "periodo",
        "proveedor",
        "busqueda",
        "fechaInicio",
        "fechaFin",
    ];

    /// Actualiza un criterio por nombre de campo. Devuelve false si el campo no existe.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "tipoPA" => &mut self.tipo_pa,
            "periodo" => &mut self.periodo,
            "proveedor" => &mut self.proveedor,
            "busqueda" => &mut self.busqueda,
            "fechaInicio" => &mut self.fecha_inicio,
            "fechaFin" => &mut self.fecha_fin,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    pub fn get(&self, field: &str) -> &str {
        match field {
            "tipoPA" => &self.tipo_pa,
            "periodo" => &self.periodo,
            "proveedor" => &self.proveedor,
            "busqueda" => &self.busqueda,
            "fechaInicio" => &self.fecha_inicio,
            "fechaFin" => &self.fecha_fin,
            _ => "",
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Self::FIELDS.iter().all(|f| self.get(f).is_empty())
    }
}
