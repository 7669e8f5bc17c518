use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{empty_as_none, id_as_string, Entity};

/// Tipo de evaluación (PA = producto académico)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum TipoPA {
    #[serde(rename = "PA-01")]
    Pa01,
    #[serde(rename = "PA-02")]
    Pa02,
    #[serde(rename = "PA-03")]
    Pa03,
    #[serde(rename = "EF")]
    Ef,
    #[serde(rename = "ES")]
    Es,
}

impl TipoPA {
    pub const ALL: [TipoPA; 5] = [Self::Pa01, Self::Pa02, Self::Pa03, Self::Ef, Self::Es];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pa01 => "PA-01",
            Self::Pa02 => "PA-02",
            Self::Pa03 => "PA-03",
            Self::Ef => "EF",
            Self::Es => "ES",
        }
    }
}

impl FromStr for TipoPA {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Tipo de PA desconocido: {}", s))
    }
}

impl fmt::Display for TipoPA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum TipoTrabajo {
    #[serde(rename = "Trabajo Individual")]
    Individual,
    #[serde(rename = "Trabajo Grupal")]
    Grupal,
}

impl TipoTrabajo {
    pub const ALL: [TipoTrabajo; 2] = [Self::Individual, Self::Grupal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "Trabajo Individual",
            Self::Grupal => "Trabajo Grupal",
        }
    }
}

impl FromStr for TipoTrabajo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Tipo de trabajo desconocido: {}", s))
    }
}

impl fmt::Display for TipoTrabajo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estado del trabajo. Cada punto de presentación hace match exhaustivo,
/// así que agregar un estado nuevo no compila hasta cubrirlo en todos.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum EstadoTrabajo {
    Pendiente,
    Cancelado,
    Terminado,
}

impl EstadoTrabajo {
    pub const ALL: [EstadoTrabajo; 3] = [Self::Pendiente, Self::Cancelado, Self::Terminado];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Cancelado => "Cancelado",
            Self::Terminado => "Terminado",
        }
    }

    /// Clases del badge de estado
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Pendiente => "badge badge-pendiente",
            Self::Cancelado => "badge badge-cancelado",
            Self::Terminado => "badge badge-terminado",
        }
    }

    /// Borde izquierdo de la fila en la tabla de trabajos
    pub fn row_class(&self) -> &'static str {
        match self {
            Self::Pendiente => "row-pendiente",
            Self::Cancelado => "row-cancelado",
            Self::Terminado => "row-terminado",
        }
    }

    /// Texto del botón que dispara el toggle
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Pendiente | Self::Cancelado => "Enviar",
            Self::Terminado => "Devolver",
        }
    }

    /// Orden de visualización: Pendiente < Terminado < Cancelado
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::Pendiente => 1,
            Self::Terminado => 2,
            Self::Cancelado => 3,
        }
    }

    /// Estado destino del toggle. Nunca produce `Cancelado`.
    pub fn toggled(&self) -> EstadoTrabajo {
        match self {
            Self::Terminado => Self::Pendiente,
            Self::Pendiente | Self::Cancelado => Self::Terminado,
        }
    }
}

impl FromStr for EstadoTrabajo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("Estado desconocido: {}", s))
    }
}

impl fmt::Display for EstadoTrabajo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Trabajo {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub nombre_cliente: String,
    pub proveedor: String,
    pub curso: String,
    #[serde(rename = "tipoPA")]
    pub tipo_pa: TipoPA,
    pub tipo_trabajo: TipoTrabajo,
    pub fecha_registro: String, // YYYY-MM-DD
    // Solo presente cuando estado == Terminado
    #[serde(default, deserialize_with = "empty_as_none")]
    pub fecha_entrega: Option<String>,
    pub periodo: String,
    pub precio: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub url: Option<String>,
    pub estado: EstadoTrabajo,
}

/// Payload de creación (y de edición completa desde el formulario)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoInput {
    pub nombre_cliente: String,
    pub proveedor: String,
    pub curso: String,
    #[serde(rename = "tipoPA")]
    pub tipo_pa: TipoPA,
    pub tipo_trabajo: TipoTrabajo,
    pub fecha_registro: String,
    pub fecha_entrega: Option<String>,
    pub periodo: String,
    pub precio: f64,
    pub url: Option<String>,
    pub estado: EstadoTrabajo,
}

impl From<&Trabajo> for TrabajoInput {
    fn from(t: &Trabajo) -> Self {
        Self {
            nombre_cliente: t.nombre_cliente.clone(),
            proveedor: t.proveedor.clone(),
            curso: t.curso.clone(),
            tipo_pa: t.tipo_pa,
            tipo_trabajo: t.tipo_trabajo,
            fecha_registro: t.fecha_registro.clone(),
            fecha_entrega: t.fecha_entrega.clone(),
            periodo: t.periodo.clone(),
            precio: t.precio,
            url: t.url.clone(),
            estado: t.estado,
        }
    }
}

/// Actualización parcial. `fecha_entrega: Some(None)` se envía como `null`
/// para limpiar la fecha en el backend.
#[derive(Clone, Default, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_cliente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curso: Option<String>,
    #[serde(rename = "tipoPA", skip_serializing_if = "Option::is_none")]
    pub tipo_pa: Option<TipoPA>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_trabajo: Option<TipoTrabajo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_entrega: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoTrabajo>,
}

impl TrabajoPatch {
    /// Patch de cambio de estado (usado por el toggle)
    pub fn estado(estado: EstadoTrabajo, fecha_entrega: Option<String>) -> Self {
        Self {
            estado: Some(estado),
            fecha_entrega: Some(fecha_entrega),
            ..Self::default()
        }
    }
}

impl From<TrabajoInput> for TrabajoPatch {
    fn from(input: TrabajoInput) -> Self {
        Self {
            nombre_cliente: Some(input.nombre_cliente),
            proveedor: Some(input.proveedor),
            curso: Some(input.curso),
            tipo_pa: Some(input.tipo_pa),
            tipo_trabajo: Some(input.tipo_trabajo),
            fecha_registro: Some(input.fecha_registro),
            fecha_entrega: Some(input.fecha_entrega),
            periodo: Some(input.periodo),
            precio: Some(input.precio),
            url: Some(input.url),
            estado: Some(input.estado),
        }
    }
}

impl Entity for Trabajo {
    type Input = TrabajoInput;
    type Patch = TrabajoPatch;

    const RESOURCE: &'static str = "trabajos";
    const LABEL: &'static str = "trabajo";

    fn id(&self) -> &str {
        &self.id
    }

    fn patch_from_input(input: TrabajoInput) -> TrabajoPatch {
        input.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_never_targets_cancelado() {
        assert_eq!(EstadoTrabajo::Pendiente.toggled(), EstadoTrabajo::Terminado);
        assert_eq!(EstadoTrabajo::Cancelado.toggled(), EstadoTrabajo::Terminado);
        assert_eq!(EstadoTrabajo::Terminado.toggled(), EstadoTrabajo::Pendiente);
    }

    #[test]
    fn action_labels_follow_estado() {
        assert_eq!(EstadoTrabajo::Pendiente.action_label(), "Enviar");
        assert_eq!(EstadoTrabajo::Cancelado.action_label(), "Enviar");
        assert_eq!(EstadoTrabajo::Terminado.action_label(), "Devolver");
    }

    #[test]
    fn deserializes_backend_json() {
        let json = r#"{
            "id": 7,
            "nombreCliente": "Ana",
            "proveedor": "Luis",
            "curso": "Matemáticas",
            "tipoPA": "PA-02",
            "tipoTrabajo": "Trabajo Grupal",
            "fechaRegistro": "2024-03-10",
            "fechaEntrega": "",
            "periodo": "2024-I",
            "precio": 35.5,
            "url": "",
            "estado": "Pendiente"
        }"#;
        let trabajo: Trabajo = serde_json::from_str(json).unwrap();
        assert_eq!(trabajo.id, "7");
        assert_eq!(trabajo.tipo_pa, TipoPA::Pa02);
        assert_eq!(trabajo.tipo_trabajo, TipoTrabajo::Grupal);
        assert_eq!(trabajo.fecha_entrega, None);
        assert_eq!(trabajo.url, None);
    }

    #[test]
    fn estado_patch_sends_null_to_clear_fecha() {
        let patch = TrabajoPatch::estado(EstadoTrabajo::Pendiente, None);
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "estado": "Pendiente", "fechaEntrega": null }));
    }

    #[test]
    fn parses_enums_from_form_values() {
        assert_eq!("EF".parse::<TipoPA>(), Ok(TipoPA::Ef));
        assert!("PA-04".parse::<TipoPA>().is_err());
        assert_eq!("Trabajo Individual".parse::<TipoTrabajo>(), Ok(TipoTrabajo::Individual));
        assert_eq!("Terminado".parse::<EstadoTrabajo>(), Ok(EstadoTrabajo::Terminado));
    }
}
