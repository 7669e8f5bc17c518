use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Entidad persistida en el backend (trabajos y catálogos)
pub trait Entity: Clone + DeserializeOwned + 'static {
    /// Payload de creación
    type Input: Serialize + Clone;
    /// Payload de actualización parcial
    type Patch: Serialize + Clone;

    /// Segmento de URL del recurso (`/trabajos`, `/cursos`, ...)
    const RESOURCE: &'static str;
    /// Nombre singular para mensajes y errores
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Patch equivalente a una edición completa desde el formulario
    fn patch_from_input(input: Self::Input) -> Self::Patch;
}

/// Entidades de catálogo: se muestran por nombre en los selects
pub trait CatalogEntity: Entity {
    fn nombre(&self) -> &str;
}

/// Acepta ids numéricos o string del backend
pub(crate) fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// `""` y `null` se tratan igual: campo sin definir
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
