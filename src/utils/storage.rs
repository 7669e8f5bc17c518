use web_sys::{window, Storage};
use serde::{Serialize, de::DeserializeOwned};

/// Dónde persiste un valor: localStorage sobrevive al cierre del navegador,
/// sessionStorage solo a la pestaña actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Local,
    Session,
}

pub fn get_storage(kind: StorageKind) -> Option<Storage> {
    let win = window()?;
    match kind {
        StorageKind::Local => win.local_storage().ok()?,
        StorageKind::Session => win.session_storage().ok()?,
    }
}

pub fn save_to_storage<T: Serialize>(kind: StorageKind, key: &str, value: &T) -> Result<(), String> {
    let storage = get_storage(kind).ok_or("No se pudo acceder al storage del navegador")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en storage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(kind: StorageKind, key: &str) -> Option<T> {
    let storage = get_storage(kind)?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(kind: StorageKind, key: &str) -> Result<(), String> {
    let storage = get_storage(kind).ok_or("No se pudo acceder al storage del navegador")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando del storage".to_string())?;
    Ok(())
}
