/// Clave de la sesión en localStorage / sessionStorage
pub const SESSION_STORAGE_KEY: &str = "trabajos_session";

/// Texto mostrado cuando un trabajo aún no tiene fecha de entrega
pub const FECHA_POR_DEFINIR: &str = "Por definir";

/// Valores por defecto del formulario de trabajo
pub const DEFAULT_NOMBRE_CLIENTE: &str = "Estudiante";
pub const DEFAULT_PRECIO: &str = "20";

/// Símbolo de moneda (soles)
pub const MONEDA: &str = "S/";
