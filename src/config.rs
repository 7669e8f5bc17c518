use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub api_key: Option<String>,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.trabajos.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            api_key: None,
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Tiempo que un toast permanece visible
    pub toast_duration_ms: u32,
    /// Filas mostradas en "Resumen de Actividad Reciente"
    pub recent_rows: usize,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            recent_rows: 5,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .or(option_env!("BACKEND_URL"))
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            api_key: option_env!("API_KEY")
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            ui_config: UIConfig {
                toast_duration_ms: option_env!("TOAST_DURATION_MS")
                    .unwrap_or("3000").parse().unwrap_or(3000),
                recent_rows: defaults.ui_config.recent_rows,
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:3000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.trabajos.example.com");
    }
}
