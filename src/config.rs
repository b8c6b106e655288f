use serde::{Deserialize, Serialize};

use crate::models::Coordinates;
use crate::utils::constants::{DEFAULT_BACKEND_URL, FALLBACK_LAT, FALLBACK_LON, MAP_ZOOM};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub tomtom_api_key: String,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            tomtom_api_key: String::new(),
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: FALLBACK_LAT, // Bhopal
            default_center_lng: FALLBACK_LON,
            default_zoom: MAP_ZOOM,
        }
    }
}

impl MapConfig {
    /// Centro usado mientras no hay resultado de clima
    pub fn fallback_center(&self) -> Coordinates {
        Coordinates::new(self.default_center_lat, self.default_center_lng)
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .filter(|url| !url.trim().is_empty())
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            tomtom_api_key: option_env!("TOMTOM_API_KEY")
                .unwrap_or("").to_string(),
            // centro de reserva y zoom fijos, no configurables
            map_config: defaults.map_config,
        }
    }

    /// URL base del backend de clima
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Clave pública de TomTom (tiles, SDK e incidentes)
    pub fn tomtom_key(&self) -> &str {
        &self.tomtom_api_key
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
