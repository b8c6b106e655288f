// ============================================================================
// ERRORES - Taxonomía de errores del widget
// ============================================================================
// Validación y clima: visibles para el usuario
// Mapa / SDK / incidentes: solo logs, nunca llegan a la UI
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Mensaje genérico cuando el backend no devuelve `error`
pub const GENERIC_WEATHER_ERROR: &str = "Failed to fetch weather data. Please try again.";

/// Mensaje de validación para ciudad vacía
pub const EMPTY_CITY_ERROR: &str = "Please enter a city name";

/// Errores de la consulta de clima
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Please enter a city name")]
    Validation,

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no error body"))]
    Http { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// La respuesta llegó después de cerrar el modal o de una consulta más nueva
    #[error("Stale response discarded")]
    Stale,
}

impl QueryError {
    /// Texto inline que ve el usuario
    pub fn user_message(&self) -> String {
        match self {
            QueryError::Validation => EMPTY_CITY_ERROR.to_string(),
            QueryError::Http { message: Some(message), .. } if !message.is_empty() => message.clone(),
            _ => GENERIC_WEATHER_ERROR.to_string(),
        }
    }
}

/// Errores del mapa (se registran, no se muestran)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("Map is not ready")]
    NotReady,

    #[error("Map container #{0} not found")]
    ContainerMissing(String),

    #[error("Map SDK error: {0}")]
    Sdk(String),

    #[error("Incident query failed: {0}")]
    Incident(String),
}

/// Errores de carga de assets del SDK
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    #[error("No document available")]
    NoDocument,

    #[error("Failed to load {url}: {reason}")]
    AssetLoad { url: String, reason: String },
}

/// Formatear un JsValue de error para logs
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
