// Traits de los colaboradores externos (HTTP y entorno del SDK).
// Las implementaciones web usan gloo-net / web-sys; los tests usan fakes.

use crate::error::{MapError, QueryError, SdkError};
use crate::models::{BoundingBox, Incident, WeatherResult};

/// Backend de clima
#[allow(async_fn_in_trait)]
pub trait WeatherApi {
    /// GET /api/weather?city=...
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, QueryError>;

    /// Abortar la petición en vuelo, si hay una
    fn abort_pending(&self) {}
}

/// Consulta de incidentes de tráfico
#[allow(async_fn_in_trait)]
pub trait IncidentApi {
    async fn fetch_incidents(&self, bbox: &BoundingBox) -> Result<Vec<Incident>, MapError>;
}

/// Capacidad de cargar el SDK de mapas en la página
#[allow(async_fn_in_trait)]
pub trait SdkEnvironment {
    /// ¿El SDK ya está disponible globalmente?
    fn sdk_present(&self) -> bool;

    /// Inyectar una hoja de estilos (no se espera su carga)
    fn inject_stylesheet(&self, href: &str) -> Result<(), SdkError>;

    /// Inyectar un script y esperar su evento `load`
    async fn load_script(&self, src: &str) -> Result<(), SdkError>;
}
