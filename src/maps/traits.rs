use crate::error::MapError;
use crate::models::Coordinates;
use super::traffic::TrafficFlowLayer;

/// Opciones de construcción de un mapa
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub container_id: String,
    pub api_key: String,
    pub center: Coordinates,
    pub zoom: f64,
    pub style: String,
}

/// Marcador de incidente con su popup
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentMarker {
    pub position: Coordinates,
    pub title: String,
    pub description: String,
    pub color: String,
    pub popup_offset: u32,
}

/// Backend común para renderizadores de mapas (TomTom en web, fakes en tests)
pub trait MapBackend {
    /// Handle opaco de una instancia viva
    type Handle: Clone + 'static;

    /// Construir un mapa nuevo en el contenedor
    fn create_map(&self, options: &MapOptions) -> Result<Self::Handle, MapError>;

    /// Controles de navegación y pantalla completa
    fn add_controls(&self, map: &Self::Handle) -> Result<(), MapError>;

    /// Registrar el callback de un solo uso que se dispara cuando el mapa terminó de cargar
    fn on_load(&self, map: &Self::Handle, callback: Box<dyn FnOnce()>);

    /// Fuente vectorial + capa de flujo de tráfico
    fn add_traffic_flow(&self, map: &Self::Handle, layer: &TrafficFlowLayer) -> Result<(), MapError>;

    fn add_incident_marker(&self, map: &Self::Handle, marker: &IncidentMarker) -> Result<(), MapError>;

    /// Destruir la instancia
    fn remove(&self, map: &Self::Handle);
}
