// ============================================================================
// INCIDENT - Respuesta de TomTom Traffic incidentDetails (v5)
// ============================================================================

use serde::Deserialize;

use super::Coordinates;

/// Texto del popup cuando el incidente no trae descripción
pub const DEFAULT_INCIDENT_DESCRIPTION: &str = "Traffic incident reported";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentResponse {
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Incident {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub geometry: Option<IncidentGeometry>,
    #[serde(default)]
    pub properties: IncidentProperties,
}

/// Geometría GeoJSON; `coordinates` depende del tipo, se resuelve a mano
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentProperties {
    #[serde(default)]
    pub icon_category: Option<i64>,
    #[serde(default)]
    pub magnitude_of_delay: Option<i64>,
    #[serde(default)]
    pub events: Vec<IncidentEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentEvent {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub icon_category: Option<i64>,
}

impl IncidentGeometry {
    /// Primer punto de la geometría: el propio punto o el inicio de la línea
    pub fn first_position(&self) -> Option<Coordinates> {
        let pair = match self.kind.as_str() {
            "Point" => self.coordinates.clone(),
            "LineString" => self.coordinates.as_array()?.first()?.clone(),
            _ => return None,
        };
        serde_json::from_value::<[f64; 2]>(pair)
            .ok()
            .map(Coordinates::from_lng_lat)
    }
}

impl Incident {
    /// Posición del marcador, si la geometría es resoluble
    pub fn marker_position(&self) -> Option<Coordinates> {
        self.geometry.as_ref()?.first_position()
    }

    /// Descripción del primer evento o el texto genérico
    pub fn description(&self) -> &str {
        self.properties
            .events
            .first()
            .and_then(|event| event.description.as_deref())
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(DEFAULT_INCIDENT_DESCRIPTION)
    }
}
