// ============================================================================
// INCIDENT SERVICE - TomTom Traffic incidentDetails
// ============================================================================

use gloo_net::http::Request;

use crate::error::MapError;
use crate::models::{BoundingBox, Incident, IncidentResponse};
use crate::services::traits::IncidentApi;
use crate::utils::constants::{INCIDENT_DETAILS_URL, INCIDENT_FIELDS};

#[derive(Debug, Clone)]
pub struct IncidentClient {
    api_key: String,
}

impl IncidentClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }
}

/// Parámetros de la consulta: key, bbox y selector de campos
pub fn incident_query_params(api_key: &str, bbox: &BoundingBox) -> Vec<(&'static str, String)> {
    vec![
        ("key", api_key.to_string()),
        ("bbox", bbox.to_string()),
        ("fields", INCIDENT_FIELDS.to_string()),
    ]
}

impl IncidentApi for IncidentClient {
    async fn fetch_incidents(&self, bbox: &BoundingBox) -> Result<Vec<Incident>, MapError> {
        log::info!("🚧 [MAP] Consultando incidentes en bbox {}", bbox);

        let params = incident_query_params(&self.api_key, bbox);
        let response = Request::get(INCIDENT_DETAILS_URL)
            .query(params.iter().map(|(name, value)| (*name, value.as_str())))
            .send()
            .await
            .map_err(|e| MapError::Incident(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(MapError::Incident(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .json::<IncidentResponse>()
            .await
            .map_err(|e| MapError::Incident(format!("Parse error: {}", e)))?;

        log::info!("✅ [MAP] {} incidentes recibidos", body.incidents.len());
        Ok(body.incidents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn test_query_params_cover_bbox_and_fields() {
        let bbox = Coordinates::new(51.5, -0.12).bounding_box(0.1);
        let params = incident_query_params("secret", &bbox);
        assert_eq!(params[0], ("key", "secret".to_string()));
        assert_eq!(params[1].0, "bbox");
        assert_eq!(params[1].1, bbox.to_string());
        assert!(params[2].1.contains("geometry{type,coordinates}"));
        assert!(params[2].1.contains("events{description"));
    }
}
