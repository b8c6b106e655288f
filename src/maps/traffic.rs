// ============================================================================
// TRAFFIC FLOW - Fuente vectorial y capa de flujo de tráfico
// ============================================================================

use serde_json::{json, Value};

use crate::utils::constants::{
    TRAFFIC_FLOW_TILE_URL, TRAFFIC_LAYER_ID, TRAFFIC_LEVEL_FIELD, TRAFFIC_SOURCE_ID,
    TRAFFIC_SOURCE_LAYER,
};

/// Bandas de severidad del campo `traffic_level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficSeverity {
    FreeFlow,
    Light,
    Moderate,
    Heavy,
    Severe,
}

impl TrafficSeverity {
    /// Bandas con nivel explícito en el tile (Severe es el resto)
    pub const LEVELED: [TrafficSeverity; 4] = [
        TrafficSeverity::FreeFlow,
        TrafficSeverity::Light,
        TrafficSeverity::Moderate,
        TrafficSeverity::Heavy,
    ];

    pub fn from_level(level: i64) -> Self {
        match level {
            0 => TrafficSeverity::FreeFlow,
            1 => TrafficSeverity::Light,
            2 => TrafficSeverity::Moderate,
            3 => TrafficSeverity::Heavy,
            _ => TrafficSeverity::Severe,
        }
    }

    pub fn level(&self) -> Option<i64> {
        match self {
            TrafficSeverity::FreeFlow => Some(0),
            TrafficSeverity::Light => Some(1),
            TrafficSeverity::Moderate => Some(2),
            TrafficSeverity::Heavy => Some(3),
            TrafficSeverity::Severe => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TrafficSeverity::FreeFlow => "#00ff00",
            TrafficSeverity::Light => "#ffff00",
            TrafficSeverity::Moderate => "#ff8000",
            TrafficSeverity::Heavy => "#ff0000",
            TrafficSeverity::Severe => "#800080",
        }
    }
}

/// Definición de la capa de flujo para una API key
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficFlowLayer {
    pub source_id: String,
    pub layer_id: String,
    pub source_layer: String,
    pub tile_url: String,
}

impl TrafficFlowLayer {
    pub fn for_api_key(api_key: &str) -> Self {
        Self {
            source_id: TRAFFIC_SOURCE_ID.to_string(),
            layer_id: TRAFFIC_LAYER_ID.to_string(),
            source_layer: TRAFFIC_SOURCE_LAYER.to_string(),
            tile_url: format!("{}?key={}", TRAFFIC_FLOW_TILE_URL, api_key),
        }
    }

    /// Argumento de `map.addSource(id, source)`
    pub fn source_spec(&self) -> Value {
        json!({
            "type": "vector",
            "url": self.tile_url,
        })
    }

    /// Argumento de `map.addLayer(layer)`
    pub fn layer_spec(&self) -> Value {
        json!({
            "id": self.layer_id,
            "type": "line",
            "source": self.source_id,
            "source-layer": self.source_layer,
            "paint": {
                "line-color": line_color_expression(),
                "line-width": 3,
                "line-opacity": 0.8,
            },
        })
    }
}

/// Expresión `case` que colorea cada tramo según su banda
pub fn line_color_expression() -> Value {
    let mut expression = vec![json!("case")];
    for severity in TrafficSeverity::LEVELED {
        if let Some(level) = severity.level() {
            expression.push(json!(["==", ["get", TRAFFIC_LEVEL_FIELD], level]));
            expression.push(json!(severity.color()));
        }
    }
    expression.push(json!(TrafficSeverity::Severe.color()));
    Value::Array(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_bands() {
        assert_eq!(TrafficSeverity::from_level(0).color(), "#00ff00");
        assert_eq!(TrafficSeverity::from_level(3).color(), "#ff0000");
        assert_eq!(TrafficSeverity::from_level(4), TrafficSeverity::Severe);
        assert_eq!(TrafficSeverity::from_level(-1).color(), "#800080");
    }

    #[test]
    fn test_line_color_expression_shape() {
        let expr = line_color_expression();
        let items = expr.as_array().expect("array expression");
        // "case" + 4 pares (condición, color) + color por defecto
        assert_eq!(items.len(), 10);
        assert_eq!(items[0], json!("case"));
        assert_eq!(items[1], json!(["==", ["get", "traffic_level"], 0]));
        assert_eq!(items[2], json!("#00ff00"));
        assert_eq!(items[9], json!("#800080"));
    }

    #[test]
    fn test_tile_url_carries_key() {
        let layer = TrafficFlowLayer::for_api_key("abc123");
        assert_eq!(
            layer.source_spec()["url"],
            json!("https://api.tomtom.com/traffic/map/4/tile/flow/absolute/{z}/{x}/{y}.pbf?key=abc123")
        );
        let spec = layer.layer_spec();
        assert_eq!(spec["source-layer"], json!("Traffic flow"));
        assert_eq!(spec["source"], json!("traffic-flow"));
        assert_eq!(spec["paint"]["line-width"], json!(3));
    }
}
