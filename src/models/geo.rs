use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordenadas geográficas (formato del backend: `coord: {lat, lon}`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Orden `[lng, lat]` que espera el SDK de TomTom
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Desde un par `[lng, lat]` de GeoJSON
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self { lat: pair[1], lon: pair[0] }
    }

    /// Caja de ±delta grados alrededor del punto
    pub fn bounding_box(&self, delta: f64) -> BoundingBox {
        BoundingBox {
            min_lon: self.lon - delta,
            min_lat: self.lat - delta,
            max_lon: self.lon + delta,
            max_lat: self.lat + delta,
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Bounding box en grados
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: &Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lon..=self.max_lon).contains(&point.lon)
    }
}

/// Formato `minLon,minLat,maxLon,maxLat` del parámetro `bbox`
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.min_lon, self.min_lat, self.max_lon, self.max_lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_order_is_lon_first() {
        let bbox = Coordinates::new(10.0, 20.0).bounding_box(0.5);
        assert_eq!(bbox.to_string(), "19.5,9.5,20.5,10.5");
    }

    #[test]
    fn test_bounding_box_contains_center() {
        let london = Coordinates::new(51.5, -0.12);
        let bbox = london.bounding_box(0.1);
        assert!(bbox.contains(&london));
        assert!(!bbox.contains(&Coordinates::new(51.7, -0.12)));
    }

    #[test]
    fn test_lng_lat_roundtrip_order() {
        let point = Coordinates::from_lng_lat([77.4126, 23.2599]);
        assert_eq!(point.lat, 23.2599);
        assert_eq!(point.lng_lat(), [77.4126, 23.2599]);
    }
}
