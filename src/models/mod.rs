pub mod geo;
pub mod weather;
pub mod incident;

pub use geo::{BoundingBox, Coordinates};
pub use weather::{ApiErrorBody, WeatherResponse, WeatherResult};
pub use incident::{Incident, IncidentResponse, DEFAULT_INCIDENT_DESCRIPTION};
