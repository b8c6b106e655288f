// Módulo de mapas: trait común + implementación TomTom para web

pub mod traits;
pub mod traffic;
pub mod web;

pub use traits::{IncidentMarker, MapBackend, MapOptions};
pub use traffic::{TrafficFlowLayer, TrafficSeverity};
pub use web::TomTomBackend;
