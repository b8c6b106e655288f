// Servicios: HTTP (clima, incidentes) y carga del SDK de mapas

pub mod traits;
pub mod api_client;
pub mod incident_service;
pub mod sdk_loader;

pub use traits::*;
pub use api_client::ApiClient;
pub use incident_service::{incident_query_params, IncidentClient};
pub use sdk_loader::DomSdkEnvironment;
