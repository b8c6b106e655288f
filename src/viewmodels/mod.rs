// ============================================================================
// VIEWMODELS - Lógica de negocio, sin DOM
// ============================================================================

pub mod weather_viewmodel;
pub mod bootstrap_viewmodel;
pub mod map_viewmodel;
pub mod modal_viewmodel;

#[cfg(test)]
pub(crate) mod test_support;

pub use weather_viewmodel::{submit_caption, WeatherDisplay, WeatherViewModel};
pub use bootstrap_viewmodel::{BootstrapOutcome, BootstrapViewModel};
pub use map_viewmodel::{MapSettings, MapViewModel, SyncOutcome};
pub use modal_viewmodel::ModalViewModel;
