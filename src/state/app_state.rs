// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::models::WeatherResult;
use crate::state::{MapReadiness, ModalState, QueryState, ReactiveState};

/// Parte del DOM que hay que actualizar cuando cambia el estado
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Clase "show" del modal
    ModalVisibility,
    /// Input, botón, error y resultado del clima
    WeatherPanel,
    /// Indicador "Loading traffic map..."
    MapLoading,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub modal: ReactiveState<ModalState>,
    pub query: ReactiveState<QueryState>,
    pub readiness: ReactiveState<MapReadiness>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            modal: ReactiveState::new(ModalState::default()),
            query: ReactiveState::new(QueryState::default()),
            readiness: ReactiveState::new(MapReadiness::default()),
        }
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal.with(|modal| modal.visible)
    }

    pub fn is_map_ready(&self) -> bool {
        self.readiness.with(MapReadiness::is_ready)
    }

    pub fn weather_result(&self) -> Option<WeatherResult> {
        self.query.with(|query| query.weather_result.clone())
    }

    /// Suscribirse a cambios de estado: cada estado reactivo se traduce a su actualización incremental
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(IncrementalUpdate) + Clone + 'static,
    {
        let on_modal = callback.clone();
        self.modal.subscribe(move || on_modal(IncrementalUpdate::ModalVisibility));

        let on_query = callback.clone();
        self.query.subscribe(move || on_query(IncrementalUpdate::WeatherPanel));

        self.readiness.subscribe(move || callback(IncrementalUpdate::MapLoading));
    }
}
