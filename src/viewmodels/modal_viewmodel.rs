// ============================================================================
// MODAL VIEWMODEL - Orquesta clima, SDK y mapa según el ciclo de vida del modal
// ============================================================================
// open  → mostrar, cargar SDK si falta, sincronizar mapa
// close → ocultar, abandonar la consulta en vuelo, destruir el mapa
// Una consulta ya resuelta (éxito o error) vuelve a sincronizar el mapa.
// ============================================================================

use std::rc::Rc;

use crate::error::QueryError;
use crate::maps::MapBackend;
use crate::services::{IncidentApi, SdkEnvironment, WeatherApi};
use crate::state::AppState;
use crate::utils::spawn::{spawn_with, Spawner};
use crate::viewmodels::{BootstrapOutcome, BootstrapViewModel, MapViewModel, SyncOutcome, WeatherViewModel};

pub struct ModalViewModel<W, E, B, I>
where
    W: WeatherApi,
    E: SdkEnvironment,
    B: MapBackend,
    I: IncidentApi,
{
    state: AppState,
    weather: WeatherViewModel<W>,
    bootstrap: BootstrapViewModel<E>,
    map: MapViewModel<B, I>,
    spawner: Spawner,
}

impl<W, E, B, I> ModalViewModel<W, E, B, I>
where
    W: WeatherApi + 'static,
    E: SdkEnvironment + 'static,
    B: MapBackend + 'static,
    I: IncidentApi + 'static,
{
    pub fn new(
        state: AppState,
        weather: WeatherViewModel<W>,
        bootstrap: BootstrapViewModel<E>,
        map: MapViewModel<B, I>,
        spawner: Spawner,
    ) -> Rc<Self> {
        Rc::new(Self {
            state,
            weather,
            bootstrap,
            map,
            spawner,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn open(self: &Rc<Self>) {
        if !self.state.modal.update(|modal| modal.show()) {
            log::debug!("🪟 [MODAL] Ya estaba abierto");
            return;
        }
        log::info!("🪟 [MODAL] Abierto");

        if self.bootstrap.adopt_present_sdk() {
            self.sync_map();
            return;
        }

        let this = self.clone();
        spawn_with(&self.spawner, async move {
            let outcome = this.bootstrap.ensure_sdk_loaded().await;
            if outcome.is_ready() {
                this.sync_map();
            } else if let BootstrapOutcome::Failed(error) = outcome {
                log::warn!("⚠️ [MODAL] Mapa no disponible: {}", error);
            }
        });
    }

    pub fn close(&self) {
        if !self.state.modal.update(|modal| modal.hide()) {
            return;
        }
        log::info!("🪟 [MODAL] Cerrado");
        self.weather.abandon_in_flight();
        self.map.dispose();
    }

    pub fn set_city_text(&self, text: &str) {
        self.weather.set_city_text(text);
    }

    pub fn dismiss_error(&self) {
        self.weather.dismiss_error();
    }

    /// Enviar la consulta; al resolverse se sincroniza el mapa
    pub fn submit(self: &Rc<Self>, city_text: &str) {
        let this = self.clone();
        let city_text = city_text.to_string();
        spawn_with(&self.spawner, async move {
            match this.weather.submit_query(&city_text).await {
                Ok(_) => {
                    this.refresh_map();
                }
                Err(QueryError::Validation) | Err(QueryError::Stale) => {}
                Err(_) => {
                    this.sync_map();
                }
            }
        });
    }

    /// Sincronizar el mapa con el estado actual; solo con la consulta resuelta
    pub fn sync_map(&self) -> Option<SyncOutcome> {
        self.settled_sync(false)
    }

    /// Cada resultado nuevo reconstruye el mapa y sus capas, aunque sea la misma ciudad
    pub fn refresh_map(&self) -> Option<SyncOutcome> {
        self.settled_sync(true)
    }

    fn settled_sync(&self, force: bool) -> Option<SyncOutcome> {
        if self.state.query.with(|query| query.is_loading) {
            log::debug!("⏳ [MAP] Consulta en curso, sync pospuesto");
            return None;
        }
        let result = self.state.weather_result();
        let ready = self.state.is_map_ready();
        let visible = self.state.is_modal_visible();
        let outcome = if force {
            self.map.refresh(ready, visible, result.as_ref())
        } else {
            self.map.sync(ready, visible, result.as_ref())
        };
        log::debug!("🗺️ [MAP] sync (force: {}): {:?}", force, outcome);
        Some(outcome)
    }
}
