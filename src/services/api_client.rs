// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP con el backend de clima
// ============================================================================
// Sin lógica de negocio. Cada petición lleva un AbortController para poder
// cancelarla cuando se cierra el modal.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use web_sys::AbortController;

use crate::config::CONFIG;
use crate::error::QueryError;
use crate::models::{ApiErrorBody, WeatherResponse, WeatherResult};
use crate::services::traits::WeatherApi;
use crate::utils::constants::WEATHER_ENDPOINT;

/// Cliente del backend de clima
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    pending: Rc<RefCell<Option<AbortController>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn weather_url(&self) -> String {
        format!("{}{}", self.base_url, WEATHER_ENDPOINT)
    }

    /// Nuevo AbortController; aborta el anterior si seguía en vuelo
    fn arm_abort(&self) -> Option<AbortController> {
        let controller = AbortController::new().ok();
        let previous = self.pending.replace(controller.clone());
        if let Some(previous) = previous {
            previous.abort();
        }
        controller
    }

    /// Soltar el controller si sigue siendo el de esta petición
    fn release(&self, controller: &Option<AbortController>) {
        let mut pending = self.pending.borrow_mut();
        if pending.as_ref() == controller.as_ref() {
            *pending = None;
        }
    }
}

impl WeatherApi for ApiClient {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, QueryError> {
        let url = self.weather_url();
        let controller = self.arm_abort();
        let signal = controller.as_ref().map(AbortController::signal);

        log::info!("🌦️ [WEATHER] GET {} (city: {})", url, city);

        let sent = Request::get(&url)
            .query([("city", city)])
            .abort_signal(signal.as_ref())
            .send()
            .await;
        let aborted = signal.as_ref().map(|s| s.aborted()).unwrap_or(false);
        self.release(&controller);

        let response = match sent {
            Ok(response) => response,
            Err(_) if aborted => return Err(QueryError::Stale),
            Err(e) => return Err(QueryError::Network(e.to_string())),
        };

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            log::warn!("⚠️ [WEATHER] HTTP {} para {}: {:?}", status, city, message);
            return Err(QueryError::Http { status, message });
        }

        let body = response
            .json::<WeatherResponse>()
            .await
            .map_err(|e| QueryError::Parse(e.to_string()))?;

        WeatherResult::try_from(body).map_err(QueryError::Parse)
    }

    fn abort_pending(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(controller) = pending {
            log::info!("🛑 [WEATHER] Abortando petición en vuelo");
            controller.abort();
        }
    }
}
