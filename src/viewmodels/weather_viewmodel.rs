// ============================================================================
// WEATHER VIEWMODEL - Consulta de clima por ciudad
// ============================================================================
// Única pieza que muta QueryState. Cada consulta obtiene un ticket; una
// respuesta cuyo ticket ya no es el vigente se descarta sin tocar el estado.
// ============================================================================

use crate::error::QueryError;
use crate::models::WeatherResult;
use crate::services::WeatherApi;
use crate::state::{QueryState, ReactiveState};
use crate::utils::constants::weather_icon_url;
use crate::utils::format::{capitalize_words, format_temperature};

pub struct WeatherViewModel<W: WeatherApi> {
    query: ReactiveState<QueryState>,
    api: W,
}

impl<W: WeatherApi> WeatherViewModel<W> {
    pub fn new(query: ReactiveState<QueryState>, api: W) -> Self {
        Self { query, api }
    }

    /// Texto del input (no valida, no limpia errores)
    pub fn set_city_text(&self, text: &str) {
        self.query.update(|q| q.city_text = text.to_string());
    }

    pub fn dismiss_error(&self) {
        self.query.update(QueryState::dismiss_error);
    }

    /// Validar, consultar y guardar el resultado o el error
    pub async fn submit_query(&self, city_text: &str) -> Result<WeatherResult, QueryError> {
        let city = city_text.trim().to_string();
        self.query.update(|q| q.city_text = city_text.to_string());

        if city.is_empty() {
            log::warn!("⚠️ [WEATHER] Ciudad vacía, no se consulta");
            self.query.update(|q| q.reject_input(QueryError::Validation.user_message()));
            return Err(QueryError::Validation);
        }

        let ticket = self.query.update(QueryState::begin_request);
        log::info!("🔍 [WEATHER] Consultando '{}' (ticket {})", city, ticket);

        match self.api.fetch_weather(&city).await {
            Ok(result) => {
                if self.query.update(|q| q.complete(ticket, result.clone())) {
                    log::info!(
                        "✅ [WEATHER] {}, {}: {}°C",
                        result.location_name, result.country_code, result.temperature_c
                    );
                    Ok(result)
                } else {
                    log::debug!("🗑️ [WEATHER] Respuesta descartada (ticket {})", ticket);
                    Err(QueryError::Stale)
                }
            }
            Err(QueryError::Stale) => {
                log::debug!("🗑️ [WEATHER] Petición abortada (ticket {})", ticket);
                Err(QueryError::Stale)
            }
            Err(error) => {
                if self.query.update(|q| q.fail(ticket, error.user_message())) {
                    log::error!("❌ [WEATHER] {}", error);
                    Err(error)
                } else {
                    log::debug!("🗑️ [WEATHER] Error descartado (ticket {}): {}", ticket, error);
                    Err(QueryError::Stale)
                }
            }
        }
    }

    /// Cierre del modal: invalidar el ticket y abortar el fetch
    pub fn abandon_in_flight(&self) {
        if self.query.update(QueryState::abandon) {
            log::info!("🛑 [WEATHER] Consulta en vuelo abandonada");
            self.api.abort_pending();
        }
    }
}

/// Vista derivada del resultado, ya formateada para el panel
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDisplay {
    pub header: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub condition: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
}

impl From<&WeatherResult> for WeatherDisplay {
    fn from(result: &WeatherResult) -> Self {
        Self {
            header: format!("{}, {}", result.location_name, result.country_code),
            icon_url: weather_icon_url(&result.icon_id),
            icon_alt: result.condition_description.clone(),
            condition: capitalize_words(&result.condition_description),
            temperature: format_temperature(result.temperature_c),
            feels_like: format_temperature(result.feels_like_c),
            humidity: format!("{}%", result.humidity_pct),
            wind_speed: format!("{} m/s", result.wind_speed_mps),
            pressure: format!("{} hPa", result.pressure_hpa),
        }
    }
}

/// Caption del botón de envío
pub fn submit_caption(query: &QueryState) -> &'static str {
    if query.is_loading {
        "Loading..."
    } else {
        "Get Weather"
    }
}
