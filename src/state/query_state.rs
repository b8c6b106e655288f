// ============================================================================
// QUERY STATE - Estado de la consulta de clima
// ============================================================================
// Solo lo muta WeatherViewModel. `request_seq` identifica la petición en vuelo:
// una respuesta con ticket viejo se descarta.
// ============================================================================

use crate::models::WeatherResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub city_text: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub weather_result: Option<WeatherResult>,
    pub request_seq: u64,
}

impl QueryState {
    pub fn trimmed_city(&self) -> &str {
        self.city_text.trim()
    }

    /// El botón se habilita solo con texto y sin petición en vuelo
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.trimmed_city().is_empty()
    }

    /// Empezar una petición: limpia error y resultado, devuelve el ticket
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.is_loading = true;
        self.error_message = None;
        self.weather_result = None;
        self.request_seq
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.is_loading && self.request_seq == ticket
    }

    /// Guardar resultado si el ticket sigue vigente
    pub fn complete(&mut self, ticket: u64, result: WeatherResult) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        self.weather_result = Some(result);
        true
    }

    /// Guardar error si el ticket sigue vigente
    pub fn fail(&mut self, ticket: u64, message: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        self.weather_result = None;
        self.error_message = Some(message);
        true
    }

    /// Error de validación: no toca el resultado anterior
    pub fn reject_input(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Invalidar la petición en vuelo (cierre del modal)
    pub fn abandon(&mut self) -> bool {
        if !self.is_loading {
            return false;
        }
        self.request_seq += 1;
        self.is_loading = false;
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::fixtures::london;

    #[test]
    fn test_begin_request_clears_previous_outcome() {
        let mut state = QueryState {
            city_text: "Paris".into(),
            error_message: Some("old".into()),
            weather_result: Some(london()),
            ..Default::default()
        };
        let ticket = state.begin_request();
        assert_eq!(ticket, 1);
        assert!(state.is_loading);
        assert!(state.error_message.is_none());
        assert!(state.weather_result.is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut state = QueryState::default();
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(!state.complete(first, london()));
        assert!(state.weather_result.is_none());
        assert!(state.complete(second, london()));
        assert_eq!(state.weather_result, Some(london()));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_abandon_invalidates_in_flight_ticket() {
        let mut state = QueryState::default();
        let ticket = state.begin_request();
        assert!(state.abandon());
        assert!(!state.is_loading);
        assert!(!state.fail(ticket, "late".into()));
        assert!(state.error_message.is_none());
        assert!(!state.abandon());
    }

    #[test]
    fn test_can_submit_ignores_whitespace() {
        let mut state = QueryState { city_text: "   ".into(), ..Default::default() };
        assert!(!state.can_submit());
        state.city_text = "  Oslo ".into();
        assert!(state.can_submit());
        assert_eq!(state.trimmed_city(), "Oslo");
    }
}
