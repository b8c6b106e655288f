// ============================================================================
// WEATHER - Modelos del endpoint /api/weather
// ============================================================================

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Cuerpo 200 tal como lo devuelve el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub name: String,
    pub sys: SysInfo,
    pub weather: Vec<WeatherCondition>,
    pub main: MainReadings,
    pub wind: WindInfo,
    pub coord: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysInfo {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
}

/// Cuerpo de error del backend (`{ error: string }`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Resultado de clima ya aplanado. Inmutable: cada consulta exitosa lo reemplaza entero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location_name: String,
    pub country_code: String,
    pub coordinates: Coordinates,
    pub condition_description: String,
    pub icon_id: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
}

impl TryFrom<WeatherResponse> for WeatherResult {
    type Error = String;

    fn try_from(response: WeatherResponse) -> Result<Self, Self::Error> {
        let condition = response
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| "weather array is empty".to_string())?;

        Ok(Self {
            location_name: response.name,
            country_code: response.sys.country,
            coordinates: response.coord,
            condition_description: condition.description,
            icon_id: condition.icon,
            temperature_c: response.main.temp,
            feels_like_c: response.main.feels_like,
            humidity_pct: response.main.humidity,
            wind_speed_mps: response.wind.speed,
            pressure_hpa: response.main.pressure,
        })
    }
}

impl WeatherResult {
    /// Parsear directamente el JSON del backend
    pub fn from_json(body: &str) -> Result<Self, String> {
        let response: WeatherResponse =
            serde_json::from_str(body).map_err(|e| format!("Invalid weather body: {}", e))?;
        Self::try_from(response)
    }
}
