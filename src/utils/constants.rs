// ============================================================================
// CONSTANTES - URLs fijas, ids del DOM y parámetros del mapa
// ============================================================================

/// Backend de clima cuando BACKEND_URL no está definida (ver config.rs)
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

// --- TomTom Maps SDK for Web -------------------------------------------------

pub const TOMTOM_SDK_VERSION: &str = "6.25.0";
pub const TOMTOM_MAPS_CSS_URL: &str =
    "https://api.tomtom.com/maps-sdk-for-web/cdn/6.x/6.25.0/maps/maps.css";
pub const TOMTOM_MAPS_JS_URL: &str =
    "https://api.tomtom.com/maps-sdk-for-web/cdn/6.x/6.25.0/maps/maps-web.min.js";
pub const TOMTOM_SERVICES_JS_URL: &str =
    "https://api.tomtom.com/maps-sdk-for-web/cdn/6.x/6.25.0/services/services-web.min.js";

/// Global que expone el SDK una vez cargado
pub const TOMTOM_GLOBAL: &str = "tt";

// --- Tráfico -----------------------------------------------------------------

pub const TRAFFIC_FLOW_TILE_URL: &str =
    "https://api.tomtom.com/traffic/map/4/tile/flow/absolute/{z}/{x}/{y}.pbf";
pub const TRAFFIC_SOURCE_ID: &str = "traffic-flow";
pub const TRAFFIC_LAYER_ID: &str = "traffic-flow-layer";
pub const TRAFFIC_SOURCE_LAYER: &str = "Traffic flow";
/// Campo del vector tile con la severidad discreta
pub const TRAFFIC_LEVEL_FIELD: &str = "traffic_level";

pub const INCIDENT_DETAILS_URL: &str =
    "https://api.tomtom.com/traffic/services/5/incidentDetails";
pub const INCIDENT_FIELDS: &str = "{incidents{type,geometry{type,coordinates},properties{iconCategory,magnitudeOfDelay,events{description,code,iconCategory}}}}";
/// ±grados alrededor del centro para la consulta de incidentes
pub const INCIDENT_BBOX_DELTA: f64 = 0.1;
pub const INCIDENT_MARKER_COLOR: &str = "#ff0000";
pub const INCIDENT_POPUP_OFFSET: u32 = 35;
pub const INCIDENT_POPUP_TITLE: &str = "Traffic Incident";

// --- Mapa --------------------------------------------------------------------

pub const MAP_CONTAINER_ID: &str = "traffic-map";
pub const MAP_STYLE: &str = "main";
pub const MAP_ZOOM: f64 = 12.0;
pub const FALLBACK_LAT: f64 = 23.2599;
pub const FALLBACK_LON: f64 = 77.4126;

// --- Clima -------------------------------------------------------------------

pub const WEATHER_ENDPOINT: &str = "/api/weather";
pub const WEATHER_ICON_URL_PREFIX: &str = "https://openweathermap.org/img/wn/";

/// URL del icono de OpenWeatherMap para un id (`10d` → `.../10d@2x.png`)
pub fn weather_icon_url(icon_id: &str) -> String {
    format!("{}{}@2x.png", WEATHER_ICON_URL_PREFIX, icon_id)
}

// --- DOM ---------------------------------------------------------------------

pub const APP_ROOT_ID: &str = "app";
pub const MODAL_ID: &str = "weather-modal";
pub const CITY_INPUT_ID: &str = "city-input";
pub const SUBMIT_BUTTON_ID: &str = "get-weather-button";
pub const WEATHER_FEEDBACK_ID: &str = "weather-feedback";
pub const MAP_LOADING_ID: &str = "map-loading";
