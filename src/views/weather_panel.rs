// ============================================================================
// WEATHER PANEL VIEW - Error inline + detalle del clima
// ============================================================================
// Se vuelve a generar dentro de #weather-feedback en cada cambio de QueryState.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::QueryState;
use crate::viewmodels::WeatherDisplay;

pub const ERROR_CLASS: &str = "error-message";

/// Contenido de #weather-feedback para el estado actual
pub fn render_weather_feedback(query: &QueryState) -> Result<Vec<Element>, JsValue> {
    let mut nodes = Vec::new();
    if let Some(message) = &query.error_message {
        nodes.push(
            ElementBuilder::new("div")?
                .class(ERROR_CLASS)
                .attr("role", "alert")?
                .attr("title", "Click to dismiss")?
                .text(message)
                .build(),
        );
    }
    if let Some(result) = &query.weather_result {
        nodes.push(render_weather_display(&WeatherDisplay::from(result))?);
    }
    Ok(nodes)
}

fn render_weather_display(display: &WeatherDisplay) -> Result<Element, JsValue> {
    let icon = ElementBuilder::new("img")?
        .attr("src", &display.icon_url)?
        .attr("alt", &display.icon_alt)?
        .build();
    let header = ElementBuilder::new("div")?
        .class("weather-header")
        .child(ElementBuilder::new("h4")?.text(&display.header).build())?
        .child(ElementBuilder::new("div")?.class("weather-icon").child(icon)?.build())?
        .build();

    let rows = [
        ("Condition:", &display.condition),
        ("Temperature:", &display.temperature),
        ("Feels like:", &display.feels_like),
        ("Humidity:", &display.humidity),
        ("Wind Speed:", &display.wind_speed),
        ("Pressure:", &display.pressure),
    ];
    let mut details = ElementBuilder::new("div")?.class("weather-details");
    for (label, value) in rows {
        details = details.child(weather_item(label, value)?)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("weather-display")
        .child(header)?
        .child(details.build())?
        .build())
}

fn weather_item(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("weather-item")
        .child(ElementBuilder::new("span")?.class("weather-label").text(label).build())?
        .child(ElementBuilder::new("span")?.class("weather-value").text(value).build())?
        .build())
}
