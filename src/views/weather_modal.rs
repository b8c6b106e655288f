// ============================================================================
// WEATHER MODAL VIEW - Esqueleto del modal (se construye una sola vez)
// ============================================================================
// El modal se muestra/oculta con la clase "show"; así #traffic-map existe
// siempre y es visible antes de crear el mapa.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::dom::{
    get_element_by_id, input_value, on_click, on_enter, on_input, stop_click_propagation,
    ElementBuilder,
};
use crate::utils::constants::{
    CITY_INPUT_ID, MAP_CONTAINER_ID, MAP_LOADING_ID, MODAL_ID, SUBMIT_BUTTON_ID,
    WEATHER_FEEDBACK_ID,
};
use super::weather_panel::ERROR_CLASS;

/// Acciones del usuario dentro del modal
#[derive(Clone)]
pub struct ModalCallbacks {
    pub on_close: Rc<dyn Fn()>,
    pub on_city_input: Rc<dyn Fn(String)>,
    pub on_submit: Rc<dyn Fn(String)>,
    pub on_dismiss_error: Rc<dyn Fn()>,
}

fn current_city() -> String {
    get_element_by_id(CITY_INPUT_ID)
        .and_then(|input| input_value(&input))
        .unwrap_or_default()
}

pub fn render_weather_modal(callbacks: &ModalCallbacks) -> Result<Element, JsValue> {
    // Header
    let close_button = ElementBuilder::new("button")?
        .class("close-button")
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .text("×")
        .build();
    {
        let on_close = callbacks.on_close.clone();
        on_click(&close_button, move |_| on_close())?;
    }
    let header = ElementBuilder::new("div")?
        .class("modal-header")
        .child(ElementBuilder::new("h2")?.text("Weather & Traffic Information").build())?
        .child(close_button)?
        .build();

    // Sección de clima
    let input = ElementBuilder::new("input")?
        .id(CITY_INPUT_ID)?
        .class("city-input")
        .attr("type", "text")?
        .attr("placeholder", "Enter city name...")?
        .build();
    {
        let on_city_input = callbacks.on_city_input.clone();
        let target = input.clone();
        on_input(&input, move |_| on_city_input(input_value(&target).unwrap_or_default()))?;
    }
    {
        let on_submit = callbacks.on_submit.clone();
        on_enter(&input, move || on_submit(current_city()))?;
    }

    let button = ElementBuilder::new("button")?
        .id(SUBMIT_BUTTON_ID)?
        .class("get-weather-button")
        .attr("type", "button")?
        .flag("disabled", true)?
        .text("Get Weather")
        .build();
    {
        let on_submit = callbacks.on_submit.clone();
        on_click(&button, move |_| on_submit(current_city()))?;
    }

    let feedback = ElementBuilder::new("div")?
        .id(WEATHER_FEEDBACK_ID)?
        .class("weather-feedback")
        .build();
    {
        let on_dismiss_error = callbacks.on_dismiss_error.clone();
        on_click(&feedback, move |event: MouseEvent| {
            let clicked_error = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|element| element.class_list().contains(ERROR_CLASS))
                .unwrap_or(false);
            if clicked_error {
                on_dismiss_error();
            }
        })?;
    }

    let weather_section = ElementBuilder::new("div")?
        .class("weather-section")
        .child(ElementBuilder::new("h3")?.text("Weather Information").build())?
        .child(
            ElementBuilder::new("div")?
                .class("weather-input-group")
                .child(input)?
                .child(button)?
                .build(),
        )?
        .child(feedback)?
        .build();

    // Sección de tráfico
    let map_container = ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .class("traffic-map")
        .build();
    let map_loading = ElementBuilder::new("div")?
        .id(MAP_LOADING_ID)?
        .class("map-loading")
        .text("Loading traffic map...")
        .build();
    let traffic_section = ElementBuilder::new("div")?
        .class("traffic-section")
        .child(ElementBuilder::new("h3")?.text("Traffic Map").build())?
        .child(
            ElementBuilder::new("div")?
                .class("traffic-map-container")
                .child(map_container)?
                .child(map_loading)?
                .build(),
        )?
        .build();

    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .attr("role", "dialog")?
        .attr("aria-modal", "true")?
        .child(header)?
        .child(
            ElementBuilder::new("div")?
                .class("modal-body")
                .child(weather_section)?
                .child(traffic_section)?
                .build(),
        )?
        .build();
    stop_click_propagation(&content)?;

    let overlay = ElementBuilder::new("div")?
        .id(MODAL_ID)?
        .class("modal-overlay")
        .child(content)?
        .build();
    {
        let on_close = callbacks.on_close.clone();
        on_click(&overlay, move |_| on_close())?;
    }

    Ok(overlay)
}
