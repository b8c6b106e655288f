// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM (estilo vanilla JS)
// ============================================================================
// Solo actualiza los nodos afectados por cada IncrementalUpdate; el esqueleto
// del modal nunca se vuelve a construir.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::{
    append_child, clear_children, focus, get_element_by_id, require_element, set_flag_attribute,
    set_text_content, toggle_class,
};
use crate::error::describe_js;
use crate::state::{AppState, IncrementalUpdate, QueryState};
use crate::utils::constants::{
    CITY_INPUT_ID, MAP_LOADING_ID, MODAL_ID, SUBMIT_BUTTON_ID, WEATHER_FEEDBACK_ID,
};
use crate::viewmodels::submit_caption;
use crate::views::render_weather_feedback;

/// Aplicar una actualización incremental
pub fn apply_update(state: &AppState, update: IncrementalUpdate) -> Result<(), JsValue> {
    match update {
        IncrementalUpdate::ModalVisibility => update_modal_visibility(state.is_modal_visible()),
        IncrementalUpdate::WeatherPanel => state.query.with(update_weather_panel),
        IncrementalUpdate::MapLoading => update_map_loading(state.is_map_ready()),
    }
}

/// Aplicar todas (primer render)
pub fn apply_all(state: &AppState) -> Result<(), JsValue> {
    apply_update(state, IncrementalUpdate::ModalVisibility)?;
    apply_update(state, IncrementalUpdate::WeatherPanel)?;
    apply_update(state, IncrementalUpdate::MapLoading)
}

fn update_modal_visibility(visible: bool) -> Result<(), JsValue> {
    let modal = require_element(MODAL_ID)?;
    toggle_class(&modal, "show", visible)?;
    set_flag_attribute(&modal, "hidden", !visible)?;

    if visible {
        // foco tras el repintado
        Timeout::new(0, || {
            if let Some(input) = get_element_by_id(CITY_INPUT_ID) {
                if let Err(e) = focus(&input) {
                    log::debug!("🔍 [MODAL] Sin foco en #{}: {}", CITY_INPUT_ID, describe_js(&e));
                }
            }
        })
        .forget();
    }
    Ok(())
}

fn update_weather_panel(query: &QueryState) -> Result<(), JsValue> {
    let input = require_element(CITY_INPUT_ID)?;
    if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
        // no pisar el valor mientras se escribe (el cursor saltaría al final)
        if input.value() != query.city_text {
            input.set_value(&query.city_text);
        }
        input.set_disabled(query.is_loading);
    }

    let button = require_element(SUBMIT_BUTTON_ID)?;
    set_flag_attribute(&button, "disabled", !query.can_submit())?;
    set_text_content(&button, submit_caption(query));

    let feedback = require_element(WEATHER_FEEDBACK_ID)?;
    clear_children(&feedback);
    for node in render_weather_feedback(query)? {
        append_child(&feedback, &node)?;
    }
    Ok(())
}

fn update_map_loading(ready: bool) -> Result<(), JsValue> {
    let indicator = require_element(MAP_LOADING_ID)?;
    toggle_class(&indicator, "hidden", ready)
}
