use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use crate::dom::{get_element_by_id, ElementBuilder};
use crate::error::{describe_js, MapError};
use crate::utils::tomtom_ffi::{
    self, FullscreenControl, Marker, NavigationControl, Popup, TtMap,
};
use super::{IncidentMarker, MapBackend, MapOptions, TrafficFlowLayer};

/// Renderizador de mapas para web usando TomTom Maps SDK (window.tt)
#[derive(Debug, Default, Clone, Copy)]
pub struct TomTomBackend;

impl TomTomBackend {
    pub fn new() -> Self {
        Self
    }
}

/// serde_json::Value → objeto JS plano (no `Map`)
fn to_js(value: &Value) -> Result<JsValue, MapError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Sdk(format!("Serialization error: {}", e)))
}

/// Contenido del popup: título en negrita + descripción (texto plano, sin HTML)
fn popup_content(marker: &IncidentMarker) -> Result<web_sys::Element, JsValue> {
    let title = ElementBuilder::new("strong")?.text(&marker.title).build();
    let description = ElementBuilder::new("div")?
        .class("incident-description")
        .text(&marker.description)
        .build();
    Ok(ElementBuilder::new("div")?
        .class("incident-popup")
        .child(title)?
        .child(description)?
        .build())
}

impl MapBackend for TomTomBackend {
    type Handle = TtMap;

    fn create_map(&self, options: &MapOptions) -> Result<TtMap, MapError> {
        if get_element_by_id(&options.container_id).is_none() {
            return Err(MapError::ContainerMissing(options.container_id.clone()));
        }

        log::info!(
            "🗺️ [MAP] tt.map en #{} centro ({}, {}) zoom {}",
            options.container_id, options.center.lat, options.center.lon, options.zoom
        );

        let js_options = to_js(&json!({
            "key": options.api_key,
            "container": options.container_id,
            "center": options.center.lng_lat(),
            "zoom": options.zoom,
            "style": options.style,
        }))?;

        tomtom_ffi::create_map(&js_options).map_err(|e| MapError::Sdk(describe_js(&e)))
    }

    fn add_controls(&self, map: &TtMap) -> Result<(), MapError> {
        map.add_control(&NavigationControl::new());
        map.add_control(&FullscreenControl::new());
        Ok(())
    }

    fn on_load(&self, map: &TtMap, callback: Box<dyn FnOnce()>) {
        // once_into_js libera el closure después de la primera llamada
        let listener = Closure::once_into_js(move || callback());
        map.once("load", &listener);
    }

    fn add_traffic_flow(&self, map: &TtMap, layer: &TrafficFlowLayer) -> Result<(), MapError> {
        map.add_source(&layer.source_id, &to_js(&layer.source_spec())?)
            .map_err(|e| MapError::Sdk(format!("addSource: {}", describe_js(&e))))?;
        map.add_layer(&to_js(&layer.layer_spec())?)
            .map_err(|e| MapError::Sdk(format!("addLayer: {}", describe_js(&e))))?;
        Ok(())
    }

    fn add_incident_marker(&self, map: &TtMap, marker: &IncidentMarker) -> Result<(), MapError> {
        let content = popup_content(marker).map_err(|e| MapError::Sdk(describe_js(&e)))?;
        let popup = Popup::new(&to_js(&json!({ "offset": marker.popup_offset }))?)
            .set_dom_content(&content);

        Marker::new(&to_js(&json!({ "color": marker.color }))?)
            .set_lng_lat(&to_js(&json!(marker.position.lng_lat()))?)
            .set_popup(&popup)
            .add_to(map);
        Ok(())
    }

    fn remove(&self, map: &TtMap) {
        map.remove();
        log::info!("🧹 [MAP] Instancia de mapa destruida");
    }
}
