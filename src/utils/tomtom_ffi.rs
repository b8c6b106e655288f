// ============================================================================
// TOMTOM FFI - Foreign Function Interface para el SDK de TomTom (window.tt)
// ============================================================================
// Solo bindings - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Instancia de `tt.Map`
    #[derive(Debug, Clone)]
    pub type TtMap;

    /// `tt.map({...})`; lanza si el contenedor o la key no son válidos
    #[wasm_bindgen(catch, js_namespace = tt, js_name = map)]
    pub fn create_map(options: &JsValue) -> Result<TtMap, JsValue>;

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &TtMap, control: &JsValue);

    /// Listener de un solo disparo (`load`, `error`, ...)
    #[wasm_bindgen(method, js_name = once)]
    pub fn once(this: &TtMap, event: &str, callback: &JsValue);

    #[wasm_bindgen(method, catch, js_name = addSource)]
    pub fn add_source(this: &TtMap, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &TtMap, layer: &JsValue) -> Result<(), JsValue>;

    /// Destruye el mapa y libera el contenedor
    #[wasm_bindgen(method)]
    pub fn remove(this: &TtMap);

    // --- Controles ---

    #[wasm_bindgen(js_namespace = tt)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = tt)]
    pub fn new() -> NavigationControl;

    #[wasm_bindgen(js_namespace = tt)]
    pub type FullscreenControl;

    #[wasm_bindgen(constructor, js_namespace = tt)]
    pub fn new() -> FullscreenControl;

    // --- Marcadores y popups ---

    #[wasm_bindgen(js_namespace = tt)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = tt)]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setPopup)]
    pub fn set_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &TtMap) -> Marker;

    #[wasm_bindgen(js_namespace = tt)]
    pub type Popup;

    #[wasm_bindgen(constructor, js_namespace = tt)]
    pub fn new(options: &JsValue) -> Popup;

    #[wasm_bindgen(method, js_name = setDOMContent)]
    pub fn set_dom_content(this: &Popup, content: &web_sys::Node) -> Popup;
}

/// Helper: ¿está `window.tt` definido?
pub fn sdk_global_present() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::get(&window, &JsValue::from_str(crate::utils::constants::TOMTOM_GLOBAL))
                .map(|value| !value.is_undefined() && !value.is_null())
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
