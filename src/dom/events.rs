// ============================================================================
// EVENT HANDLING - Helpers de listeners
// ============================================================================
// Los listeners de elementos del DOM usan closure.forget(): el modal se construye
// una sola vez al iniciar la app, así que no se acumulan registros.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, InputEvent, KeyboardEvent, MouseEvent};

/// Registrar un listener tipado (el evento se castea sin comprobar)
fn listen<E, F>(element: &Element, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        handler(event.unchecked_into::<E>());
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    listen(element, "input", handler)
}

/// Solo la tecla Enter
pub fn on_enter<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(element, "keydown", move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            event.prevent_default();
            handler();
        }
    })
}

/// Evitar que un click dentro del contenido cierre el overlay
pub fn stop_click_propagation(element: &Element) -> Result<(), JsValue> {
    on_click(element, |event: MouseEvent| event.stop_propagation())
}
