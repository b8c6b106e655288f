// ============================================================================
// VIEWS - Renderizado DOM puro (sin framework)
// ============================================================================

pub mod landing;
pub mod weather_modal;
pub mod weather_panel;

pub use landing::render_landing;
pub use weather_modal::{render_weather_modal, ModalCallbacks};
pub use weather_panel::render_weather_feedback;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children};

/// Montar portada + modal en la raíz
pub fn render_app(
    root: &Element,
    on_open: Rc<dyn Fn()>,
    callbacks: &ModalCallbacks,
) -> Result<(), JsValue> {
    clear_children(root);
    append_child(root, &render_landing(on_open)?)?;
    append_child(root, &render_weather_modal(callbacks)?)?;
    Ok(())
}
