// ============================================================================
// LANDING VIEW - Portada con el botón que abre el modal
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};

const TITLE: &str = "Smart Tourist Safety App";
const DESCRIPTION: &str = "Get real-time weather information and traffic updates for any city. \
Stay informed and plan your travels safely with our comprehensive weather and traffic monitoring system.";
const OPEN_LABEL: &str = "Check Weather & Traffic";

pub fn render_landing(on_open: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("action-button")
        .attr("type", "button")?
        .text(OPEN_LABEL)
        .build();
    on_click(&button, move |_| on_open())?;

    let main = ElementBuilder::new("main")?
        .class("main-content")
        .child(ElementBuilder::new("h1")?.class("title").text(TITLE).build())?
        .child(ElementBuilder::new("p")?.class("description").text(DESCRIPTION).build())?
        .child(button)?
        .build();

    Ok(ElementBuilder::new("div")?.class("container").child(main)?.build())
}
