// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento por ID o error (para actualizaciones incrementales)
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar un hijo a <head>
pub fn append_to_head(child: &Element) -> Result<(), JsValue> {
    let head = document()
        .and_then(|doc| doc.head())
        .ok_or_else(|| JsValue::from_str("No <head>"))?;
    head.append_child(child).map(|_| ())
}

/// Poner o quitar una clase según `on`
pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar los hijos de un elemento
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Atributo booleano (`disabled`, `hidden`, ...)
pub fn set_flag_attribute(element: &Element, name: &str, on: bool) -> Result<(), JsValue> {
    if on {
        element.set_attribute(name, "")
    } else {
        element.remove_attribute(name)
    }
}

/// Valor actual de un <input>
pub fn input_value(element: &Element) -> Option<String> {
    element.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

/// Dar foco a un elemento si es HtmlElement
pub fn focus(element: &Element) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .focus()
}
