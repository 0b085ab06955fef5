// ============================================================================
// ELEMENT HELPERS - Funciones básicas para leer/modificar el DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

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

/// Elemento por ID que la plantilla debe haber renderizado
pub fn require_element_by_id(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}

/// Todos los elementos con una clase, en orden de documento (snapshot, no live)
pub fn get_elements_by_class_name(class: &str) -> Result<Vec<Element>, JsValue> {
    let collection = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .get_elements_by_class_name(class);
    Ok((0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect())
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Leer `data-<key>` (equivalente a `element.dataset[key]` para claves simples)
pub fn get_data_attribute(element: &Element, key: &str) -> Option<String> {
    element.get_attribute(&format!("data-{}", key))
}

/// Texto del elemento (vacío si no tiene)
pub fn text_content(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}
