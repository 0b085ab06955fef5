// ============================================================================
// EVENT HANDLING - Listeners con handle propio
// ============================================================================
// El listener vive mientras vive el handle: al hacer drop se llama a
// removeEventListener y se libera el closure.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

pub struct EventListener {
    closure: Option<Closure<dyn FnMut(Event)>>,
    element: Element,
    event_type: String,
}

impl EventListener {
    /// Crear event listener genérico
    pub fn new<F>(element: &Element, event_type: &str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            closure: Some(closure),
            element: element.clone(),
            event_type: event_type.to_string(),
        })
    }

    /// Crear click listener
    pub fn click<F>(element: &Element, mut handler: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        Self::new(element, "click", move |_event: Event| handler())
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .element
                .remove_event_listener_with_callback(&self.event_type, closure.as_ref().unchecked_ref());
        }
    }
}
