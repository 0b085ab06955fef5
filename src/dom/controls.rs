// ============================================================================
// CONTROLS - Lo que los viewmodels necesitan de un elemento del DOM
// ============================================================================

use web_sys::Element;
use crate::dom::{add_class, get_data_attribute, set_text_content, EventListener};

/// Botón "update-cart" (o cualquier elemento que el carrito oculta)
pub trait UpdateControl {
    type Listener;

    /// Valor de `data-<key>`
    fn data(&self, key: &str) -> Option<String>;

    fn add_class(&self, class: &str) -> Result<(), String>;

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<Self::Listener, String>;
}

/// Destino del texto del countdown
pub trait TextSink {
    fn set_text(&self, text: &str);
}

impl UpdateControl for Element {
    type Listener = EventListener;

    fn data(&self, key: &str) -> Option<String> {
        get_data_attribute(self, key)
    }

    fn add_class(&self, class: &str) -> Result<(), String> {
        add_class(self, class).map_err(|e| format!("classList.add falló: {:?}", e))
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<EventListener, String> {
        EventListener::click(self, handler).map_err(|e| format!("addEventListener falló: {:?}", e))
    }
}

impl TextSink for Element {
    fn set_text(&self, text: &str) {
        set_text_content(self, text);
    }
}
