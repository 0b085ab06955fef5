// ============================================================================
// PAGE SERVICE - Recarga completa de la página
// ============================================================================

use crate::dom::window;

/// Acción de "completado" de los requests del carrito
pub trait PageReloader {
    fn reload(&self) -> Result<(), String>;
}

/// `location.reload()` del navegador
#[derive(Clone, Copy, Default)]
pub struct LocationReloader;

impl PageReloader for LocationReloader {
    fn reload(&self) -> Result<(), String> {
        window()
            .ok_or_else(|| "No window".to_string())?
            .location()
            .reload()
            .map_err(|e| format!("Reload error: {:?}", e))
    }
}
