// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod controls;
pub mod element;
pub mod events;

pub use controls::*;
pub use element::*;
pub use events::*;
