pub mod cart_viewmodel;
pub mod countdown_viewmodel;

pub use cart_viewmodel::*;
pub use countdown_viewmodel::*;
