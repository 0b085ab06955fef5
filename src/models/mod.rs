pub mod cart;
pub mod countdown;
pub mod session;

pub use cart::*;
pub use countdown::*;
pub use session::*;
