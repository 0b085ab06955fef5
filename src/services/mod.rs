pub mod api_client;
pub mod page_service;
pub mod runtime;
pub mod session_service;

pub use api_client::*;
pub use page_service::*;
pub use runtime::*;
pub use session_service::*;
