pub mod consent;
pub mod error;
pub mod offer;
pub mod request;
pub mod state;
pub mod stream;
