pub mod handlers;

mod error;
mod extractors;
mod http;

pub use error::WebError;
pub use extractors::Principal;
pub use http::*;
