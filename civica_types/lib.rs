pub mod common;
pub mod errors;

pub use errors::{ApplicationError, Result};
