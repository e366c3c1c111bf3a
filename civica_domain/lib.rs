pub mod models;
pub mod routing;
pub mod sla;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
