use async_trait::async_trait;

use civica_types::errors::AppError;

/// Optional reverse geocoding of coordinates into a display address.
///
/// Failures must never block a submission: callers log the error and leave
/// the address empty.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, AppError>;
}

/// Default geocoder that resolves nothing.
pub struct NoopGeocoder;

#[async_trait]
impl Geocoder for NoopGeocoder {
    async fn reverse_geocode(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Option<String>, AppError> {
        Ok(None)
    }
}
