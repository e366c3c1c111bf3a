use axum::{extract::FromRequestParts, http::StatusCode, http::request::Parts};
use uuid::Uuid;

/// Identity of the caller, taken from the `x-user-id` header.
///
/// Authentication itself happens upstream (gateway / identity provider);
/// the platform trusts the forwarded id and re-checks the role against the
/// users table inside each handler.
#[derive(Debug, Clone, Copy)]
pub struct Principal {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "missing x-user-id header".to_string(),
            ))?;

        let user_id = Uuid::parse_str(raw).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "x-user-id is not a valid uuid".to_string(),
            )
        })?;

        Ok(Principal { user_id })
    }
}
