//! Principal extraction
//!
//! Authentication happens in front of this service; the authenticated user
//! name arrives in the `X-Principal` header. No header means anonymous.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use admin_core::domain::Principal;
use admin_shared::constants::PRINCIPAL_HEADER_NAME;

pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .headers
            .get(PRINCIPAL_HEADER_NAME)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Principal::user)
            .unwrap_or_else(Principal::anonymous);

        Ok(CurrentPrincipal(principal))
    }
}
