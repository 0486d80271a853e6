//! Role-based access control extractors.
//!
//! Each extractor wraps [`MaybeAuth`] and rejects requests whose caller does
//! not meet the requirement. Because extractors that read request parts run
//! before the body is parsed, a forbidden caller gets 403 even when its
//! request body would not have deserialized.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gamestore_core::company::{ensure_developer, Caller};

use super::auth::MaybeAuth;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a developer account. Anonymous callers and every other role are
/// rejected with 403 Forbidden.
///
/// ```ignore
/// async fn create(RequireDeveloper(caller): RequireDeveloper) -> AppResult<StatusCode> {
///     // caller.role is Role::Developer here
///     Ok(StatusCode::CREATED)
/// }
/// ```
pub struct RequireDeveloper(pub Caller);

impl FromRequestParts<AppState> for RequireDeveloper {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeAuth(user) = MaybeAuth::from_request_parts(parts, state).await?;
        let caller = user.map(|u| u.caller());
        let caller = ensure_developer(caller.as_ref())?;
        Ok(RequireDeveloper(*caller))
    }
}
