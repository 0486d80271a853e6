//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use gamestore_core::company::Caller;
use gamestore_core::error::CoreError;
use gamestore_core::roles::Role;
use gamestore_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated account extracted from a JWT Bearer token in the `Authorization` header.
///
/// Rejects with 401 when the header is missing or the token is unusable.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The account's internal database id (from `claims.sub`).
    pub account_id: DbId,
    pub role: Role,
}

impl AuthUser {
    /// View this account as a policy [`Caller`].
    pub fn caller(&self) -> Caller {
        Caller {
            account_id: self.account_id,
            role: self.role,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        MaybeAuth::from_request_parts(parts, state)
            .await?
            .0
            .ok_or_else(|| unauthorized("Missing Authorization header"))
    }
}

/// Optional caller.
///
/// An absent or blank `Authorization` header yields `MaybeAuth(None)`. A
/// header that is present but malformed, expired, or signed with another
/// key is rejected with 401 rather than silently downgraded to anonymous.
#[derive(Debug, Clone, Copy)]
pub struct MaybeAuth(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(MaybeAuth(None));
        };

        let header = header
            .to_str()
            .map_err(|_| unauthorized("Authorization header is not valid ASCII"))?
            .trim();
        if header.is_empty() {
            return Ok(MaybeAuth(None));
        }

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

        let claims = validate_token(token.trim(), &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let role = claims.role.parse::<Role>().map_err(|e| {
            tracing::warn!(account_id = claims.sub, error = %e, "Token carries unknown role");
            unauthorized("Invalid or expired token")
        })?;

        Ok(MaybeAuth(Some(AuthUser {
            account_id: claims.sub,
            role,
        })))
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}
