//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Requires a valid JWT Bearer token.
//! - [`auth::MaybeAuth`] -- Optional caller; anonymous requests pass through.
//! - [`rbac::RequireDeveloper`] -- Requires a developer account, 403 otherwise.

pub mod auth;
pub mod rbac;
