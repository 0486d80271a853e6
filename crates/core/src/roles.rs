//! Account kinds and their well-known role names.
//!
//! The ids and names must match the seed rows in
//! `crates/db/migrations/20240301000001_create_accounts.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_DEVELOPER: &str = "developer";
pub const ROLE_CUSTOMER: &str = "customer";

pub const ROLE_ADMIN_ID: DbId = 1;
pub const ROLE_DEVELOPER_ID: DbId = 2;
pub const ROLE_CUSTOMER_ID: DbId = 3;

/// The kind of account behind an authenticated request.
///
/// Admins manage the platform but hold no rights over other accounts'
/// companies; developers own at most one company; customers browse and buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Developer,
    Customer,
}

impl Role {
    /// Role name as stored in the `roles` table and carried in JWT claims.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Developer => ROLE_DEVELOPER,
            Role::Customer => ROLE_CUSTOMER,
        }
    }

    /// Seeded `roles.id` for this role.
    pub fn id(self) -> DbId {
        match self {
            Role::Admin => ROLE_ADMIN_ID,
            Role::Developer => ROLE_DEVELOPER_ID,
            Role::Customer => ROLE_CUSTOMER_ID,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_DEVELOPER => Ok(Role::Developer),
            ROLE_CUSTOMER => Ok(Role::Customer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
