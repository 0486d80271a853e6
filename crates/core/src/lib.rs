//! Domain types and rules shared by the database and API crates.
//!
//! Nothing in here touches I/O: the policy functions take plain values and
//! return [`error::CoreError`] so they can be tested without a database.

pub mod catalog;
pub mod company;
pub mod error;
pub mod roles;
pub mod types;
