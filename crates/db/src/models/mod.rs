//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the API mutates the entity, a `Deserialize` update DTO (all
//!   `Option` fields) for partial updates

pub mod account;
pub mod company;
pub mod product;
pub mod reference;
pub mod social;
pub mod system_requirement;
