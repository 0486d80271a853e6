//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod company_repo;
pub mod genre_repo;
pub mod language_repo;
pub mod product_repo;
pub mod social_repo;
pub mod system_requirement_repo;

pub use account_repo::AccountRepo;
pub use company_repo::CompanyRepo;
pub use genre_repo::GenreRepo;
pub use language_repo::LanguageRepo;
pub use product_repo::ProductRepo;
pub use social_repo::SocialRepo;
pub use system_requirement_repo::SystemRequirementRepo;
