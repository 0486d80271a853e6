//! Catalog vocabulary: product statuses and types, requirement tiers, the
//! fixed commerce placeholders shown on game cards, and listing limits.
//!
//! The string values match the CHECK constraints in the catalog migration.

/* --------------------------------------------------------------------------
   Product status
   -------------------------------------------------------------------------- */

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_MODERATION: &str = "moderation";
/// Only published products are listed in the public game catalog.
pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_HIDDEN: &str = "hidden";

/* --------------------------------------------------------------------------
   Product type
   -------------------------------------------------------------------------- */

pub const TYPE_GAME: &str = "game";
/// A DLC always has a parent game.
pub const TYPE_DLC: &str = "dlc";

/* --------------------------------------------------------------------------
   System requirement tiers
   -------------------------------------------------------------------------- */

pub const REQUIREMENTS_MINIMUM: &str = "minimum";
pub const REQUIREMENTS_RECOMMENDED: &str = "recommended";

/* --------------------------------------------------------------------------
   Commerce placeholders
   -------------------------------------------------------------------------- */

// TODO: replace with real pricing once the price catalog lands.
pub const PLACEHOLDER_PRICE: i32 = 100;
pub const PLACEHOLDER_DISCOUNT: i32 = 0;
pub const PLACEHOLDER_IS_BOUGHT: bool = false;
pub const PLACEHOLDER_IS_FAVORITE: bool = false;

/* --------------------------------------------------------------------------
   Listing limits
   -------------------------------------------------------------------------- */

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a requested page size to `1..=MAX_PAGE_SIZE`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Negative offsets are treated as zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
