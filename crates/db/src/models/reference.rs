//! Reference data: languages and genres, plus their product link rows.

use gamestore_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Language {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// A `product_languages` row joined with the language name.
#[derive(Debug, Clone, FromRow)]
pub struct ProductLanguage {
    pub id: DbId,
    pub product_id: DbId,
    pub language: String,
    pub interface: bool,
    pub subtitles: bool,
    pub voice: bool,
}

/// Which kinds of localization a product ships for one language.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LanguageSupport {
    #[serde(default)]
    pub interface: bool,
    #[serde(default)]
    pub subtitles: bool,
    #[serde(default)]
    pub voice: bool,
}

/// A genre as attached to a specific product.
#[derive(Debug, Clone, FromRow)]
pub struct ProductGenre {
    pub product_id: DbId,
    pub id: DbId,
    pub name: String,
}
