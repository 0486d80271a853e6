//! Catalog representations: how products, DLCs and their related records
//! are shaped into API payloads.
//!
//! Every function here is a pure projection over rows that the handlers
//! already loaded; there is no I/O and no business logic beyond field
//! selection and nesting.

use std::collections::HashMap;

use gamestore_core::catalog::{
    PLACEHOLDER_DISCOUNT, PLACEHOLDER_IS_BOUGHT, PLACEHOLDER_IS_FAVORITE, PLACEHOLDER_PRICE,
};
use gamestore_core::types::{Date, DbId};
use gamestore_db::models::product::Product;
use gamestore_db::models::reference::{ProductGenre, ProductLanguage};
use gamestore_db::models::social::Social;
use gamestore_db::models::system_requirement::SystemRequirement;
use serde::Serialize;
use uuid::Uuid;

/* --------------------------------------------------------------------------
   Leaf views
   -------------------------------------------------------------------------- */

/// One language a product is localized into.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageView {
    pub id: DbId,
    pub language: String,
    pub interface: bool,
    pub subtitles: bool,
    pub voice: bool,
}

impl From<ProductLanguage> for LanguageView {
    fn from(row: ProductLanguage) -> Self {
        Self {
            id: row.id,
            language: row.language,
            interface: row.interface,
            subtitles: row.subtitles,
            voice: row.voice,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreView {
    pub id: DbId,
    pub name: String,
}

impl From<ProductGenre> for GenreView {
    fn from(row: ProductGenre) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialView {
    pub id: DbId,
    pub social_type: String,
    pub url: String,
}

impl From<Social> for SocialView {
    fn from(row: Social) -> Self {
        Self {
            id: row.id,
            social_type: row.social_type,
            url: row.url,
        }
    }
}

/// Every requirement field except the owning product.
#[derive(Debug, Clone, Serialize)]
pub struct SystemRequirementView {
    pub id: DbId,
    pub operating_system: String,
    pub device_processor: String,
    pub device_memory: String,
    pub device_storage: String,
    pub device_graphics: String,
    pub type_requirements: String,
}

impl From<SystemRequirement> for SystemRequirementView {
    fn from(row: SystemRequirement) -> Self {
        Self {
            id: row.id,
            operating_system: row.operating_system,
            device_processor: row.device_processor,
            device_memory: row.device_memory,
            device_storage: row.device_storage,
            device_graphics: row.device_graphics,
            type_requirements: row.type_requirements,
        }
    }
}

/// Requirement summary for game cards.
#[derive(Debug, Clone, Serialize)]
pub struct ShortSystemRequirement {
    pub id: DbId,
    pub operating_system: String,
}

impl From<SystemRequirement> for ShortSystemRequirement {
    fn from(row: SystemRequirement) -> Self {
        Self {
            id: row.id,
            operating_system: row.operating_system,
        }
    }
}

/// Commerce fields shown on games. Fixed values until pricing, discounts
/// and the library/wishlist exist.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Offer {
    pub price: i32,
    pub discount: i32,
    pub is_bought: bool,
    pub is_favorite: bool,
}

impl Offer {
    pub fn placeholder() -> Self {
        Self {
            price: PLACEHOLDER_PRICE,
            discount: PLACEHOLDER_DISCOUNT,
            is_bought: PLACEHOLDER_IS_BOUGHT,
            is_favorite: PLACEHOLDER_IS_FAVORITE,
        }
    }
}

/* --------------------------------------------------------------------------
   Composite views
   -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Serialize)]
pub struct DlcDetail {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub developers_uuid: Option<Uuid>,
    pub publishers_uuid: Option<Uuid>,
    pub langs: Vec<LanguageView>,
}

/// Full product detail with every nested collection.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: DbId,
    pub name: String,
    pub release_date: Option<Date>,
    pub description: String,
    pub about: String,
    pub age: i32,
    pub adult: bool,
    pub status: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub developers_uuid: Option<Uuid>,
    pub publishers_uuid: Option<Uuid>,
    pub dlcs: Vec<DlcDetail>,
    pub langs: Vec<LanguageView>,
    pub system_requirements: Vec<SystemRequirementView>,
    pub socials: Vec<SocialView>,
}

/// Abbreviated game card for catalog listings.
#[derive(Debug, Clone, Serialize)]
pub struct GameListItem {
    pub id: DbId,
    pub name: String,
    pub release_date: Option<Date>,
    pub genres: Vec<GenreView>,
    pub system_requirements: Vec<ShortSystemRequirement>,
    #[serde(flatten)]
    pub offer: Offer,
}

/// Storefront page for a single game.
#[derive(Debug, Clone, Serialize)]
pub struct GameDetail {
    pub id: DbId,
    pub name: String,
    pub release_date: Option<Date>,
    pub genres: Vec<GenreView>,
    #[serde(flatten)]
    pub offer: Offer,
    pub description: String,
    pub about: String,
    pub age: i32,
    pub adult: bool,
    pub status: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub developers_uuid: Option<Uuid>,
    pub publishers_uuid: Option<Uuid>,
    pub dlcs: Vec<DlcDetail>,
    pub langs: Vec<LanguageView>,
    pub system_requirements: Vec<SystemRequirementView>,
}

/* --------------------------------------------------------------------------
   Assembly
   -------------------------------------------------------------------------- */

/// Rows related to one product (and its DLCs), as loaded by a handler.
///
/// `languages` may contain rows for the product itself and for any of its
/// DLCs; the other collections are for the product only.
#[derive(Debug, Default)]
pub struct ProductRelations {
    pub dlcs: Vec<Product>,
    pub languages: Vec<ProductLanguage>,
    pub genres: Vec<ProductGenre>,
    pub requirements: Vec<SystemRequirement>,
    pub socials: Vec<Social>,
}

impl ProductRelations {
    fn split(self, product_id: DbId) -> Nested {
        let mut langs = group_by(self.languages, |l| l.product_id);
        let dlcs = self
            .dlcs
            .into_iter()
            .map(|dlc| {
                let dlc_langs = langs.remove(&dlc.id).unwrap_or_default();
                dlc_detail(dlc, dlc_langs)
            })
            .collect();

        Nested {
            dlcs,
            langs: into_views(langs.remove(&product_id).unwrap_or_default()),
            genres: into_views(self.genres),
            requirements: into_views(self.requirements),
            socials: into_views(self.socials),
        }
    }

    /// Build the full product detail.
    pub fn into_product_detail(self, product: Product) -> ProductDetail {
        let nested = self.split(product.id);
        ProductDetail {
            id: product.id,
            name: product.name,
            release_date: product.release_date,
            description: product.description,
            about: product.about,
            age: product.age,
            adult: product.adult,
            status: product.status,
            product_type: product.product_type,
            developers_uuid: product.developers_uuid,
            publishers_uuid: product.publishers_uuid,
            dlcs: nested.dlcs,
            langs: nested.langs,
            system_requirements: nested.requirements,
            socials: nested.socials,
        }
    }

    /// Build the storefront game page. Social links are not part of it.
    pub fn into_game_detail(self, game: Product) -> GameDetail {
        let nested = self.split(game.id);
        GameDetail {
            id: game.id,
            name: game.name,
            release_date: game.release_date,
            genres: nested.genres,
            offer: Offer::placeholder(),
            description: game.description,
            about: game.about,
            age: game.age,
            adult: game.adult,
            status: game.status,
            product_type: game.product_type,
            developers_uuid: game.developers_uuid,
            publishers_uuid: game.publishers_uuid,
            dlcs: nested.dlcs,
            langs: nested.langs,
            system_requirements: nested.requirements,
        }
    }
}

struct Nested {
    dlcs: Vec<DlcDetail>,
    langs: Vec<LanguageView>,
    genres: Vec<GenreView>,
    requirements: Vec<SystemRequirementView>,
    socials: Vec<SocialView>,
}

fn dlc_detail(dlc: Product, langs: Vec<ProductLanguage>) -> DlcDetail {
    DlcDetail {
        id: dlc.id,
        name: dlc.name,
        description: dlc.description,
        developers_uuid: dlc.developers_uuid,
        publishers_uuid: dlc.publishers_uuid,
        langs: into_views(langs),
    }
}

/// Build catalog cards for `games`, keeping their order.
///
/// `genres` and `requirements` may cover any superset of the games; rows
/// for other products are ignored.
pub fn game_list(
    games: Vec<Product>,
    genres: Vec<ProductGenre>,
    requirements: Vec<SystemRequirement>,
) -> Vec<GameListItem> {
    let mut genres = group_by(genres, |g| g.product_id);
    let mut requirements = group_by(requirements, |r| r.game_id);

    games
        .into_iter()
        .map(|game| GameListItem {
            genres: into_views(genres.remove(&game.id).unwrap_or_default()),
            system_requirements: into_views(requirements.remove(&game.id).unwrap_or_default()),
            id: game.id,
            name: game.name,
            release_date: game.release_date,
            offer: Offer::placeholder(),
        })
        .collect()
}

/// Full requirement views for one product.
pub fn requirement_views(rows: Vec<SystemRequirement>) -> Vec<SystemRequirementView> {
    into_views(rows)
}

fn into_views<R, V: From<R>>(rows: Vec<R>) -> Vec<V> {
    rows.into_iter().map(V::from).collect()
}

/// Bucket rows by product id, preserving row order inside each bucket.
fn group_by<T>(rows: Vec<T>, key: impl Fn(&T) -> DbId) -> HashMap<DbId, Vec<T>> {
    let mut map: HashMap<DbId, Vec<T>> = HashMap::new();
    for row in rows {
        map.entry(key(&row)).or_default().push(row);
    }
    map
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use gamestore_core::catalog::{STATUS_PUBLISHED, TYPE_DLC, TYPE_GAME};

    use super::*;

    fn product(id: DbId, name: &str, parent_id: Option<DbId>) -> Product {
        Product {
            id,
            parent_id,
            name: name.to_string(),
            release_date: NaiveDate::from_ymd_opt(2023, 5, 12),
            description: format!("{name} description"),
            about: format!("About {name}"),
            age: 16,
            adult: false,
            status: STATUS_PUBLISHED.to_string(),
            product_type: if parent_id.is_some() { TYPE_DLC } else { TYPE_GAME }.to_string(),
            developers_uuid: Some(Uuid::nil()),
            publishers_uuid: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn requirement(id: DbId, game_id: DbId, os: &str) -> SystemRequirement {
        SystemRequirement {
            id,
            game_id,
            operating_system: os.to_string(),
            device_processor: "Intel Core i5-8400".to_string(),
            device_memory: "8 GB".to_string(),
            device_storage: "70 GB".to_string(),
            device_graphics: "GTX 1060".to_string(),
            type_requirements: "minimum".to_string(),
        }
    }

    fn language(id: DbId, product_id: DbId, name: &str) -> ProductLanguage {
        ProductLanguage {
            id,
            product_id,
            language: name.to_string(),
            interface: true,
            subtitles: true,
            voice: false,
        }
    }

    fn genre(product_id: DbId, id: DbId, name: &str) -> ProductGenre {
        ProductGenre {
            product_id,
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn list_items_carry_placeholders_and_short_requirements() {
        let items = game_list(
            vec![product(1, "Hollow Keep", None)],
            vec![genre(1, 7, "RPG")],
            vec![requirement(3, 1, "Windows 10")],
        );

        let json = serde_json::to_value(&items).unwrap();
        let card = &json[0];
        assert_eq!(card["price"], 100);
        assert_eq!(card["discount"], 0);
        assert_eq!(card["is_bought"], false);
        assert_eq!(card["is_favorite"], false);
        assert_eq!(card["genres"][0]["name"], "RPG");
        assert_eq!(
            card["system_requirements"][0],
            serde_json::json!({ "id": 3, "operating_system": "Windows 10" })
        );
        assert!(card.get("description").is_none());
    }

    #[test]
    fn list_keeps_game_order_and_routes_rows_to_their_game() {
        let items = game_list(
            vec![product(2, "B", None), product(1, "A", None)],
            vec![genre(1, 7, "RPG"), genre(2, 8, "Racing"), genre(99, 9, "Other")],
            vec![requirement(5, 2, "Linux")],
        );

        assert_eq!(items[0].id, 2);
        assert_eq!(items[0].genres[0].name, "Racing");
        assert_eq!(items[0].system_requirements.len(), 1);
        assert_eq!(items[1].id, 1);
        assert_eq!(items[1].genres[0].name, "RPG");
        assert!(items[1].system_requirements.is_empty());
    }

    #[test]
    fn product_detail_nests_dlcs_with_their_own_languages() {
        let relations = ProductRelations {
            dlcs: vec![product(2, "Frozen Depths", Some(1))],
            languages: vec![
                language(10, 1, "English"),
                language(11, 2, "German"),
                language(12, 1, "French"),
            ],
            requirements: vec![requirement(3, 1, "Windows 10")],
            socials: vec![Social {
                id: 4,
                product_id: 1,
                social_type: "discord".to_string(),
                url: "https://discord.gg/keep".to_string(),
            }],
            ..Default::default()
        };

        let detail = relations.into_product_detail(product(1, "Hollow Keep", None));

        assert_eq!(detail.langs.len(), 2);
        assert_eq!(detail.langs[0].language, "English");
        assert_eq!(detail.langs[1].language, "French");
        assert_eq!(detail.dlcs.len(), 1);
        assert_eq!(detail.dlcs[0].name, "Frozen Depths");
        assert_eq!(detail.dlcs[0].langs.len(), 1);
        assert_eq!(detail.dlcs[0].langs[0].language, "German");
        assert_eq!(detail.socials[0].social_type, "discord");
    }

    #[test]
    fn product_detail_serializes_type_and_omits_requirement_owner() {
        let relations = ProductRelations {
            requirements: vec![requirement(3, 1, "Windows 10")],
            ..Default::default()
        };

        let json = serde_json::to_value(relations.into_product_detail(product(1, "G", None)))
            .unwrap();

        assert_eq!(json["type"], "game");
        assert!(json.get("product_type").is_none());
        let req = &json["system_requirements"][0];
        assert_eq!(req["operating_system"], "Windows 10");
        assert_eq!(req["device_memory"], "8 GB");
        assert!(req.get("game_id").is_none());
        assert_eq!(json["release_date"], "2023-05-12");
    }

    #[test]
    fn dlc_detail_exposes_only_summary_fields() {
        let relations = ProductRelations {
            dlcs: vec![product(2, "Frozen Depths", Some(1))],
            ..Default::default()
        };

        let json = serde_json::to_value(relations.into_product_detail(product(1, "G", None)))
            .unwrap();
        let dlc = json["dlcs"][0].as_object().unwrap();

        let mut keys: Vec<&str> = dlc.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "description",
                "developers_uuid",
                "id",
                "langs",
                "name",
                "publishers_uuid"
            ]
        );
    }

    #[test]
    fn game_detail_has_genres_and_placeholders_but_no_socials() {
        let relations = ProductRelations {
            genres: vec![genre(1, 7, "RPG")],
            socials: vec![Social {
                id: 4,
                product_id: 1,
                social_type: "youtube".to_string(),
                url: "https://youtube.com/keep".to_string(),
            }],
            ..Default::default()
        };

        let json =
            serde_json::to_value(relations.into_game_detail(product(1, "G", None))).unwrap();

        assert_eq!(json["genres"][0]["id"], 7);
        assert_eq!(json["price"], 100);
        assert_eq!(json["is_favorite"], false);
        assert_eq!(json["age"], 16);
        assert!(json.get("socials").is_none());
    }
}
