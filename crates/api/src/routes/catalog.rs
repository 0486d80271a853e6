//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes, merged directly under `/api/v1`.
///
/// ```text
/// GET /games                               -> list_games
/// GET /games/{id}                          -> get_game
/// GET /products/{id}                       -> get_product
/// GET /products/{id}/system-requirements   -> list_system_requirements
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(catalog::list_games))
        .route("/games/{id}", get(catalog::get_game))
        .route("/products/{id}", get(catalog::get_product))
        .route(
            "/products/{id}/system-requirements",
            get(catalog::list_system_requirements),
        )
}
