//! Handlers for the public catalog: `/games` and `/products`.

use axum::extract::{Path, Query, State};
use axum::Json;
use gamestore_core::error::CoreError;
use gamestore_core::types::DbId;
use gamestore_db::models::product::Product;
use gamestore_db::repositories::{
    GenreRepo, LanguageRepo, ProductRepo, SocialRepo, SystemRequirementRepo,
};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::representation::{
    game_list, requirement_views, GameDetail, GameListItem, ProductDetail, ProductRelations,
    SystemRequirementView,
};
use crate::state::AppState;

/// GET /api/v1/games
///
/// Published games, newest release first.
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<GameListItem>>> {
    let (limit, offset) = params.resolve();
    let games = ProductRepo::list_published_games(&state.pool, limit, offset).await?;
    let ids: Vec<DbId> = games.iter().map(|g| g.id).collect();

    let (genres, requirements) = tokio::try_join!(
        GenreRepo::list_for_products(&state.pool, &ids),
        SystemRequirementRepo::list_for_products(&state.pool, &ids),
    )?;

    Ok(Json(game_list(games, genres, requirements)))
}

/// GET /api/v1/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GameDetail>> {
    let game = ProductRepo::find_published_game(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;

    let relations = load_relations(&state, &game).await?;
    Ok(Json(relations.into_game_detail(game)))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductDetail>> {
    let product = find_product(&state, id).await?;
    let relations = load_relations(&state, &product).await?;
    Ok(Json(relations.into_product_detail(product)))
}

/// GET /api/v1/products/{id}/system-requirements
pub async fn list_system_requirements(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<SystemRequirementView>>> {
    let product = find_product(&state, id).await?;
    let rows = SystemRequirementRepo::list_for_products(&state.pool, &[product.id]).await?;
    Ok(Json(requirement_views(rows)))
}

async fn find_product(state: &AppState, id: DbId) -> AppResult<Product> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}

/// Load everything nested under `product`: DLCs, languages (of the product
/// and its DLCs), genres, system requirements and social links.
async fn load_relations(state: &AppState, product: &Product) -> AppResult<ProductRelations> {
    let pool = &state.pool;
    let own = [product.id];

    let (dlcs, genres, requirements, socials) = tokio::try_join!(
        ProductRepo::list_dlcs_for(pool, &own),
        GenreRepo::list_for_products(pool, &own),
        SystemRequirementRepo::list_for_products(pool, &own),
        SocialRepo::list_for_products(pool, &own),
    )?;

    let language_owners: Vec<DbId> = std::iter::once(product.id)
        .chain(dlcs.iter().map(|d| d.id))
        .collect();
    let languages = LanguageRepo::list_for_products(pool, &language_owners).await?;

    Ok(ProductRelations {
        dlcs,
        languages,
        genres,
        requirements,
        socials,
    })
}
