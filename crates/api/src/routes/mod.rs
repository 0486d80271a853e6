pub mod auth;
pub mod catalog;
pub mod company;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/me                                     current account (requires auth)
///
/// /companies                                   create (developer)
/// /companies/{title}                           get, update, delete (owner only)
///
/// /games                                       published game cards (public)
/// /games/{id}                                  game page (public)
///
/// /products/{id}                               full product detail (public)
/// /products/{id}/system-requirements           requirement list (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/companies", company::router())
        .merge(catalog::router())
}
