//! Route definitions for the `/companies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/companies`. Companies are addressed by title.
///
/// ```text
/// POST   /           -> create
/// GET    /{title}    -> get_by_title
/// PUT    /{title}    -> update
/// DELETE /{title}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(company::create)).route(
        "/{title}",
        get(company::get_by_title)
            .put(company::update)
            .delete(company::delete),
    )
}
