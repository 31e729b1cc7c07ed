//! Route definitions for the `/widgets` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::widgets;
use crate::state::AppState;

/// Routes mounted at `/widgets`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id (row)
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/data               -> get_data (resolved projection)
/// PUT    /{id}/members            -> set_members
/// POST   /{id}/items              -> add_item
/// PUT    /{id}/items/{item_id}    -> update_item
/// DELETE /{id}/items/{item_id}    -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(widgets::list).post(widgets::create))
        .route(
            "/{id}",
            get(widgets::get_by_id)
                .put(widgets::update)
                .delete(widgets::delete),
        )
        .route("/{id}/data", get(widgets::get_data))
        .route("/{id}/members", put(widgets::set_members))
        .route("/{id}/items", post(widgets::add_item))
        .route(
            "/{id}/items/{item_id}",
            put(widgets::update_item).delete(widgets::delete_item),
        )
}
