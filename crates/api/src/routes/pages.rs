//! Route definitions for the `/pages` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id (projection)
/// PUT    /{id}                    -> update
/// GET    /slug/{slug}             -> get_by_slug (projection)
///
/// POST   /{id}/widgets            -> attach_widget
/// PUT    /{id}/widgets/{widget_id} -> reorder_widget
/// DELETE /{id}/widgets/{widget_id} -> detach_widget
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list).post(pages::create))
        .route("/{id}", get(pages::get_by_id).put(pages::update))
        .route("/slug/{slug}", get(pages::get_by_slug))
        .route("/{id}/widgets", post(pages::attach_widget))
        .route(
            "/{id}/widgets/{widget_id}",
            put(pages::reorder_widget).delete(pages::detach_widget),
        )
}
