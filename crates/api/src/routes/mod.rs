pub mod catalog;
pub mod health;
pub mod pages;
pub mod widgets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages                                    list, create
/// /pages/{id}                               page projection (GET), update (PUT)
/// /pages/slug/{slug}                        page projection by slug
/// /pages/{id}/widgets                       attach widget (POST)
/// /pages/{id}/widgets/{widget_id}           reorder (PUT), detach (DELETE)
///
/// /widgets                                  list, create
/// /widgets/{id}                             get row, update, delete
/// /widgets/{id}/data                        resolved projection (GET)
/// /widgets/{id}/members                     replace hand-picked members (PUT)
/// /widgets/{id}/items                       add carousel item (POST)
/// /widgets/{id}/items/{item_id}             update, delete carousel item
///
/// /events                                   list
/// /events/{id}                              full event projection
/// /people                                   list
/// /people/{id}                              full person projection
/// /classes                                  list
/// /classes/{id}                             full class projection
/// /house-teams                              list
/// /house-teams/{id}                         full team projection
/// /videos                                   list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages::router())
        .nest("/widgets", widgets::router())
        .merge(catalog::router())
}
