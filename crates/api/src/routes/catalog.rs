//! Route definitions for the read-only catalog resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes merged directly under `/api/v1`.
///
/// ```text
/// GET /events            -> list_events
/// GET /events/{id}       -> get_event
/// GET /people            -> list_people
/// GET /people/{id}       -> get_person
/// GET /classes           -> list_classes
/// GET /classes/{id}      -> get_class
/// GET /house-teams       -> list_house_teams
/// GET /house-teams/{id}  -> get_house_team
/// GET /videos            -> list_videos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(catalog::list_events))
        .route("/events/{id}", get(catalog::get_event))
        .route("/people", get(catalog::list_people))
        .route("/people/{id}", get(catalog::get_person))
        .route("/classes", get(catalog::list_classes))
        .route("/classes/{id}", get(catalog::get_class))
        .route("/house-teams", get(catalog::list_house_teams))
        .route("/house-teams/{id}", get(catalog::get_house_team))
        .route("/videos", get(catalog::list_videos))
}
