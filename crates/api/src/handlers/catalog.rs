//! Handlers for the read-only catalog resources.
//!
//! List endpoints serve raw rows; detail endpoints serve the same full
//! projections that focus widgets nest, so a group item's `path` always
//! leads to data shaped like the widget payload.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use marquee_core::error::CoreError;
use marquee_core::projection::{self, ApeClassData, EventData, HouseTeamData, PersonData};
use marquee_core::types::DbId;
use marquee_db::compose;
use marquee_db::models::ape_class::ApeClass;
use marquee_db::models::event::Event;
use marquee_db::models::house_team::HouseTeam;
use marquee_db::models::person::Person;
use marquee_db::models::video::Video;
use marquee_db::repositories::{
    ApeClassRepo, EventRepo, HouseTeamRepo, PersonRepo, VideoRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/events
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventData>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Event", id))?;
    Ok(Json(projection::event_data(
        &compose::event_to_core(&event),
        Utc::now(),
    )))
}

/// GET /api/v1/people
pub async fn list_people(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Person>>>> {
    let people = PersonRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: people }))
}

/// GET /api/v1/people/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonData>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Person", id))?;
    let teams = PersonRepo::teams_for_person(&state.pool, id).await?;
    let team_refs: Vec<_> = teams.iter().map(compose::team_ref).collect();
    Ok(Json(projection::person_data(
        &compose::person_to_core(&person),
        &team_refs,
    )))
}

/// GET /api/v1/classes
pub async fn list_classes(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ApeClass>>>> {
    let classes = ApeClassRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: classes }))
}

/// GET /api/v1/classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApeClassData>> {
    let class = ApeClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("ApeClass", id))?;
    let teacher = match class.teacher_id {
        Some(teacher_id) => PersonRepo::find_by_id(&state.pool, teacher_id).await?,
        None => None,
    };
    let core = compose::ape_class_to_core(&class, teacher.as_ref())?;
    Ok(Json(projection::ape_class_data(&core, Utc::now())))
}

/// GET /api/v1/house-teams
pub async fn list_house_teams(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HouseTeam>>>> {
    let teams = HouseTeamRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: teams }))
}

/// GET /api/v1/house-teams/{id}
pub async fn get_house_team(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HouseTeamData>> {
    let team = HouseTeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("HouseTeam", id))?;
    let core = compose::load_house_team(&state.pool, &team).await?;
    Ok(Json(projection::house_team_data(&core)))
}

/// GET /api/v1/videos
pub async fn list_videos(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Video>>>> {
    let videos = VideoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: videos }))
}
