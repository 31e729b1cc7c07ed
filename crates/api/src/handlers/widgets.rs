//! Handlers for the `/widgets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use marquee_core::error::CoreError;
use marquee_core::projection::{self, WidgetData};
use marquee_core::types::DbId;
use marquee_core::widget::WidgetKind;
use marquee_db::compose;
use marquee_db::models::carousel_item::{CarouselItem, CreateCarouselItem, UpdateCarouselItem};
use marquee_db::models::widget::{CreateWidget, UpdateWidget, WidgetRow};
use marquee_db::repositories::{CarouselItemRepo, WidgetRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/widgets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WidgetRow>>> {
    let widgets = WidgetRepo::list(&state.pool).await?;
    Ok(Json(widgets))
}

/// POST /api/v1/widgets
///
/// The `kind` tag in the body fixes the variant forever.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWidget>,
) -> AppResult<(StatusCode, Json<WidgetRow>)> {
    input.validate()?;
    let widget = WidgetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(widget)))
}

/// GET /api/v1/widgets/{id} -- the raw row, for editing.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WidgetRow>> {
    let widget = WidgetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", id))?;
    Ok(Json(widget))
}

/// GET /api/v1/widgets/{id}/data -- the resolved projection, as it would
/// appear inside a page at this moment.
pub async fn get_data(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WidgetData>> {
    let now = Utc::now();
    let widget = compose::resolve_widget_by_id(&state.pool, id, now).await?;
    Ok(Json(projection::widget_data(&widget, now)))
}

/// PUT /api/v1/widgets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWidget>,
) -> AppResult<Json<WidgetRow>> {
    input.validate()?;
    let widget = WidgetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", id))?;
    Ok(Json(widget))
}

/// DELETE /api/v1/widgets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WidgetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Widget", id)))
    }
}

/// PUT /api/v1/widgets/{id}/members
///
/// Replace the hand-picked member list of a group widget. A non-empty list
/// switches the widget away from its computed default query.
pub async fn set_members(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(member_ids): Json<Vec<DbId>>,
) -> AppResult<StatusCode> {
    let row = find_widget(&state, id).await?;
    let kind = parse_kind(&row)?;
    WidgetRepo::set_members(&state.pool, id, kind, &member_ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/widgets/{id}/items
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCarouselItem>,
) -> AppResult<(StatusCode, Json<CarouselItem>)> {
    ensure_carousel(&state, id).await?;
    input.validate()?;
    let item = CarouselItemRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/widgets/{id}/items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCarouselItem>,
) -> AppResult<Json<CarouselItem>> {
    let item = CarouselItemRepo::update(&state.pool, id, item_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("CarouselItem", item_id))?;
    Ok(Json(item))
}

/// DELETE /api/v1/widgets/{id}/items/{item_id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = CarouselItemRepo::delete(&state.pool, id, item_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CarouselItem", item_id)))
    }
}

async fn find_widget(state: &AppState, id: DbId) -> AppResult<WidgetRow> {
    WidgetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Widget", id)))
}

fn parse_kind(row: &WidgetRow) -> AppResult<WidgetKind> {
    WidgetKind::parse(&row.kind).ok_or_else(|| {
        AppError::Core(CoreError::Integrity(format!(
            "widget {} has unknown kind '{}'",
            row.id, row.kind
        )))
    })
}

async fn ensure_carousel(state: &AppState, id: DbId) -> AppResult<()> {
    let row = find_widget(state, id).await?;
    if parse_kind(&row)? != WidgetKind::ImageCarousel {
        return Err(AppError::Core(CoreError::Validation {
            field: "widget",
            message: format!("widget {} is not an image carousel", id),
        }));
    }
    Ok(())
}
