//! Handlers for the `/pages` resource.
//!
//! The GET endpoints serve the page projection (the composed, time-filtered
//! widget list); the mutating endpoints manage the page row and its widget
//! associations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use marquee_core::error::CoreError;
use marquee_core::page::PageSlug;
use marquee_core::projection::{self, PageData};
use marquee_core::types::DbId;
use marquee_db::compose::{self, PageRef};
use marquee_db::models::page::{CreatePage, Page, UpdatePage};
use marquee_db::models::page_widget::{AttachWidget, PageWidget, ReorderWidget};
use marquee_db::repositories::{PageRepo, PageWidgetRepo, WidgetRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/pages/{id}
///
/// The page projection: active widgets only, in join order, evaluated at
/// the moment of the request.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PageData>> {
    let now = Utc::now();
    let (page, widgets) = compose::load_page(&state.pool, PageRef::Id(id), now).await?;
    Ok(Json(projection::page_data(&page, &widgets, now)))
}

/// GET /api/v1/pages/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PageData>> {
    // A string outside the closed slug set can never resolve.
    let slug = PageSlug::parse(&slug)
        .ok_or_else(|| CoreError::not_found("Page", &slug))?;
    let now = Utc::now();
    let (page, widgets) =
        compose::load_page(&state.pool, PageRef::Slug(slug.as_str()), now).await?;
    Ok(Json(projection::page_data(&page, &widgets, now)))
}

/// GET /api/v1/pages
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Page>>> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(pages))
}

/// POST /api/v1/pages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<(StatusCode, Json<Page>)> {
    input.validate()?;
    let page = PageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// PUT /api/v1/pages/{id}
///
/// Assigning a slug held by another live page silently clears it from the
/// previous holder.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePage>,
) -> AppResult<Json<Page>> {
    input.validate()?;
    let page = PageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Page", id))?;
    Ok(Json(page))
}

/// POST /api/v1/pages/{id}/widgets
///
/// Attach a widget. Without an explicit sort order the widget lands at the
/// end of the page's current ordering.
pub async fn attach_widget(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AttachWidget>,
) -> AppResult<(StatusCode, Json<PageWidget>)> {
    ensure_page_exists(&state, id).await?;
    if WidgetRepo::find_by_id(&state.pool, input.widget_id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("Widget", input.widget_id)));
    }
    let row = PageWidgetRepo::attach(&state.pool, id, input.widget_id, input.sort_order).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/pages/{id}/widgets/{widget_id}
pub async fn reorder_widget(
    State(state): State<AppState>,
    Path((id, widget_id)): Path<(DbId, DbId)>,
    Json(input): Json<ReorderWidget>,
) -> AppResult<Json<PageWidget>> {
    let row = PageWidgetRepo::reorder(&state.pool, id, widget_id, input.sort_order)
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", widget_id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/pages/{id}/widgets/{widget_id}
pub async fn detach_widget(
    State(state): State<AppState>,
    Path((id, widget_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let detached = PageWidgetRepo::detach(&state.pool, id, widget_id).await?;
    if detached {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Widget", widget_id)))
    }
}

async fn ensure_page_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if PageRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("Page", id)));
    }
    Ok(())
}
