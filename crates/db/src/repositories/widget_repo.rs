//! Repository for the `widgets` table.

use sqlx::PgPool;

use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::widget::WidgetKind;

use crate::models::widget::{CreateWidget, UpdateWidget, WidgetPayload, WidgetRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kind, name, width, start_date, end_date, content, text_color, \
     image_url, media_url, description, link_kind, link_id, display_type, \
     upcoming_events, upcoming_events_window, source_house_team_id, class_type, \
     event_id, person_id, house_team_id, ape_class_id, created_at, updated_at";

/// Provides CRUD operations for widgets.
///
/// All kinds live in one table behind the `kind` discriminator; the
/// discriminator is written once at insert and never updated.
pub struct WidgetRepo;

impl WidgetRepo {
    /// Insert a new widget, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWidget) -> Result<WidgetRow, sqlx::Error> {
        // Variant columns not used by this kind stay NULL.
        let mut content = None;
        let mut text_color = None;
        let mut image_url = None;
        let mut media_url = None;
        let mut description = None;
        let mut link_kind = None;
        let mut link_id = None;
        let mut display_type = None;
        let mut upcoming_events = None;
        let mut upcoming_events_window = None;
        let mut source_house_team_id = None;
        let mut class_type = None;
        let mut event_id = None;
        let mut person_id = None;
        let mut house_team_id = None;
        let mut ape_class_id = None;

        match &input.payload {
            WidgetPayload::Text {
                content: c,
                text_color: tc,
            } => {
                content = Some(c.clone());
                text_color = tc.clone();
            }
            WidgetPayload::Banner {
                image_url: url,
                link_kind: lk,
                link_id: li,
            } => {
                image_url = Some(url.clone());
                link_kind = lk.clone();
                link_id = *li;
            }
            WidgetPayload::ImageCarousel => {}
            WidgetPayload::Audio {
                media_url: url,
                description: d,
            }
            | WidgetPayload::Video {
                media_url: url,
                description: d,
            } => {
                media_url = Some(url.clone());
                description = d.clone();
            }
            WidgetPayload::EventsGroup {
                display_type: dt,
                upcoming_events: ue,
                upcoming_events_window: w,
            } => {
                display_type = dt.clone();
                upcoming_events = *ue;
                upcoming_events_window = *w;
            }
            WidgetPayload::PeopleGroup {
                display_type: dt,
                source_house_team_id: team,
            } => {
                display_type = dt.clone();
                source_house_team_id = *team;
            }
            WidgetPayload::ApeClassesGroup {
                display_type: dt,
                class_type: ct,
            } => {
                display_type = dt.clone();
                class_type = ct.clone();
            }
            WidgetPayload::VideosGroup { display_type: dt } => {
                display_type = dt.clone();
            }
            WidgetPayload::EventFocus { event_id: id } => event_id = Some(*id),
            WidgetPayload::PersonFocus { person_id: id } => person_id = Some(*id),
            WidgetPayload::HouseTeamFocus { house_team_id: id } => house_team_id = Some(*id),
            WidgetPayload::ApeClassFocus { ape_class_id: id } => ape_class_id = Some(*id),
        }

        let query = format!(
            "INSERT INTO widgets (kind, name, width, start_date, end_date, content,
                 text_color, image_url, media_url, description, link_kind, link_id,
                 display_type, upcoming_events, upcoming_events_window,
                 source_house_team_id, class_type, event_id, person_id,
                 house_team_id, ape_class_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                     $15, $16, $17, $18, $19, $20, $21)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WidgetRow>(&query)
            .bind(input.payload.kind().as_str())
            .bind(&input.name)
            .bind(input.width)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(content)
            .bind(text_color)
            .bind(image_url)
            .bind(media_url)
            .bind(description)
            .bind(link_kind)
            .bind(link_id)
            .bind(display_type)
            .bind(upcoming_events)
            .bind(upcoming_events_window)
            .bind(source_house_team_id)
            .bind(class_type)
            .bind(event_id)
            .bind(person_id)
            .bind(house_team_id)
            .bind(ape_class_id)
            .fetch_one(pool)
            .await
    }

    /// Find a widget by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WidgetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM widgets WHERE id = $1");
        sqlx::query_as::<_, WidgetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a batch of widgets by ID. Rows deleted since the caller read the
    /// join table are simply absent from the result.
    pub async fn find_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<WidgetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM widgets WHERE id = ANY($1)");
        sqlx::query_as::<_, WidgetRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all widgets ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<WidgetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM widgets ORDER BY name");
        sqlx::query_as::<_, WidgetRow>(&query).fetch_all(pool).await
    }

    /// Update a widget's common fields and variant payload. Only non-`None`
    /// fields are applied; `kind` is immutable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWidget,
    ) -> Result<Option<WidgetRow>, sqlx::Error> {
        let query = format!(
            "UPDATE widgets SET
                name = COALESCE($2, name),
                width = COALESCE($3, width),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                content = COALESCE($6, content),
                text_color = COALESCE($7, text_color),
                image_url = COALESCE($8, image_url),
                media_url = COALESCE($9, media_url),
                description = COALESCE($10, description),
                link_kind = COALESCE($11, link_kind),
                link_id = COALESCE($12, link_id),
                display_type = COALESCE($13, display_type),
                upcoming_events = COALESCE($14, upcoming_events),
                upcoming_events_window = COALESCE($15, upcoming_events_window),
                source_house_team_id = COALESCE($16, source_house_team_id),
                class_type = COALESCE($17, class_type),
                event_id = COALESCE($18, event_id),
                person_id = COALESCE($19, person_id),
                house_team_id = COALESCE($20, house_team_id),
                ape_class_id = COALESCE($21, ape_class_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WidgetRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.width)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.content)
            .bind(&input.text_color)
            .bind(&input.image_url)
            .bind(&input.media_url)
            .bind(&input.description)
            .bind(&input.link_kind)
            .bind(input.link_id)
            .bind(&input.display_type)
            .bind(input.upcoming_events)
            .bind(input.upcoming_events_window)
            .bind(input.source_house_team_id)
            .bind(&input.class_type)
            .bind(input.event_id)
            .bind(input.person_id)
            .bind(input.house_team_id)
            .bind(input.ape_class_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a widget. Join rows and carousel items cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM widgets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the hand-picked member list of a group widget.
    ///
    /// Dispatches on the widget's kind to the matching member table; a
    /// non-group kind is a validation error.
    pub async fn set_members(
        pool: &PgPool,
        widget_id: DbId,
        kind: WidgetKind,
        member_ids: &[DbId],
    ) -> Result<(), SetMembersError> {
        let (table, column) = match kind {
            WidgetKind::EventsGroup => ("widget_events", "event_id"),
            WidgetKind::PeopleGroup => ("widget_people", "person_id"),
            WidgetKind::ApeClassesGroup => ("widget_ape_classes", "ape_class_id"),
            WidgetKind::VideosGroup => ("widget_videos", "video_id"),
            other => {
                return Err(SetMembersError::Core(CoreError::Validation {
                    field: "members",
                    message: format!(
                        "widgets of kind '{}' have no hand-picked members",
                        other.as_str()
                    ),
                }))
            }
        };
        let mut tx = pool.begin().await?;
        sqlx::query(&format!("DELETE FROM {table} WHERE widget_id = $1"))
            .bind(widget_id)
            .execute(&mut *tx)
            .await?;
        let insert = format!(
            "INSERT INTO {table} (widget_id, {column})
             SELECT $1, ids.id FROM UNNEST($2::BIGINT[]) AS ids(id)
             ON CONFLICT DO NOTHING"
        );
        sqlx::query(&insert)
            .bind(widget_id)
            .bind(member_ids)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}

/// Error for [`WidgetRepo::set_members`], which can fail on validation as
/// well as at the database.
#[derive(Debug, thiserror::Error)]
pub enum SetMembersError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}
