//! Repository for the `events` table.

use sqlx::PgPool;

use marquee_core::types::{DbId, Timestamp};

use crate::models::event::{CreateEvent, Event, UpdateEvent};

const COLUMNS: &str = "id, name, bio, start_time, max_tickets, tickets_sold, ticket_price, \
     banner_url, created_at, updated_at";

/// Provides CRUD and group-widget queries for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, bio, start_time, max_tickets, ticket_price, banner_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(input.start_time)
            .bind(input.max_tickets)
            .bind(input.ticket_price)
            .bind(&input.banner_url)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All events, newest start first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM events ORDER BY start_time DESC NULLS LAST, id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                name = COALESCE($2, name),
                bio = COALESCE($3, bio),
                start_time = COALESCE($4, start_time),
                max_tickets = COALESCE($5, max_tickets),
                tickets_sold = COALESCE($6, tickets_sold),
                ticket_price = COALESCE($7, ticket_price),
                banner_url = COALESCE($8, banner_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(input.start_time)
            .bind(input.max_tickets)
            .bind(input.tickets_sold)
            .bind(input.ticket_price)
            .bind(&input.banner_url)
            .fetch_optional(pool)
            .await
    }

    /// The hand-picked events of a group widget, newest start first.
    pub async fn handpicked_for_widget(
        pool: &PgPool,
        widget_id: DbId,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = "SELECT DISTINCT e.id, e.name, e.bio, e.start_time, e.max_tickets,
                    e.tickets_sold, e.ticket_price, e.banner_url, e.created_at, e.updated_at
             FROM events e
             JOIN widget_events we ON we.event_id = e.id
             WHERE we.widget_id = $1
             ORDER BY e.start_time DESC NULLS LAST, e.id";
        sqlx::query_as::<_, Event>(query)
            .bind(widget_id)
            .fetch_all(pool)
            .await
    }

    /// Upcoming events relative to `now`, optionally capped to a window of
    /// `window_days` days, newest start first.
    pub async fn upcoming(
        pool: &PgPool,
        now: Timestamp,
        window_days: Option<i32>,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE start_time > $1
               AND ($2::INT IS NULL OR start_time < $1 + make_interval(days => $2))
             ORDER BY start_time DESC, id"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(now)
            .bind(window_days)
            .fetch_all(pool)
            .await
    }
}
