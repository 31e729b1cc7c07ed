//! Repository for the `carousel_items` table.

use sqlx::PgPool;

use marquee_core::types::DbId;

use crate::models::carousel_item::{CarouselItem, CreateCarouselItem, UpdateCarouselItem};

const COLUMNS: &str = "id, widget_id, image_url, sort_order, link_kind, link_id, \
     start_date, end_date, created_at, updated_at";

/// Provides CRUD operations for carousel items.
pub struct CarouselItemRepo;

impl CarouselItemRepo {
    /// Insert a new item under a carousel widget, returning the created row.
    pub async fn create(
        pool: &PgPool,
        widget_id: DbId,
        input: &CreateCarouselItem,
    ) -> Result<CarouselItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO carousel_items (widget_id, image_url, sort_order,
                 link_kind, link_id, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselItem>(&query)
            .bind(widget_id)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .bind(&input.link_kind)
            .bind(input.link_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// All items of a carousel, ascending by sort order.
    pub async fn list_for_widget(
        pool: &PgPool,
        widget_id: DbId,
    ) -> Result<Vec<CarouselItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM carousel_items WHERE widget_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, CarouselItem>(&query)
            .bind(widget_id)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the item does not belong to the widget.
    pub async fn update(
        pool: &PgPool,
        widget_id: DbId,
        item_id: DbId,
        input: &UpdateCarouselItem,
    ) -> Result<Option<CarouselItem>, sqlx::Error> {
        let query = format!(
            "UPDATE carousel_items SET
                image_url = COALESCE($3, image_url),
                sort_order = COALESCE($4, sort_order),
                link_kind = COALESCE($5, link_kind),
                link_id = COALESCE($6, link_id),
                start_date = COALESCE($7, start_date),
                end_date = COALESCE($8, end_date),
                updated_at = NOW()
             WHERE id = $1 AND widget_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselItem>(&query)
            .bind(item_id)
            .bind(widget_id)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .bind(&input.link_kind)
            .bind(input.link_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, widget_id: DbId, item_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carousel_items WHERE id = $1 AND widget_id = $2")
            .bind(item_id)
            .bind(widget_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
