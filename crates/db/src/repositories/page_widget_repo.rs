//! Repository for the `page_widgets` join table.

use sqlx::PgPool;

use marquee_core::types::DbId;

use crate::models::page_widget::PageWidget;

const COLUMNS: &str = "id, page_id, widget_id, sort_order";

/// Manages page<->widget associations and their sort order.
///
/// Sort-order collisions are resolved by check-then-bump: an explicit order
/// already taken on the page lands at `max + 1` instead of displacing the
/// existing row. The check and the write run in one transaction; a narrow
/// race under truly concurrent editors is accepted (page editing is
/// single-admin in practice).
pub struct PageWidgetRepo;

impl PageWidgetRepo {
    /// Attach a widget to a page.
    ///
    /// Without an explicit order the widget lands after the current maximum
    /// (0 on an empty page).
    pub async fn attach(
        pool: &PgPool,
        page_id: DbId,
        widget_id: DbId,
        sort_order: Option<i32>,
    ) -> Result<PageWidget, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let order = Self::place(&mut tx, page_id, None, sort_order).await?;
        let query = format!(
            "INSERT INTO page_widgets (page_id, widget_id, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PageWidget>(&query)
            .bind(page_id)
            .bind(widget_id)
            .bind(order)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Move an attached widget to a new sort order, bumping on collision.
    ///
    /// Returns `None` if the widget is not attached to the page.
    pub async fn reorder(
        pool: &PgPool,
        page_id: DbId,
        widget_id: DbId,
        sort_order: i32,
    ) -> Result<Option<PageWidget>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let existing: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM page_widgets WHERE page_id = $1 AND widget_id = $2")
                .bind(page_id)
                .bind(widget_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((row_id,)) = existing else {
            return Ok(None);
        };
        let order = Self::place(&mut tx, page_id, Some(row_id), Some(sort_order)).await?;
        let query = format!(
            "UPDATE page_widgets SET sort_order = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PageWidget>(&query)
            .bind(row_id)
            .bind(order)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    /// Detach a widget from a page. Returns `true` if a row was removed.
    pub async fn detach(
        pool: &PgPool,
        page_id: DbId,
        widget_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM page_widgets WHERE page_id = $1 AND widget_id = $2")
            .bind(page_id)
            .bind(widget_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All join rows for a page, ascending by sort order.
    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<PageWidget>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_widgets WHERE page_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, PageWidget>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve the final sort order for a write: requested order if free,
    /// otherwise (or when unspecified) one past the page's current maximum.
    async fn place(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        page_id: DbId,
        exclude_row: Option<DbId>,
        requested: Option<i32>,
    ) -> Result<i32, sqlx::Error> {
        if let Some(order) = requested {
            let taken: Option<(DbId,)> = sqlx::query_as(
                "SELECT id FROM page_widgets
                 WHERE page_id = $1 AND sort_order = $2 AND ($3::BIGINT IS NULL OR id <> $3)",
            )
            .bind(page_id)
            .bind(order)
            .bind(exclude_row)
            .fetch_optional(&mut **tx)
            .await?;
            if taken.is_none() {
                return Ok(order);
            }
        }
        let (max,): (Option<i32>,) =
            sqlx::query_as("SELECT MAX(sort_order) FROM page_widgets WHERE page_id = $1")
                .bind(page_id)
                .fetch_one(&mut **tx)
                .await?;
        Ok(max.map_or(0, |m| m + 1))
    }
}
