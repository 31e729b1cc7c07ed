//! Repository for the `pages` table.

use sqlx::PgPool;

use marquee_core::types::DbId;

use crate::models::page::{CreatePage, Page, UpdatePage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, draft, background_gradient, background_start_color, \
     background_end_color, text_color, button_color, button_text_color, \
     nav_bar_color, nav_bar_text_color, created_at, updated_at";

/// Provides CRUD operations for pages.
///
/// Slug writes run in a transaction that first clears the slug from any
/// previous non-draft holder, keeping the "one live page per slug"
/// invariant without failing the save.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePage) -> Result<Page, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if let Some(slug) = &input.slug {
            if !input.draft.unwrap_or(false) {
                Self::clear_slug_holder(&mut tx, slug, None).await?;
            }
        }
        let query = format!(
            "INSERT INTO pages (name, slug, draft, background_gradient,
                 background_start_color, background_end_color, text_color,
                 button_color, button_text_color, nav_bar_color, nav_bar_text_color)
             VALUES ($1, $2, COALESCE($3, FALSE), COALESCE($4, FALSE), $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let page = sqlx::query_as::<_, Page>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.draft)
            .bind(input.background_gradient)
            .bind(&input.background_start_color)
            .bind(&input.background_end_color)
            .bind(&input.text_color)
            .bind(&input.button_color)
            .bind(&input.button_text_color)
            .bind(&input.nav_bar_color)
            .bind(&input.nav_bar_text_color)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(page)
    }

    /// Find a page by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the live (non-draft) page holding a slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1 AND NOT draft");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all pages ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY name");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// Update a page. Only non-`None` fields in `input` are applied.
    ///
    /// Assigning a slug held by another live page clears it from that page
    /// first. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if let Some(slug) = &input.slug {
            Self::clear_slug_holder(&mut tx, slug, Some(id)).await?;
        }
        let query = format!(
            "UPDATE pages SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                draft = COALESCE($4, draft),
                background_gradient = COALESCE($5, background_gradient),
                background_start_color = COALESCE($6, background_start_color),
                background_end_color = COALESCE($7, background_end_color),
                text_color = COALESCE($8, text_color),
                button_color = COALESCE($9, button_color),
                button_text_color = COALESCE($10, button_text_color),
                nav_bar_color = COALESCE($11, nav_bar_color),
                nav_bar_text_color = COALESCE($12, nav_bar_text_color),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let page = sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.draft)
            .bind(input.background_gradient)
            .bind(&input.background_start_color)
            .bind(&input.background_end_color)
            .bind(&input.text_color)
            .bind(&input.button_color)
            .bind(&input.button_text_color)
            .bind(&input.nav_bar_color)
            .bind(&input.nav_bar_text_color)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(page)
    }

    /// Unassign `slug` from any live page other than `keep_id`.
    async fn clear_slug_holder(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        slug: &str,
        keep_id: Option<DbId>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE pages SET slug = NULL, updated_at = NOW()
             WHERE slug = $1 AND NOT draft AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(slug)
        .bind(keep_id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
