//! Repository for the `ape_classes` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use marquee_core::types::DbId;

use crate::models::ape_class::{ApeClass, CreateApeClass};

const COLUMNS: &str = "id, name, bio, class_type, price, teacher_id, start_date, num_sessions, \
     max_enrollment, enrollment_opens, enrollment_closes, banner_url, created_at, updated_at";

const ALIASED: &str = "c.id, c.name, c.bio, c.class_type, c.price, c.teacher_id, c.start_date, \
     c.num_sessions, c.max_enrollment, c.enrollment_opens, c.enrollment_closes, c.banner_url, \
     c.created_at, c.updated_at";

/// Provides CRUD and group-widget queries for classes.
pub struct ApeClassRepo;

impl ApeClassRepo {
    /// Insert a new class, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateApeClass) -> Result<ApeClass, sqlx::Error> {
        let query = format!(
            "INSERT INTO ape_classes (name, bio, class_type, price, teacher_id, start_date,
                 num_sessions, max_enrollment, enrollment_opens, enrollment_closes, banner_url)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 4), COALESCE($8, 12), $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApeClass>(&query)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(&input.class_type)
            .bind(input.price)
            .bind(input.teacher_id)
            .bind(input.start_date)
            .bind(input.num_sessions)
            .bind(input.max_enrollment)
            .bind(input.enrollment_opens)
            .bind(input.enrollment_closes)
            .bind(&input.banner_url)
            .fetch_one(pool)
            .await
    }

    /// Find a class by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ApeClass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ape_classes WHERE id = $1");
        sqlx::query_as::<_, ApeClass>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all classes ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ApeClass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ape_classes ORDER BY name, id");
        sqlx::query_as::<_, ApeClass>(&query).fetch_all(pool).await
    }

    /// The hand-picked classes of a group widget.
    pub async fn handpicked_for_widget(
        pool: &PgPool,
        widget_id: DbId,
    ) -> Result<Vec<ApeClass>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {ALIASED}
             FROM ape_classes c
             JOIN widget_ape_classes wc ON wc.ape_class_id = c.id
             WHERE wc.widget_id = $1
             ORDER BY c.name, c.id"
        );
        sqlx::query_as::<_, ApeClass>(&query)
            .bind(widget_id)
            .fetch_all(pool)
            .await
    }

    /// The computed default set for a classes group: optionally filtered by
    /// class type, restricted to classes whose enrollment window is open on
    /// `today` (an absent bound counts as open).
    pub async fn open_for_registration(
        pool: &PgPool,
        class_type: Option<&str>,
        today: NaiveDate,
    ) -> Result<Vec<ApeClass>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ape_classes
             WHERE ($1::TEXT IS NULL OR class_type = $1)
               AND (enrollment_opens IS NULL OR enrollment_opens <= $2)
               AND (enrollment_closes IS NULL OR enrollment_closes >= $2)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, ApeClass>(&query)
            .bind(class_type)
            .bind(today)
            .fetch_all(pool)
            .await
    }
}
