//! Repository for the `videos` table.

use sqlx::PgPool;

use marquee_core::types::DbId;

use crate::models::video::{CreateVideo, Video};

const COLUMNS: &str = "id, name, description, video_url, created_at, updated_at";

/// Provides CRUD and group-widget queries for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (name, description, video_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.video_url)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All videos, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY created_at DESC, id");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// The hand-picked videos of a group widget.
    pub async fn handpicked_for_widget(
        pool: &PgPool,
        widget_id: DbId,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = "SELECT DISTINCT v.id, v.name, v.description, v.video_url,
                    v.created_at, v.updated_at
             FROM videos v
             JOIN widget_videos wv ON wv.video_id = v.id
             WHERE wv.widget_id = $1
             ORDER BY v.id";
        sqlx::query_as::<_, Video>(query)
            .bind(widget_id)
            .fetch_all(pool)
            .await
    }
}
