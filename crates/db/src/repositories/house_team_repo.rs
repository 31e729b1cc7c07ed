//! Repository for the `house_teams` table.

use sqlx::PgPool;

use marquee_core::types::DbId;

use crate::models::house_team::{CreateHouseTeam, HouseTeam};
use crate::models::video::Video;

const COLUMNS: &str = "id, name, show_time, created_at, updated_at";

/// Provides CRUD operations for house teams.
pub struct HouseTeamRepo;

impl HouseTeamRepo {
    /// Insert a new house team, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHouseTeam) -> Result<HouseTeam, sqlx::Error> {
        let query = format!(
            "INSERT INTO house_teams (name, show_time)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HouseTeam>(&query)
            .bind(&input.name)
            .bind(&input.show_time)
            .fetch_one(pool)
            .await
    }

    /// Find a house team by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HouseTeam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM house_teams WHERE id = $1");
        sqlx::query_as::<_, HouseTeam>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all house teams ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<HouseTeam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM house_teams ORDER BY name, id");
        sqlx::query_as::<_, HouseTeam>(&query).fetch_all(pool).await
    }

    /// The videos attached to a team, in attachment order.
    pub async fn videos_for_team(pool: &PgPool, team_id: DbId) -> Result<Vec<Video>, sqlx::Error> {
        let query = "SELECT v.id, v.name, v.description, v.video_url, v.created_at, v.updated_at
             FROM videos v
             JOIN house_team_videos tv ON tv.video_id = v.id
             WHERE tv.house_team_id = $1
             ORDER BY v.id";
        sqlx::query_as::<_, Video>(query)
            .bind(team_id)
            .fetch_all(pool)
            .await
    }

    /// Attach a video to a team. Re-attaching is a no-op.
    pub async fn add_video(pool: &PgPool, team_id: DbId, video_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO house_team_videos (house_team_id, video_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(team_id)
        .bind(video_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
