//! Repository for the `people` table and house-team memberships.

use sqlx::PgPool;

use marquee_core::types::DbId;

use crate::models::house_team::HouseTeam;
use crate::models::person::{CreatePerson, Person};

const COLUMNS: &str = "id, first_name, last_name, bio, headshot_url, teaches, performs, \
     active, created_at, updated_at";

const ALIASED: &str = "p.id, p.first_name, p.last_name, p.bio, p.headshot_url, p.teaches, \
     p.performs, p.active, p.created_at, p.updated_at";

/// Provides CRUD and group-widget queries for people.
///
/// Inactive people are excluded by an explicit flag on each query rather
/// than ambient state, so every call site shows whether it sees them.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (first_name, last_name, bio, headshot_url, teaches, performs)
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE), COALESCE($6, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.bio)
            .bind(&input.headshot_url)
            .bind(input.teaches)
            .bind(input.performs)
            .fetch_one(pool)
            .await
    }

    /// Find a person by its internal ID, regardless of the active flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List people ordered by first name.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM people WHERE ($1 OR active) ORDER BY first_name, last_name, id"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Active members of a house team, ordered by first name.
    pub async fn by_house_team(pool: &PgPool, team_id: DbId) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {ALIASED}
             FROM people p
             JOIN house_team_memberships m ON m.person_id = p.id
             WHERE m.house_team_id = $1 AND p.active
             ORDER BY p.first_name, p.last_name, p.id"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await
    }

    /// The hand-picked (active) people of a group widget.
    pub async fn handpicked_for_widget(
        pool: &PgPool,
        widget_id: DbId,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {ALIASED}
             FROM people p
             JOIN widget_people wp ON wp.person_id = p.id
             WHERE wp.widget_id = $1 AND p.active
             ORDER BY p.first_name, p.last_name, p.id"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(widget_id)
            .fetch_all(pool)
            .await
    }

    /// The house teams a person performs on.
    pub async fn teams_for_person(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Vec<HouseTeam>, sqlx::Error> {
        let query = "SELECT t.id, t.name, t.show_time, t.created_at, t.updated_at
             FROM house_teams t
             JOIN house_team_memberships m ON m.house_team_id = t.id
             WHERE m.person_id = $1
             ORDER BY t.name, t.id";
        sqlx::query_as::<_, HouseTeam>(query)
            .bind(person_id)
            .fetch_all(pool)
            .await
    }

    /// Add a person to a house team. Re-adding is a no-op.
    pub async fn add_membership(
        pool: &PgPool,
        person_id: DbId,
        team_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO house_team_memberships (person_id, house_team_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(person_id)
        .bind(team_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
