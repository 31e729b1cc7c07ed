//! House team catalog model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A house team row from the `house_teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HouseTeam {
    pub id: DbId,
    pub name: String,
    pub show_time: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new house team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHouseTeam {
    pub name: String,
    pub show_time: Option<String>,
}
