//! Video catalog model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A video row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub video_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new video.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub name: String,
    pub description: Option<String>,
    pub video_url: String,
}
