//! Person catalog model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person row from the `people` table.
///
/// `active` is a soft flag; default queries exclude inactive people via an
/// explicit `include_inactive` parameter on the repository.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub headshot_url: Option<String>,
    pub teaches: bool,
    pub performs: bool,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub headshot_url: Option<String>,
    /// Defaults to false if omitted.
    pub teaches: Option<bool>,
    /// Defaults to true if omitted.
    pub performs: Option<bool>,
}
