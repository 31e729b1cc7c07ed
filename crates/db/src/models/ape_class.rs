//! Class catalog model and DTOs.

use chrono::NaiveDate;
use marquee_core::catalog::ClassType;
use marquee_core::error::CoreError;
use marquee_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A class row from the `ape_classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApeClass {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub class_type: String,
    pub price: Decimal,
    pub teacher_id: Option<DbId>,
    pub start_date: Option<Timestamp>,
    pub num_sessions: i32,
    pub max_enrollment: i32,
    pub enrollment_opens: Option<NaiveDate>,
    pub enrollment_closes: Option<NaiveDate>,
    pub banner_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new class.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApeClass {
    pub name: String,
    pub bio: String,
    pub class_type: String,
    pub price: Decimal,
    pub teacher_id: Option<DbId>,
    pub start_date: Option<Timestamp>,
    /// Defaults to 4 if omitted.
    pub num_sessions: Option<i32>,
    /// Defaults to 12 if omitted.
    pub max_enrollment: Option<i32>,
    pub enrollment_opens: Option<NaiveDate>,
    pub enrollment_closes: Option<NaiveDate>,
    pub banner_url: Option<String>,
}

impl CreateApeClass {
    pub fn validate(&self) -> Result<(), CoreError> {
        if ClassType::parse(&self.class_type).is_none() {
            return Err(CoreError::Validation {
                field: "class_type",
                message: format!("'{}' is not a valid class type", self.class_type),
            });
        }
        Ok(())
    }
}
