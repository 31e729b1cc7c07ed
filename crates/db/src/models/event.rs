//! Event catalog model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub start_time: Option<Timestamp>,
    pub max_tickets: Option<i32>,
    pub tickets_sold: i32,
    pub ticket_price: Decimal,
    pub banner_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub bio: String,
    pub start_time: Option<Timestamp>,
    pub max_tickets: Option<i32>,
    pub ticket_price: Decimal,
    pub banner_url: Option<String>,
}

/// DTO for updating an event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub start_time: Option<Timestamp>,
    pub max_tickets: Option<i32>,
    pub tickets_sold: Option<i32>,
    pub ticket_price: Option<Decimal>,
    pub banner_url: Option<String>,
}
