//! Catalog reference data consumed by group and focus widgets.
//!
//! These types mirror what the catalog provider hands the composition
//! engine. They are plain resolved values; the `db` crate maps rows into
//! them and `projection` turns them into transport data.

use chrono::{Datelike, NaiveDate, Timelike};
use rust_decimal::Decimal;

use crate::types::{DbId, Timestamp};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub start_time: Option<Timestamp>,
    pub max_tickets: Option<i32>,
    pub tickets_sold: i32,
    pub ticket_price: Decimal,
    pub banner_url: Option<String>,
}

impl Event {
    /// Remaining ticket count, unknown when the event has no cap.
    pub fn tickets_left(&self) -> Option<i32> {
        self.max_tickets.map(|max| max - self.tickets_sold)
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub headshot_url: Option<String>,
    pub teaches: bool,
    pub performs: bool,
}

impl Person {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// House team summary nested in person projections.
#[derive(Debug, Clone)]
pub struct HouseTeamRef {
    pub id: DbId,
    pub name: String,
    pub show_time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HouseTeam {
    pub id: DbId,
    pub name: String,
    pub show_time: Option<String>,
    pub performers: Vec<Person>,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassType {
    Improv,
    Sketch,
    Acting,
    Workshop,
}

impl ClassType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "IMPROV" => Some(ClassType::Improv),
            "SKETCH" => Some(ClassType::Sketch),
            "ACTING" => Some(ClassType::Acting),
            "WORKSHOP" => Some(ClassType::Workshop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::Improv => "IMPROV",
            ClassType::Sketch => "SKETCH",
            ClassType::Acting => "ACTING",
            ClassType::Workshop => "WORKSHOP",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApeClass {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub class_type: ClassType,
    pub price: Decimal,
    pub start_date: Option<Timestamp>,
    pub banner_url: Option<String>,
    pub teacher: Option<Person>,
}

#[derive(Debug, Clone)]
pub struct Video {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub video_url: String,
}

/// User-friendly rendering of a calendar day relative to `today`:
/// "TONIGHT", "Tomorrow", or "Friday, June 5".
pub fn friendly_day(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "TONIGHT".to_string()
    } else if date == today.succ_opt().unwrap_or(today) {
        "Tomorrow".to_string()
    } else {
        let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
        let month = MONTHS[date.month0() as usize];
        format!("{weekday}, {month} {}", date.day())
    }
}

/// Day label for an event start, relative to the injected reference time.
pub fn event_day(start_time: Timestamp, now: Timestamp) -> String {
    friendly_day(start_time.date_naive(), now.date_naive())
}

/// Hour-resolution clock label for an event start, e.g. "8 pm".
pub fn event_time(start_time: Timestamp) -> String {
    let hour = start_time.time().hour();
    match hour {
        0 => "12 am".to_string(),
        1..=11 => format!("{hour} am"),
        12 => "12 pm".to_string(),
        _ => format!("{} pm", hour - 12),
    }
}
