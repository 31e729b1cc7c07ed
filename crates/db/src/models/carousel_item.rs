//! Carousel child items: ordered, time-windowed images with a required link.

use marquee_core::error::CoreError;
use marquee_core::link::LinkTarget;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `carousel_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarouselItem {
    pub id: DbId,
    pub widget_id: DbId,
    pub image_url: String,
    pub sort_order: i32,
    pub link_kind: Option<String>,
    pub link_id: Option<DbId>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a carousel item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCarouselItem {
    pub image_url: String,
    pub sort_order: i32,
    pub link_kind: Option<String>,
    pub link_id: Option<DbId>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

impl CreateCarouselItem {
    /// Items must always link somewhere; the form surfaces this as a
    /// field-level error on `link`.
    pub fn validate(&self) -> Result<(), CoreError> {
        match (self.link_kind.as_deref(), self.link_id) {
            (Some(kind), Some(id)) => {
                LinkTarget::from_parts(kind, id).map_err(|_| CoreError::Validation {
                    field: "link",
                    message: format!("'{kind}' is not a linkable type"),
                })?;
                Ok(())
            }
            _ => Err(CoreError::Validation {
                field: "link",
                message: "This field is required.".to_string(),
            }),
        }
    }
}

/// DTO for updating a carousel item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCarouselItem {
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub link_kind: Option<String>,
    pub link_id: Option<DbId>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use marquee_core::error::CoreError;

    use super::*;

    #[test]
    fn link_is_required() {
        let input = CreateCarouselItem {
            image_url: "/media/carousel/1.png".into(),
            sort_order: 1,
            link_kind: None,
            link_id: None,
            start_date: None,
            end_date: None,
        };
        assert_matches!(
            input.validate(),
            Err(CoreError::Validation { field: "link", .. })
        );
    }

    #[test]
    fn valid_link_passes() {
        let input = CreateCarouselItem {
            image_url: "/media/carousel/1.png".into(),
            sort_order: 1,
            link_kind: Some("page".into()),
            link_id: Some(4),
            start_date: None,
            end_date: None,
        };
        assert!(input.validate().is_ok());
    }
}
