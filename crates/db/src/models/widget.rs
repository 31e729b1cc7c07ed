//! Widget entity model and DTOs.
//!
//! All widget kinds share one table behind a `kind` discriminator, so the
//! row struct carries every variant column as nullable. The create DTO is a
//! tagged enum: the editing schema for each kind is fixed at compile time,
//! and the discriminator can never change after creation.

use marquee_core::colors::validate_optional_color;
use marquee_core::error::CoreError;
use marquee_core::link::LinkTarget;
use marquee_core::types::{DbId, Timestamp};
use marquee_core::widget::{DisplayType, WidgetKind};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A widget row from the `widgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WidgetRow {
    pub id: DbId,
    pub kind: String,
    pub name: String,
    pub width: Option<i32>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub content: Option<String>,
    pub text_color: Option<String>,
    pub image_url: Option<String>,
    pub media_url: Option<String>,
    pub description: Option<String>,
    pub link_kind: Option<String>,
    pub link_id: Option<DbId>,
    pub display_type: Option<String>,
    pub upcoming_events: Option<bool>,
    pub upcoming_events_window: Option<i32>,
    pub source_house_team_id: Option<DbId>,
    pub class_type: Option<String>,
    pub event_id: Option<DbId>,
    pub person_id: Option<DbId>,
    pub house_team_id: Option<DbId>,
    pub ape_class_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a widget: common fields plus the kind-tagged payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWidget {
    pub name: String,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(flatten)]
    pub payload: WidgetPayload,
}

/// Kind-specific creation payload. The `kind` tag doubles as the stored
/// discriminator.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetPayload {
    Text {
        content: String,
        #[serde(default)]
        text_color: Option<String>,
    },
    Banner {
        image_url: String,
        #[serde(default)]
        link_kind: Option<String>,
        #[serde(default)]
        link_id: Option<DbId>,
    },
    ImageCarousel,
    Audio {
        media_url: String,
        #[serde(default)]
        description: Option<String>,
    },
    Video {
        media_url: String,
        #[serde(default)]
        description: Option<String>,
    },
    EventsGroup {
        #[serde(default)]
        display_type: Option<String>,
        #[serde(default)]
        upcoming_events: Option<bool>,
        #[serde(default)]
        upcoming_events_window: Option<i32>,
    },
    PeopleGroup {
        #[serde(default)]
        display_type: Option<String>,
        #[serde(default)]
        source_house_team_id: Option<DbId>,
    },
    ApeClassesGroup {
        #[serde(default)]
        display_type: Option<String>,
        #[serde(default)]
        class_type: Option<String>,
    },
    VideosGroup {
        #[serde(default)]
        display_type: Option<String>,
    },
    EventFocus {
        event_id: DbId,
    },
    PersonFocus {
        person_id: DbId,
    },
    HouseTeamFocus {
        house_team_id: DbId,
    },
    ApeClassFocus {
        ape_class_id: DbId,
    },
}

impl WidgetPayload {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetPayload::Text { .. } => WidgetKind::Text,
            WidgetPayload::Banner { .. } => WidgetKind::Banner,
            WidgetPayload::ImageCarousel => WidgetKind::ImageCarousel,
            WidgetPayload::Audio { .. } => WidgetKind::Audio,
            WidgetPayload::Video { .. } => WidgetKind::VideoClip,
            WidgetPayload::EventsGroup { .. } => WidgetKind::EventsGroup,
            WidgetPayload::PeopleGroup { .. } => WidgetKind::PeopleGroup,
            WidgetPayload::ApeClassesGroup { .. } => WidgetKind::ApeClassesGroup,
            WidgetPayload::VideosGroup { .. } => WidgetKind::VideosGroup,
            WidgetPayload::EventFocus { .. } => WidgetKind::EventFocus,
            WidgetPayload::PersonFocus { .. } => WidgetKind::PersonFocus,
            WidgetPayload::HouseTeamFocus { .. } => WidgetKind::HouseTeamFocus,
            WidgetPayload::ApeClassFocus { .. } => WidgetKind::ApeClassFocus,
        }
    }
}

fn validate_display_type(value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(s) if DisplayType::parse(s).is_none() => Err(CoreError::Validation {
            field: "display_type",
            message: format!("'{s}' is not a valid display type"),
        }),
        _ => Ok(()),
    }
}

fn validate_link(kind: Option<&str>, id: Option<DbId>) -> Result<(), CoreError> {
    match (kind, id) {
        (None, None) => Ok(()),
        (Some(k), Some(id)) => {
            LinkTarget::from_parts(k, id).map_err(|_| CoreError::Validation {
                field: "link",
                message: format!("'{k}' is not a linkable type"),
            })?;
            Ok(())
        }
        _ => Err(CoreError::Validation {
            field: "link",
            message: "link_kind and link_id must be set together".to_string(),
        }),
    }
}

impl CreateWidget {
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.payload {
            WidgetPayload::Text { text_color, .. } => {
                validate_optional_color("text_color", text_color.as_deref())
            }
            WidgetPayload::Banner {
                link_kind, link_id, ..
            } => validate_link(link_kind.as_deref(), *link_id),
            WidgetPayload::EventsGroup { display_type, .. }
            | WidgetPayload::PeopleGroup { display_type, .. }
            | WidgetPayload::VideosGroup { display_type } => {
                validate_display_type(display_type.as_deref())
            }
            WidgetPayload::ApeClassesGroup {
                display_type,
                class_type,
            } => {
                validate_display_type(display_type.as_deref())?;
                match class_type.as_deref() {
                    Some(s) if marquee_core::catalog::ClassType::parse(s).is_none() => {
                        Err(CoreError::Validation {
                            field: "class_type",
                            message: format!("'{s}' is not a valid class type"),
                        })
                    }
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

/// DTO for updating a widget. All fields are optional; `kind` is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWidget {
    pub name: Option<String>,
    pub width: Option<i32>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub content: Option<String>,
    pub text_color: Option<String>,
    pub image_url: Option<String>,
    pub media_url: Option<String>,
    pub description: Option<String>,
    pub link_kind: Option<String>,
    pub link_id: Option<DbId>,
    pub display_type: Option<String>,
    pub upcoming_events: Option<bool>,
    pub upcoming_events_window: Option<i32>,
    pub source_house_team_id: Option<DbId>,
    pub class_type: Option<String>,
    pub event_id: Option<DbId>,
    pub person_id: Option<DbId>,
    pub house_team_id: Option<DbId>,
    pub ape_class_id: Option<DbId>,
}

impl UpdateWidget {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_optional_color("text_color", self.text_color.as_deref())?;
        validate_display_type(self.display_type.as_deref())?;
        if self.link_kind.is_some() || self.link_id.is_some() {
            validate_link(self.link_kind.as_deref(), self.link_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use marquee_core::error::CoreError;
    use marquee_core::widget::WidgetKind;

    use super::*;

    #[test]
    fn payload_tag_matches_stored_kind() {
        let input: CreateWidget = serde_json::from_value(serde_json::json!({
            "name": "test",
            "kind": "text",
            "content": "Some text"
        }))
        .unwrap();
        assert_eq!(input.payload.kind(), WidgetKind::Text);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn carousel_payload_needs_no_fields() {
        let input: CreateWidget = serde_json::from_value(serde_json::json!({
            "name": "carousel",
            "kind": "image_carousel"
        }))
        .unwrap();
        assert_eq!(input.payload.kind(), WidgetKind::ImageCarousel);
    }

    #[test]
    fn banner_link_must_be_paired() {
        let input: CreateWidget = serde_json::from_value(serde_json::json!({
            "name": "banner",
            "kind": "banner",
            "image_url": "/media/banner.png",
            "link_kind": "page"
        }))
        .unwrap();
        assert_matches!(
            input.validate(),
            Err(CoreError::Validation { field: "link", .. })
        );
    }

    #[test]
    fn group_display_type_is_validated() {
        let input: CreateWidget = serde_json::from_value(serde_json::json!({
            "name": "shows",
            "kind": "events_group",
            "display_type": "mosaic"
        }))
        .unwrap();
        assert_matches!(
            input.validate(),
            Err(CoreError::Validation { field: "display_type", .. })
        );
    }
}
