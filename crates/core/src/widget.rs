//! The widget sum type: one case per concrete content-block kind.
//!
//! A widget's kind is fixed at creation and never changes. Persistence
//! stores all variants in one table behind a `kind` discriminator; this
//! module is the in-memory closed sum type that discriminator resolves to.

use crate::activation::ActivationWindow;
use crate::catalog::{ApeClass, Event, HouseTeam, HouseTeamRef, Person, Video};
use crate::link::LinkTarget;
use crate::types::DbId;

/// Discriminator for the concrete widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Text,
    Banner,
    ImageCarousel,
    Audio,
    VideoClip,
    EventsGroup,
    PeopleGroup,
    ApeClassesGroup,
    VideosGroup,
    EventFocus,
    PersonFocus,
    HouseTeamFocus,
    ApeClassFocus,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 13] = [
        WidgetKind::Text,
        WidgetKind::Banner,
        WidgetKind::ImageCarousel,
        WidgetKind::Audio,
        WidgetKind::VideoClip,
        WidgetKind::EventsGroup,
        WidgetKind::PeopleGroup,
        WidgetKind::ApeClassesGroup,
        WidgetKind::VideosGroup,
        WidgetKind::EventFocus,
        WidgetKind::PersonFocus,
        WidgetKind::HouseTeamFocus,
        WidgetKind::ApeClassFocus,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(WidgetKind::Text),
            "banner" => Some(WidgetKind::Banner),
            "image_carousel" => Some(WidgetKind::ImageCarousel),
            "audio" => Some(WidgetKind::Audio),
            "video" => Some(WidgetKind::VideoClip),
            "events_group" => Some(WidgetKind::EventsGroup),
            "people_group" => Some(WidgetKind::PeopleGroup),
            "ape_classes_group" => Some(WidgetKind::ApeClassesGroup),
            "videos_group" => Some(WidgetKind::VideosGroup),
            "event_focus" => Some(WidgetKind::EventFocus),
            "person_focus" => Some(WidgetKind::PersonFocus),
            "house_team_focus" => Some(WidgetKind::HouseTeamFocus),
            "ape_class_focus" => Some(WidgetKind::ApeClassFocus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Text => "text",
            WidgetKind::Banner => "banner",
            WidgetKind::ImageCarousel => "image_carousel",
            WidgetKind::Audio => "audio",
            WidgetKind::VideoClip => "video",
            WidgetKind::EventsGroup => "events_group",
            WidgetKind::PeopleGroup => "people_group",
            WidgetKind::ApeClassesGroup => "ape_classes_group",
            WidgetKind::VideosGroup => "videos_group",
            WidgetKind::EventFocus => "event_focus",
            WidgetKind::PersonFocus => "person_focus",
            WidgetKind::HouseTeamFocus => "house_team_focus",
            WidgetKind::ApeClassFocus => "ape_class_focus",
        }
    }

    /// Whether this kind carries a hand-picked member table.
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            WidgetKind::EventsGroup
                | WidgetKind::PeopleGroup
                | WidgetKind::ApeClassesGroup
                | WidgetKind::VideosGroup
        )
    }
}

/// Presentation layout for group widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    Gallery,
    RowFocus,
}

impl DisplayType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gallery" => Some(DisplayType::Gallery),
            "row_focus" => Some(DisplayType::RowFocus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Gallery => "gallery",
            DisplayType::RowFocus => "row_focus",
        }
    }
}

impl Default for DisplayType {
    fn default() -> Self {
        DisplayType::Gallery
    }
}

/// An ordered, time-windowed child of an image carousel.
#[derive(Debug, Clone)]
pub struct CarouselItem {
    pub id: DbId,
    pub image_url: String,
    /// Required at save time; items whose target has since vanished are
    /// dropped during composition rather than failing the page.
    pub link: LinkTarget,
    pub sort_order: i32,
    pub window: ActivationWindow,
}

/// A fully resolved widget: common attributes plus the concrete variant.
#[derive(Debug, Clone)]
pub struct Widget {
    pub id: DbId,
    pub name: String,
    pub width: Option<i32>,
    pub window: ActivationWindow,
    pub variant: WidgetVariant,
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        self.variant.kind()
    }

    pub fn is_active(&self, as_of: crate::types::Timestamp) -> bool {
        self.window.is_active(as_of)
    }
}

/// The concrete variant payloads.
///
/// Group variants hold their already-selected member lists: the selection
/// policy (hand-picked wins over the computed default set) is applied while
/// loading, so by this point exactly one source has been consulted.
#[derive(Debug, Clone)]
pub enum WidgetVariant {
    Text {
        content: String,
        text_color: Option<String>,
    },
    Banner {
        image_url: String,
        link: Option<LinkTarget>,
    },
    ImageCarousel {
        items: Vec<CarouselItem>,
    },
    Audio {
        media_url: String,
        description: Option<String>,
    },
    VideoClip {
        media_url: String,
        description: Option<String>,
    },
    EventsGroup {
        display_type: DisplayType,
        items: Vec<Event>,
    },
    PeopleGroup {
        display_type: DisplayType,
        items: Vec<Person>,
    },
    ApeClassesGroup {
        display_type: DisplayType,
        items: Vec<ApeClass>,
    },
    VideosGroup {
        display_type: DisplayType,
        items: Vec<Video>,
    },
    EventFocus {
        event: Event,
    },
    PersonFocus {
        person: Person,
        house_teams: Vec<HouseTeamRef>,
    },
    HouseTeamFocus {
        house_team: HouseTeam,
    },
    ApeClassFocus {
        ape_class: ApeClass,
    },
}

impl WidgetVariant {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetVariant::Text { .. } => WidgetKind::Text,
            WidgetVariant::Banner { .. } => WidgetKind::Banner,
            WidgetVariant::ImageCarousel { .. } => WidgetKind::ImageCarousel,
            WidgetVariant::Audio { .. } => WidgetKind::Audio,
            WidgetVariant::VideoClip { .. } => WidgetKind::VideoClip,
            WidgetVariant::EventsGroup { .. } => WidgetKind::EventsGroup,
            WidgetVariant::PeopleGroup { .. } => WidgetKind::PeopleGroup,
            WidgetVariant::ApeClassesGroup { .. } => WidgetKind::ApeClassesGroup,
            WidgetVariant::VideosGroup { .. } => WidgetKind::VideosGroup,
            WidgetVariant::EventFocus { .. } => WidgetKind::EventFocus,
            WidgetVariant::PersonFocus { .. } => WidgetKind::PersonFocus,
            WidgetVariant::HouseTeamFocus { .. } => WidgetKind::HouseTeamFocus,
            WidgetVariant::ApeClassFocus { .. } => WidgetKind::ApeClassFocus,
        }
    }
}
