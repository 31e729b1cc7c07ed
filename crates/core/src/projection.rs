//! Data projections: the plain nested structures served to API consumers.
//!
//! `page_data` is the top of the pipeline: it takes a resolved page, its
//! widgets in join order, and the reference time, filters for activation,
//! and emits the transport representation. Every widget projection carries
//! `{id, name, width, type}`; variant-specific keys sit alongside them via
//! `#[serde(flatten)]`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{
    event_day, event_time, friendly_day, ApeClass, Event, HouseTeam, HouseTeamRef, Person, Video,
};
use crate::link;
use crate::page::Page;
use crate::text;
use crate::types::{DbId, Timestamp};
use crate::widget::{Widget, WidgetVariant};

#[derive(Debug, Serialize)]
pub struct PageData {
    pub name: String,
    pub background: BackgroundData,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub nav_bar_color: Option<String>,
    pub nav_bar_text_color: Option<String>,
    pub widgets: Vec<WidgetData>,
}

/// Two-variant background descriptor, selected by the page's gradient flag.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundData {
    Gradient {
        start_color: Option<String>,
        end_color: Option<String>,
    },
    SolidColor {
        color: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct WidgetData {
    pub id: DbId,
    pub name: String,
    pub width: Option<i32>,
    #[serde(flatten)]
    pub body: WidgetBody,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WidgetBody {
    Text(TextData),
    Banner(BannerData),
    Carousel(CarouselData),
    Audio(AudioData),
    VideoClip(VideoClipData),
    Group(GroupData),
    EventFocus(EventFocusData),
    PersonFocus(PersonFocusData),
    HouseTeamFocus(HouseTeamFocusData),
    ApeClassFocus(ApeClassFocusData),
}

#[derive(Debug, Serialize)]
pub struct TextData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
    pub text_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageRef {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct BannerData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub image: ImageRef,
    /// Present only when the banner's generic link resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CarouselData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub images: Vec<CarouselImageData>,
}

#[derive(Debug, Serialize)]
pub struct CarouselImageData {
    pub image: ImageRef,
    pub path: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct AudioData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: Option<String>,
    pub audio_source: String,
}

#[derive(Debug, Serialize)]
pub struct VideoClipData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: Option<String>,
    pub video_source: String,
}

/// Group widgets report their layout as `type` and discriminate member
/// payloads with `item_type`.
#[derive(Debug, Serialize)]
pub struct GroupData {
    #[serde(rename = "type")]
    pub display: &'static str,
    pub item_type: &'static str,
    pub items: Vec<GroupItemData>,
}

#[derive(Debug, Serialize)]
pub struct GroupItemData {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub class_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventFocusData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub event: EventData,
}

#[derive(Debug, Serialize)]
pub struct EventData {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub event_time: Option<String>,
    pub event_day: Option<String>,
    pub ticket_price: Decimal,
    pub name_with_date: Option<String>,
    pub tickets_left: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonFocusData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub person: PersonData,
}

#[derive(Debug, Serialize)]
pub struct PersonData {
    pub id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub teaches: bool,
    pub performs: bool,
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub house_teams: Vec<HouseTeamRefData>,
}

#[derive(Debug, Serialize)]
pub struct HouseTeamRefData {
    pub id: DbId,
    pub name: String,
    pub path: String,
    pub show_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HouseTeamFocusData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub house_team: HouseTeamData,
}

#[derive(Debug, Serialize)]
pub struct HouseTeamData {
    pub id: DbId,
    pub name: String,
    pub path: String,
    pub show_time: Option<String>,
    pub performers: Vec<PersonData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<VideoEntryData>,
}

#[derive(Debug, Serialize)]
pub struct VideoEntryData {
    pub video_source: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApeClassFocusData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ape_class: ApeClassData,
}

#[derive(Debug, Serialize)]
pub struct ApeClassData {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    #[serde(rename = "type")]
    pub class_type: &'static str,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Box<PersonData>>,
}

/// Project a page and its widgets (in join order) at the given time.
///
/// Only widgets active at `now` appear; their relative order is preserved.
pub fn page_data(page: &Page, widgets: &[Widget], now: Timestamp) -> PageData {
    PageData {
        name: page.name.clone(),
        background: background_data(page),
        text_color: page.text_color.clone(),
        button_color: page.button_color.clone(),
        button_text_color: page.button_text_color.clone(),
        nav_bar_color: page.nav_bar_color.clone(),
        nav_bar_text_color: page.nav_bar_text_color.clone(),
        widgets: widgets
            .iter()
            .filter(|w| w.is_active(now))
            .map(|w| widget_data(w, now))
            .collect(),
    }
}

fn background_data(page: &Page) -> BackgroundData {
    if page.background_gradient {
        BackgroundData::Gradient {
            start_color: page.background_start_color.clone(),
            end_color: page.background_end_color.clone(),
        }
    } else {
        BackgroundData::SolidColor {
            color: page.background_start_color.clone(),
        }
    }
}

/// Project a single resolved widget at the given time.
pub fn widget_data(widget: &Widget, now: Timestamp) -> WidgetData {
    let body = match &widget.variant {
        WidgetVariant::Text {
            content,
            text_color,
        } => WidgetBody::Text(TextData {
            kind: "text",
            text: text::json_content(content),
            text_color: text_color.clone(),
        }),
        WidgetVariant::Banner { image_url, link } => WidgetBody::Banner(BannerData {
            kind: "banner",
            image: ImageRef {
                url: image_url.clone(),
            },
            page_path: link.map(|l| l.api_path()),
        }),
        WidgetVariant::ImageCarousel { items } => {
            let mut visible: Vec<_> = items
                .iter()
                .filter(|item| item.window.is_active(now))
                .collect();
            visible.sort_by_key(|item| item.sort_order);
            WidgetBody::Carousel(CarouselData {
                kind: "image_carousel",
                images: visible
                    .into_iter()
                    .map(|item| CarouselImageData {
                        image: ImageRef {
                            url: item.image_url.clone(),
                        },
                        path: item.link.api_path(),
                        start_date: item.window.start_date,
                        end_date: item.window.end_date,
                    })
                    .collect(),
            })
        }
        WidgetVariant::Audio {
            media_url,
            description,
        } => WidgetBody::Audio(AudioData {
            kind: "audio",
            description: description.clone(),
            audio_source: media_url.clone(),
        }),
        WidgetVariant::VideoClip {
            media_url,
            description,
        } => WidgetBody::VideoClip(VideoClipData {
            kind: "video",
            description: description.clone(),
            video_source: media_url.clone(),
        }),
        WidgetVariant::EventsGroup {
            display_type,
            items,
        } => WidgetBody::Group(GroupData {
            display: display_type.as_str(),
            item_type: "event",
            items: items.iter().map(event_item).collect(),
        }),
        WidgetVariant::PeopleGroup {
            display_type,
            items,
        } => WidgetBody::Group(GroupData {
            display: display_type.as_str(),
            item_type: "person",
            items: items.iter().map(person_item).collect(),
        }),
        WidgetVariant::ApeClassesGroup {
            display_type,
            items,
        } => WidgetBody::Group(GroupData {
            display: display_type.as_str(),
            item_type: "ape_class",
            items: items.iter().map(ape_class_item).collect(),
        }),
        WidgetVariant::VideosGroup {
            display_type,
            items,
        } => WidgetBody::Group(GroupData {
            display: display_type.as_str(),
            item_type: "video",
            items: items.iter().map(video_item).collect(),
        }),
        WidgetVariant::EventFocus { event } => WidgetBody::EventFocus(EventFocusData {
            kind: "event_focus",
            event: event_data(event, now),
        }),
        WidgetVariant::PersonFocus {
            person,
            house_teams,
        } => WidgetBody::PersonFocus(PersonFocusData {
            kind: "person_focus",
            person: person_data(person, house_teams),
        }),
        WidgetVariant::HouseTeamFocus { house_team } => {
            WidgetBody::HouseTeamFocus(HouseTeamFocusData {
                kind: "house_team_focus",
                house_team: house_team_data(house_team),
            })
        }
        WidgetVariant::ApeClassFocus { ape_class } => {
            WidgetBody::ApeClassFocus(ApeClassFocusData {
                kind: "ape_class_focus",
                ape_class: ape_class_data(ape_class, now),
            })
        }
    };

    WidgetData {
        id: widget.id,
        name: widget.name.clone(),
        width: widget.width,
        body,
    }
}

fn event_item(event: &Event) -> GroupItemData {
    GroupItemData {
        id: event.id,
        name: event.name.clone(),
        path: Some(link::event_path(event.id)),
        image: event.banner_url.clone(),
        class_type: None,
        video_source: None,
        description: None,
    }
}

fn person_item(person: &Person) -> GroupItemData {
    GroupItemData {
        id: person.id,
        name: person.name(),
        path: Some(link::person_path(person.id)),
        image: person.headshot_url.clone(),
        class_type: None,
        video_source: None,
        description: None,
    }
}

fn ape_class_item(ape_class: &ApeClass) -> GroupItemData {
    GroupItemData {
        id: ape_class.id,
        name: ape_class.name.clone(),
        path: Some(link::ape_class_path(ape_class.id)),
        image: ape_class.banner_url.clone(),
        class_type: Some(ape_class.class_type.as_str()),
        video_source: None,
        description: None,
    }
}

// Videos are not individually addressable, so their items carry the source
// URL instead of a path.
fn video_item(video: &Video) -> GroupItemData {
    GroupItemData {
        id: video.id,
        name: video.name.clone(),
        path: None,
        image: None,
        class_type: None,
        video_source: Some(video.video_url.clone()),
        description: video.description.clone(),
    }
}

/// Full event projection, nested by focus widgets and the events endpoint.
pub fn event_data(event: &Event, now: Timestamp) -> EventData {
    let day = event.start_time.map(|start| event_day(start, now));
    EventData {
        id: event.id,
        name: event.name.clone(),
        bio: event.bio.clone(),
        event_time: event.start_time.map(event_time),
        name_with_date: day.as_ref().map(|d| format!("{}: {}", event.name, d)),
        event_day: day,
        ticket_price: event.ticket_price,
        tickets_left: event.tickets_left(),
        banner_url: event.banner_url.clone(),
    }
}

/// Full person projection. `house_teams` is empty when nested inside a
/// house-team projection to avoid recursing back into the team.
pub fn person_data(person: &Person, house_teams: &[HouseTeamRef]) -> PersonData {
    PersonData {
        id: person.id,
        name: person.name(),
        bio: person.bio.clone(),
        teaches: person.teaches,
        performs: person.performs,
        path: link::person_path(person.id),
        house_teams: house_teams
            .iter()
            .map(|team| HouseTeamRefData {
                id: team.id,
                name: team.name.clone(),
                path: link::house_team_path(team.id),
                show_time: team.show_time.clone(),
            })
            .collect(),
    }
}

/// Full house-team projection with performers (sans their team lists).
pub fn house_team_data(team: &HouseTeam) -> HouseTeamData {
    HouseTeamData {
        id: team.id,
        name: team.name.clone(),
        path: link::house_team_path(team.id),
        show_time: team.show_time.clone(),
        performers: team
            .performers
            .iter()
            .map(|person| person_data(person, &[]))
            .collect(),
        videos: team
            .videos
            .iter()
            .map(|video| VideoEntryData {
                video_source: video.video_url.clone(),
                name: video.name.clone(),
                description: video.description.clone(),
            })
            .collect(),
    }
}

/// Full class projection, nested by focus widgets and the classes endpoint.
pub fn ape_class_data(ape_class: &ApeClass, now: Timestamp) -> ApeClassData {
    ApeClassData {
        id: ape_class.id,
        name: ape_class.name.clone(),
        bio: ape_class.bio.clone(),
        class_type: ape_class.class_type.as_str(),
        price: ape_class.price,
        start_day: ape_class
            .start_date
            .map(|d| friendly_day(d.date_naive(), now.date_naive())),
        banner_url: ape_class.banner_url.clone(),
        teacher: ape_class
            .teacher
            .as_ref()
            .map(|teacher| Box::new(person_data(teacher, &[]))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::activation::ActivationWindow;
    use crate::catalog::ClassType;
    use crate::link::LinkTarget;
    use crate::widget::{CarouselItem, DisplayType, Widget, WidgetVariant};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 7, 20, 0, 0).unwrap()
    }

    fn blank_page(name: &str) -> Page {
        Page {
            id: 1,
            name: name.to_string(),
            slug: None,
            draft: false,
            background_gradient: false,
            background_start_color: None,
            background_end_color: None,
            text_color: None,
            button_color: None,
            button_text_color: None,
            nav_bar_color: None,
            nav_bar_text_color: None,
        }
    }

    fn text_widget(id: DbId, name: &str, content: &str, window: ActivationWindow) -> Widget {
        Widget {
            id,
            name: name.to_string(),
            width: None,
            window,
            variant: WidgetVariant::Text {
                content: content.to_string(),
                text_color: None,
            },
        }
    }

    fn sample_event(id: DbId, name: &str, start_time: Option<Timestamp>) -> Event {
        Event {
            id,
            name: name.to_string(),
            bio: "Every Friday!".to_string(),
            start_time,
            max_tickets: Some(80),
            tickets_sold: 30,
            ticket_price: Decimal::new(1000, 2),
            banner_url: Some("/media/banners/laffs.png".to_string()),
        }
    }

    #[test]
    fn page_keeps_only_active_widgets_in_order() {
        let page = blank_page("Testing widget expiration");
        let widgets = vec![
            text_widget(1, "always", "no time limit", ActivationWindow::default()),
            text_widget(
                2,
                "future",
                "not yet visible",
                ActivationWindow::new(Some(now() + Duration::days(1)), None),
            ),
            text_widget(
                3,
                "past",
                "I am expired",
                ActivationWindow::new(None, Some(now() - Duration::days(1))),
            ),
            text_widget(
                4,
                "current",
                "game on",
                ActivationWindow::new(
                    Some(now() - Duration::days(1)),
                    Some(now() + Duration::days(1)),
                ),
            ),
        ];

        let data = serde_json::to_value(page_data(&page, &widgets, now())).unwrap();
        let texts: Vec<_> = data["widgets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["text"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["no time limit", "game on"]);
    }

    #[test]
    fn widget_projection_always_carries_base_keys() {
        let widget = text_widget(9, "test", "Some text", ActivationWindow::default());
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        for key in ["id", "name", "width", "type"] {
            assert!(data.get(key).is_some(), "missing base key {key}");
        }
        assert_eq!(data["type"], "text");
        assert_eq!(data["text"], "Some text");
        assert!(data["width"].is_null());
    }

    #[test]
    fn text_content_is_normalized_for_transport() {
        let widget = text_widget(
            1,
            "test",
            "Some text.<br />\n\n\rSome more text on a new line.",
            ActivationWindow::default(),
        );
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        assert_eq!(data["text"], "Some text.<br />Some more text on a new line.");
    }

    #[test]
    fn banner_without_link_omits_page_path() {
        let widget = Widget {
            id: 5,
            name: "banner test".to_string(),
            width: None,
            window: ActivationWindow::default(),
            variant: WidgetVariant::Banner {
                image_url: "/media/banner.png".to_string(),
                link: None,
            },
        };
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        assert_eq!(data["type"], "banner");
        assert_eq!(data["image"]["url"], "/media/banner.png");
        assert!(data.get("page_path").is_none());
    }

    #[test]
    fn banner_link_resolves_to_canonical_path() {
        let widget = Widget {
            id: 5,
            name: "banner test".to_string(),
            width: None,
            window: ActivationWindow::default(),
            variant: WidgetVariant::Banner {
                image_url: "/media/banner.png".to_string(),
                link: Some(LinkTarget::Page(12)),
            },
        };
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        assert_eq!(data["page_path"], "/api/v1/pages/12");
    }

    #[test]
    fn carousel_sorts_and_filters_items() {
        let item = |id, sort_order, window| CarouselItem {
            id,
            image_url: format!("/media/carousel/{id}.png"),
            link: LinkTarget::Page(id),
            sort_order,
            window,
        };
        let widget = Widget {
            id: 3,
            name: "group of images".to_string(),
            width: None,
            window: ActivationWindow::default(),
            variant: WidgetVariant::ImageCarousel {
                items: vec![
                    item(2, 2, ActivationWindow::new(None, Some(now() - Duration::days(1)))),
                    item(3, 3, ActivationWindow::default()),
                    item(1, 1, ActivationWindow::default()),
                    item(
                        4,
                        4,
                        ActivationWindow::new(Some(now() + Duration::days(1)), None),
                    ),
                ],
            },
        };
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        let images = data["images"].as_array().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0]["path"], "/api/v1/pages/1");
        assert_eq!(images[1]["path"], "/api/v1/pages/3");
        for image in images {
            let keys: std::collections::BTreeSet<_> =
                image.as_object().unwrap().keys().cloned().collect();
            let expected: std::collections::BTreeSet<_> =
                ["image", "path", "start_date", "end_date"]
                    .into_iter()
                    .map(String::from)
                    .collect();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn events_group_projects_item_summaries() {
        let widget = Widget {
            id: 7,
            name: "Upcoming Shows".to_string(),
            width: None,
            window: ActivationWindow::default(),
            variant: WidgetVariant::EventsGroup {
                display_type: DisplayType::Gallery,
                items: vec![sample_event(1, "Friday Night Laffs", Some(now()))],
            },
        };
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        assert_eq!(data["type"], "gallery");
        assert_eq!(data["item_type"], "event");
        let item = &data["items"][0];
        assert_eq!(item["name"], "Friday Night Laffs");
        assert_eq!(item["path"], "/api/v1/events/1");
        assert_eq!(item["image"], "/media/banners/laffs.png");
    }

    #[test]
    fn class_group_items_carry_their_class_type() {
        let widget = Widget {
            id: 8,
            name: "Improv Classes".to_string(),
            width: None,
            window: ActivationWindow::default(),
            variant: WidgetVariant::ApeClassesGroup {
                display_type: DisplayType::RowFocus,
                items: vec![ApeClass {
                    id: 2,
                    name: "Improv 101".to_string(),
                    bio: "Learn the basics".to_string(),
                    class_type: ClassType::Improv,
                    price: Decimal::new(25000, 2),
                    start_date: None,
                    banner_url: None,
                    teacher: None,
                }],
            },
        };
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        assert_eq!(data["type"], "row_focus");
        assert_eq!(data["item_type"], "ape_class");
        assert_eq!(data["items"][0]["type"], "IMPROV");
        assert_eq!(data["items"][0]["path"], "/api/v1/classes/2");
    }

    #[test]
    fn event_focus_nests_full_event_data() {
        let widget = Widget {
            id: 11,
            name: "Tonight".to_string(),
            width: Some(2),
            window: ActivationWindow::default(),
            variant: WidgetVariant::EventFocus {
                event: sample_event(4, "Friday Night Laffs", Some(now())),
            },
        };
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        assert_eq!(data["type"], "event_focus");
        assert_eq!(data["width"], 2);
        let event = &data["event"];
        assert_eq!(event["event_day"], "TONIGHT");
        assert_eq!(event["event_time"], "8 pm");
        assert_eq!(event["name_with_date"], "Friday Night Laffs: TONIGHT");
        assert_eq!(event["tickets_left"], 50);
    }

    #[test]
    fn background_descriptor_follows_gradient_flag() {
        let mut page = blank_page("Featured");
        page.background_start_color = Some("#111111".to_string());
        page.background_end_color = Some("#222222".to_string());

        let solid = serde_json::to_value(page_data(&page, &[], now())).unwrap();
        assert_eq!(solid["background"]["type"], "solid_color");
        assert_eq!(solid["background"]["color"], "#111111");

        page.background_gradient = true;
        let gradient = serde_json::to_value(page_data(&page, &[], now())).unwrap();
        assert_eq!(gradient["background"]["type"], "gradient");
        assert_eq!(gradient["background"]["start_color"], "#111111");
        assert_eq!(gradient["background"]["end_color"], "#222222");
    }

    #[test]
    fn house_team_focus_nests_performers_without_team_recursion() {
        let person = Person {
            id: 1,
            first_name: "Funnyboy".to_string(),
            last_name: "Jones".to_string(),
            bio: None,
            headshot_url: None,
            teaches: false,
            performs: true,
        };
        let widget = Widget {
            id: 12,
            name: "The Goof Troop".to_string(),
            width: None,
            window: ActivationWindow::default(),
            variant: WidgetVariant::HouseTeamFocus {
                house_team: HouseTeam {
                    id: 3,
                    name: "The Goof Troop".to_string(),
                    show_time: Some("Fridays at 8".to_string()),
                    performers: vec![person],
                    videos: vec![],
                },
            },
        };
        let data = serde_json::to_value(widget_data(&widget, now())).unwrap();
        assert_eq!(data["type"], "house_team_focus");
        let team = &data["house_team"];
        assert_eq!(team["performers"][0]["name"], "Funnyboy Jones");
        assert!(team["performers"][0].get("house_teams").is_none());
        assert!(team.get("videos").is_none());
    }
}
