//! Page composition loader.
//!
//! Resolves a page's widget graph out of the polymorphic store into the
//! core sum types: join rows in sort order, each widget row dispatched on
//! its `kind` discriminator, group member lists selected (hand-picked wins
//! over the computed default query), and generic links checked against
//! their targets. Activation filtering happens later, at projection time,
//! against the same injected `now` used for the computed queries here.

use std::collections::HashMap;

use sqlx::PgPool;

use marquee_core::activation::ActivationWindow;
use marquee_core::catalog;
use marquee_core::error::CoreError;
use marquee_core::link::LinkTarget;
use marquee_core::page::{Page as CorePage, PageSlug};
use marquee_core::types::{DbId, Timestamp};
use marquee_core::widget::{
    CarouselItem as CoreCarouselItem, DisplayType, Widget, WidgetKind, WidgetVariant,
};

use crate::models::ape_class::ApeClass as ApeClassRow;
use crate::models::event::Event as EventRow;
use crate::models::house_team::HouseTeam as HouseTeamRow;
use crate::models::page::Page as PageRow;
use crate::models::person::Person as PersonRow;
use crate::models::video::Video as VideoRow;
use crate::models::widget::WidgetRow;
use crate::repositories::{
    ApeClassRepo, CarouselItemRepo, EventRepo, HouseTeamRepo, PageRepo, PageWidgetRepo,
    PersonRepo, VideoRepo, WidgetRepo,
};

/// Errors produced while composing a page.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// How to address a page: by numeric id or by live slug.
#[derive(Debug, Clone, Copy)]
pub enum PageRef<'a> {
    Id(DbId),
    Slug(&'a str),
}

/// Load a page and its widgets, resolved to concrete variants, in join
/// sort order.
///
/// A widget deleted between the join-row read and the widget read leaves a
/// dangling join id; a single re-fetch of the join list reconciles (no
/// concurrent writers are assumed within one request).
pub async fn load_page(
    pool: &PgPool,
    page: PageRef<'_>,
    now: Timestamp,
) -> Result<(CorePage, Vec<Widget>), ComposeError> {
    let page_row = match page {
        PageRef::Id(id) => PageRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("Page", id))?,
        PageRef::Slug(slug) => PageRepo::find_by_slug(pool, slug)
            .await?
            .ok_or_else(|| CoreError::not_found("Page", slug))?,
    };

    let mut joins = PageWidgetRepo::list_for_page(pool, page_row.id).await?;
    let ids: Vec<DbId> = joins.iter().map(|j| j.widget_id).collect();
    let rows = WidgetRepo::find_many(pool, &ids).await?;
    let by_id: HashMap<DbId, WidgetRow> = rows.into_iter().map(|r| (r.id, r)).collect();

    if joins.iter().any(|j| !by_id.contains_key(&j.widget_id)) {
        joins = PageWidgetRepo::list_for_page(pool, page_row.id).await?;
    }

    let mut widgets = Vec::with_capacity(joins.len());
    for join in &joins {
        let Some(row) = by_id.get(&join.widget_id) else {
            continue;
        };
        widgets.push(resolve_widget(pool, row, now).await?);
    }

    Ok((page_to_core(&page_row)?, widgets))
}

/// Resolve a widget by id to its concrete variant.
///
/// Fails with `NotFound` when no row exists; the abstract attributes and
/// the variant payload live in one row, so no secondary lookup can
/// half-succeed.
pub async fn resolve_widget_by_id(
    pool: &PgPool,
    id: DbId,
    now: Timestamp,
) -> Result<Widget, ComposeError> {
    let row = WidgetRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", id))?;
    resolve_widget(pool, &row, now).await
}

/// Resolve a loaded widget row to its concrete variant, loading children
/// and member lists as the kind requires.
pub async fn resolve_widget(
    pool: &PgPool,
    row: &WidgetRow,
    now: Timestamp,
) -> Result<Widget, ComposeError> {
    let kind = WidgetKind::parse(&row.kind).ok_or_else(|| {
        CoreError::Integrity(format!("widget {} has unknown kind '{}'", row.id, row.kind))
    })?;

    let variant = match kind {
        WidgetKind::Text => WidgetVariant::Text {
            content: required(row.content.clone(), row.id, "content")?,
            text_color: row.text_color.clone(),
        },
        WidgetKind::Banner => WidgetVariant::Banner {
            image_url: required(row.image_url.clone(), row.id, "image_url")?,
            link: resolve_link(pool, row.link_kind.as_deref(), row.link_id).await?,
        },
        WidgetKind::ImageCarousel => WidgetVariant::ImageCarousel {
            items: load_carousel_items(pool, row.id).await?,
        },
        WidgetKind::Audio => WidgetVariant::Audio {
            media_url: required(row.media_url.clone(), row.id, "media_url")?,
            description: row.description.clone(),
        },
        WidgetKind::VideoClip => WidgetVariant::VideoClip {
            media_url: required(row.media_url.clone(), row.id, "media_url")?,
            description: row.description.clone(),
        },
        WidgetKind::EventsGroup => {
            let handpicked = EventRepo::handpicked_for_widget(pool, row.id).await?;
            let rows = if handpicked.is_empty() {
                if row.upcoming_events.unwrap_or(false) {
                    EventRepo::upcoming(pool, now, row.upcoming_events_window).await?
                } else {
                    EventRepo::list(pool).await?
                }
            } else {
                handpicked
            };
            WidgetVariant::EventsGroup {
                display_type: display_type(row)?,
                items: rows.iter().map(event_to_core).collect(),
            }
        }
        WidgetKind::PeopleGroup => {
            let handpicked = PersonRepo::handpicked_for_widget(pool, row.id).await?;
            let rows = if !handpicked.is_empty() {
                handpicked
            } else if let Some(team_id) = row.source_house_team_id {
                PersonRepo::by_house_team(pool, team_id).await?
            } else {
                PersonRepo::list(pool, false).await?
            };
            WidgetVariant::PeopleGroup {
                display_type: display_type(row)?,
                items: rows.iter().map(person_to_core).collect(),
            }
        }
        WidgetKind::ApeClassesGroup => {
            let handpicked = ApeClassRepo::handpicked_for_widget(pool, row.id).await?;
            let rows = if handpicked.is_empty() {
                ApeClassRepo::open_for_registration(
                    pool,
                    row.class_type.as_deref(),
                    now.date_naive(),
                )
                .await?
            } else {
                handpicked
            };
            WidgetVariant::ApeClassesGroup {
                display_type: display_type(row)?,
                items: rows
                    .iter()
                    .map(|c| ape_class_to_core(c, None))
                    .collect::<Result<_, _>>()?,
            }
        }
        WidgetKind::VideosGroup => {
            let handpicked = VideoRepo::handpicked_for_widget(pool, row.id).await?;
            let rows = if handpicked.is_empty() {
                VideoRepo::list(pool).await?
            } else {
                handpicked
            };
            WidgetVariant::VideosGroup {
                display_type: display_type(row)?,
                items: rows.iter().map(video_to_core).collect(),
            }
        }
        WidgetKind::EventFocus => {
            let event_id = required(row.event_id, row.id, "event reference")?;
            let event = EventRepo::find_by_id(pool, event_id).await?.ok_or_else(|| {
                CoreError::Integrity(format!("widget {} references missing event {event_id}", row.id))
            })?;
            WidgetVariant::EventFocus {
                event: event_to_core(&event),
            }
        }
        WidgetKind::PersonFocus => {
            let person_id = required(row.person_id, row.id, "person reference")?;
            let person = PersonRepo::find_by_id(pool, person_id).await?.ok_or_else(|| {
                CoreError::Integrity(format!(
                    "widget {} references missing person {person_id}",
                    row.id
                ))
            })?;
            let teams = PersonRepo::teams_for_person(pool, person_id).await?;
            WidgetVariant::PersonFocus {
                person: person_to_core(&person),
                house_teams: teams.iter().map(team_ref).collect(),
            }
        }
        WidgetKind::HouseTeamFocus => {
            let team_id = required(row.house_team_id, row.id, "house team reference")?;
            let team = HouseTeamRepo::find_by_id(pool, team_id).await?.ok_or_else(|| {
                CoreError::Integrity(format!(
                    "widget {} references missing house team {team_id}",
                    row.id
                ))
            })?;
            WidgetVariant::HouseTeamFocus {
                house_team: load_house_team(pool, &team).await?,
            }
        }
        WidgetKind::ApeClassFocus => {
            let class_id = required(row.ape_class_id, row.id, "class reference")?;
            let class = ApeClassRepo::find_by_id(pool, class_id).await?.ok_or_else(|| {
                CoreError::Integrity(format!(
                    "widget {} references missing class {class_id}",
                    row.id
                ))
            })?;
            let teacher = match class.teacher_id {
                Some(teacher_id) => PersonRepo::find_by_id(pool, teacher_id).await?,
                None => None,
            };
            WidgetVariant::ApeClassFocus {
                ape_class: ape_class_to_core(&class, teacher.as_ref())?,
            }
        }
    };

    Ok(Widget {
        id: row.id,
        name: row.name.clone(),
        width: row.width,
        window: ActivationWindow::new(row.start_date, row.end_date),
        variant,
    })
}

/// Resolve a full house team with performers and videos.
pub async fn load_house_team(
    pool: &PgPool,
    team: &HouseTeamRow,
) -> Result<catalog::HouseTeam, ComposeError> {
    let performers = PersonRepo::by_house_team(pool, team.id).await?;
    let videos = HouseTeamRepo::videos_for_team(pool, team.id).await?;
    Ok(catalog::HouseTeam {
        id: team.id,
        name: team.name.clone(),
        show_time: team.show_time.clone(),
        performers: performers.iter().map(person_to_core).collect(),
        videos: videos.iter().map(video_to_core).collect(),
    })
}

/// Resolve a generic link pair against its target.
///
/// Unset pairs and dangling targets fail soft to `None`; an unknown
/// discriminator is an integrity error.
pub async fn resolve_link(
    pool: &PgPool,
    kind: Option<&str>,
    id: Option<DbId>,
) -> Result<Option<LinkTarget>, ComposeError> {
    let (Some(kind), Some(id)) = (kind, id) else {
        return Ok(None);
    };
    let target = LinkTarget::from_parts(kind, id).map_err(ComposeError::Core)?;
    let query = match target {
        LinkTarget::Page(_) => "SELECT EXISTS(SELECT 1 FROM pages WHERE id = $1)",
        LinkTarget::Event(_) => "SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)",
        LinkTarget::Person(_) => "SELECT EXISTS(SELECT 1 FROM people WHERE id = $1)",
        LinkTarget::HouseTeam(_) => "SELECT EXISTS(SELECT 1 FROM house_teams WHERE id = $1)",
    };
    let (exists,): (bool,) = sqlx::query_as(query).bind(id).fetch_one(pool).await?;
    Ok(exists.then_some(target))
}

async fn load_carousel_items(
    pool: &PgPool,
    widget_id: DbId,
) -> Result<Vec<CoreCarouselItem>, ComposeError> {
    let rows = CarouselItemRepo::list_for_widget(pool, widget_id).await?;
    let mut items = Vec::with_capacity(rows.len());
    for row in &rows {
        // Links are required at save time; a NULL pair here is corruption.
        let kind = required(row.link_kind.clone(), widget_id, "carousel item link kind")?;
        let id = required(row.link_id, widget_id, "carousel item link id")?;
        match resolve_link(pool, Some(kind.as_str()), Some(id)).await? {
            Some(link) => items.push(CoreCarouselItem {
                id: row.id,
                image_url: row.image_url.clone(),
                link,
                sort_order: row.sort_order,
                window: ActivationWindow::new(row.start_date, row.end_date),
            }),
            None => {
                tracing::warn!(
                    item = row.id,
                    widget = widget_id,
                    "dropping carousel item with dangling link"
                );
            }
        }
    }
    Ok(items)
}

fn display_type(row: &WidgetRow) -> Result<DisplayType, CoreError> {
    match row.display_type.as_deref() {
        None => Ok(DisplayType::default()),
        Some(s) => DisplayType::parse(s).ok_or_else(|| {
            CoreError::Integrity(format!(
                "widget {} has unknown display type '{s}'",
                row.id
            ))
        }),
    }
}

fn required<T>(value: Option<T>, widget_id: DbId, what: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Integrity(format!("widget {widget_id} is missing its {what}")))
}

fn page_to_core(row: &PageRow) -> Result<CorePage, CoreError> {
    let slug = match row.slug.as_deref() {
        None => None,
        Some(s) => Some(PageSlug::parse(s).ok_or_else(|| {
            CoreError::Integrity(format!("page {} has unknown slug '{s}'", row.id))
        })?),
    };
    Ok(CorePage {
        id: row.id,
        name: row.name.clone(),
        slug,
        draft: row.draft,
        background_gradient: row.background_gradient,
        background_start_color: row.background_start_color.clone(),
        background_end_color: row.background_end_color.clone(),
        text_color: row.text_color.clone(),
        button_color: row.button_color.clone(),
        button_text_color: row.button_text_color.clone(),
        nav_bar_color: row.nav_bar_color.clone(),
        nav_bar_text_color: row.nav_bar_text_color.clone(),
    })
}

pub fn event_to_core(row: &EventRow) -> catalog::Event {
    catalog::Event {
        id: row.id,
        name: row.name.clone(),
        bio: row.bio.clone(),
        start_time: row.start_time,
        max_tickets: row.max_tickets,
        tickets_sold: row.tickets_sold,
        ticket_price: row.ticket_price,
        banner_url: row.banner_url.clone(),
    }
}

pub fn person_to_core(row: &PersonRow) -> catalog::Person {
    catalog::Person {
        id: row.id,
        first_name: row.first_name.clone(),
        last_name: row.last_name.clone(),
        bio: row.bio.clone(),
        headshot_url: row.headshot_url.clone(),
        teaches: row.teaches,
        performs: row.performs,
    }
}

pub fn team_ref(row: &HouseTeamRow) -> catalog::HouseTeamRef {
    catalog::HouseTeamRef {
        id: row.id,
        name: row.name.clone(),
        show_time: row.show_time.clone(),
    }
}

pub fn ape_class_to_core(
    row: &ApeClassRow,
    teacher: Option<&PersonRow>,
) -> Result<catalog::ApeClass, CoreError> {
    let class_type = catalog::ClassType::parse(&row.class_type).ok_or_else(|| {
        CoreError::Integrity(format!(
            "class {} has unknown class type '{}'",
            row.id, row.class_type
        ))
    })?;
    Ok(catalog::ApeClass {
        id: row.id,
        name: row.name.clone(),
        bio: row.bio.clone(),
        class_type,
        price: row.price,
        start_date: row.start_date,
        banner_url: row.banner_url.clone(),
        teacher: teacher.map(person_to_core),
    })
}

pub fn video_to_core(row: &VideoRow) -> catalog::Video {
    catalog::Video {
        id: row.id,
        name: row.name.clone(),
        description: row.description.clone(),
        video_url: row.video_url.clone(),
    }
}
