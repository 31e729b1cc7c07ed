//! Integration tests for the repository layer.
//!
//! Exercises pages, widgets, the join table, and catalog entities against a
//! real database:
//! - Page CRUD and slug reassignment
//! - Widget creation across kinds, kind immutability of the row
//! - Join-table ordering, uniqueness, and sort-order collision bumping
//! - Carousel item cascade delete

use rust_decimal::Decimal;
use sqlx::PgPool;

use marquee_db::models::page::{CreatePage, UpdatePage};
use marquee_db::models::widget::{CreateWidget, WidgetPayload};
use marquee_db::repositories::{PageRepo, PageWidgetRepo, WidgetRepo};

mod support;
use support::{new_page, text_widget};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_page(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("Home", Some("home")))
        .await
        .unwrap();
    assert_eq!(page.name, "Home");
    assert_eq!(page.slug.as_deref(), Some("home"));
    assert!(!page.draft);

    let found = PageRepo::find_by_id(&pool, page.id).await.unwrap().unwrap();
    assert_eq!(found.id, page.id);

    let by_slug = PageRepo::find_by_slug(&pool, "home").await.unwrap().unwrap();
    assert_eq!(by_slug.id, page.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_page_is_none(pool: PgPool) {
    assert!(PageRepo::find_by_id(&pool, 999999).await.unwrap().is_none());
    assert!(PageRepo::find_by_slug(&pool, "home").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slug_reassignment_clears_previous_holder(pool: PgPool) {
    let first = PageRepo::create(&pool, &new_page("Old Home", Some("home")))
        .await
        .unwrap();
    let second = PageRepo::create(&pool, &new_page("New Home", Some("home")))
        .await
        .unwrap();

    let old = PageRepo::find_by_id(&pool, first.id).await.unwrap().unwrap();
    assert_eq!(old.slug, None);
    assert_eq!(second.slug.as_deref(), Some("home"));

    let live = PageRepo::find_by_slug(&pool, "home").await.unwrap().unwrap();
    assert_eq!(live.id, second.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slug_reassignment_via_update(pool: PgPool) {
    let holder = PageRepo::create(&pool, &new_page("Holder", Some("events")))
        .await
        .unwrap();
    let page = PageRepo::create(&pool, &new_page("Plain", None)).await.unwrap();

    let input = UpdatePage {
        slug: Some("events".to_string()),
        ..sparse_update()
    };
    let updated = PageRepo::update(&pool, page.id, &input).await.unwrap().unwrap();
    assert_eq!(updated.slug.as_deref(), Some("events"));

    let old = PageRepo::find_by_id(&pool, holder.id).await.unwrap().unwrap();
    assert_eq!(old.slug, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_page_does_not_resolve_by_slug(pool: PgPool) {
    let mut input = new_page("Draft Home", Some("home"));
    input.draft = Some(true);
    PageRepo::create(&pool, &input).await.unwrap();

    assert!(PageRepo::find_by_slug(&pool, "home").await.unwrap().is_none());
}

fn sparse_update() -> UpdatePage {
    UpdatePage {
        name: None,
        slug: None,
        draft: None,
        background_gradient: None,
        background_start_color: None,
        background_end_color: None,
        text_color: None,
        button_color: None,
        button_text_color: None,
        nav_bar_color: None,
        nav_bar_text_color: None,
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_widget_stores_kind(pool: PgPool) {
    let widget = WidgetRepo::create(&pool, &text_widget("test", "Some text"))
        .await
        .unwrap();
    assert_eq!(widget.kind, "text");
    assert_eq!(widget.content.as_deref(), Some("Some text"));

    let input = CreateWidget {
        name: "Upcoming Shows".to_string(),
        width: Some(2),
        start_date: None,
        end_date: None,
        payload: WidgetPayload::EventsGroup {
            display_type: Some("gallery".to_string()),
            upcoming_events: Some(true),
            upcoming_events_window: Some(7),
        },
    };
    let group = WidgetRepo::create(&pool, &input).await.unwrap();
    assert_eq!(group.kind, "events_group");
    assert_eq!(group.width, Some(2));
    assert_eq!(group.upcoming_events, Some(true));
    assert_eq!(group.upcoming_events_window, Some(7));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_widget_update_keeps_kind(pool: PgPool) {
    let widget = WidgetRepo::create(&pool, &text_widget("before", "Some text"))
        .await
        .unwrap();
    let patch = marquee_db::models::widget::UpdateWidget {
        name: Some("after".to_string()),
        content: Some("New text".to_string()),
        ..Default::default()
    };
    let updated = WidgetRepo::update(&pool, widget.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.kind, "text");
    assert_eq!(updated.name, "after");
    assert_eq!(updated.content.as_deref(), Some("New text"));
}

// ---------------------------------------------------------------------------
// Join table: ordering, uniqueness, collision bumping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attach_without_order_appends(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("P", None)).await.unwrap();
    let a = WidgetRepo::create(&pool, &text_widget("a", "a")).await.unwrap();
    let b = WidgetRepo::create(&pool, &text_widget("b", "b")).await.unwrap();

    let first = PageWidgetRepo::attach(&pool, page.id, a.id, None).await.unwrap();
    assert_eq!(first.sort_order, 0);
    let second = PageWidgetRepo::attach(&pool, page.id, b.id, None).await.unwrap();
    assert_eq!(second.sort_order, 1);

    let joins = PageWidgetRepo::list_for_page(&pool, page.id).await.unwrap();
    let ids: Vec<_> = joins.iter().map(|j| j.widget_id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_order_collision_bumps_to_max_plus_one(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("P", None)).await.unwrap();
    let a = WidgetRepo::create(&pool, &text_widget("a", "a")).await.unwrap();
    let b = WidgetRepo::create(&pool, &text_widget("b", "b")).await.unwrap();

    let first = PageWidgetRepo::attach(&pool, page.id, a.id, Some(5)).await.unwrap();
    assert_eq!(first.sort_order, 5);

    // Same explicit order: the second lands past the maximum, the first is
    // untouched.
    let second = PageWidgetRepo::attach(&pool, page.id, b.id, Some(5)).await.unwrap();
    assert_eq!(second.sort_order, 6);

    let joins = PageWidgetRepo::list_for_page(&pool, page.id).await.unwrap();
    assert_eq!(joins[0].widget_id, a.id);
    assert_eq!(joins[0].sort_order, 5);
    assert_eq!(joins[1].widget_id, b.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_bumps_on_collision(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("P", None)).await.unwrap();
    let a = WidgetRepo::create(&pool, &text_widget("a", "a")).await.unwrap();
    let b = WidgetRepo::create(&pool, &text_widget("b", "b")).await.unwrap();
    PageWidgetRepo::attach(&pool, page.id, a.id, Some(0)).await.unwrap();
    PageWidgetRepo::attach(&pool, page.id, b.id, Some(1)).await.unwrap();

    let moved = PageWidgetRepo::reorder(&pool, page.id, b.id, 0)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.sort_order, 2);

    // Reordering to a free slot takes it as-is.
    let moved = PageWidgetRepo::reorder(&pool, page.id, b.id, 7)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.sort_order, 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_widget_appears_at_most_once_per_page(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("P", None)).await.unwrap();
    let widget = WidgetRepo::create(&pool, &text_widget("a", "a")).await.unwrap();
    PageWidgetRepo::attach(&pool, page.id, widget.id, None).await.unwrap();

    let err = PageWidgetRepo::attach(&pool, page.id, widget.id, None)
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_page_widgets_page_widget"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detach_removes_join_row(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("P", None)).await.unwrap();
    let widget = WidgetRepo::create(&pool, &text_widget("a", "a")).await.unwrap();
    PageWidgetRepo::attach(&pool, page.id, widget.id, None).await.unwrap();

    assert!(PageWidgetRepo::detach(&pool, page.id, widget.id).await.unwrap());
    assert!(!PageWidgetRepo::detach(&pool, page.id, widget.id).await.unwrap());
    assert!(PageWidgetRepo::list_for_page(&pool, page.id).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Cascade behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_widget_cascades_join_rows_and_items(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("P", None)).await.unwrap();
    let carousel = WidgetRepo::create(
        &pool,
        &CreateWidget {
            name: "carousel".to_string(),
            width: None,
            start_date: None,
            end_date: None,
            payload: WidgetPayload::ImageCarousel,
        },
    )
    .await
    .unwrap();
    PageWidgetRepo::attach(&pool, page.id, carousel.id, None).await.unwrap();

    let item = marquee_db::models::carousel_item::CreateCarouselItem {
        image_url: "/media/carousel/1.png".to_string(),
        sort_order: 1,
        link_kind: Some("page".to_string()),
        link_id: Some(page.id),
        start_date: None,
        end_date: None,
    };
    marquee_db::repositories::CarouselItemRepo::create(&pool, carousel.id, &item)
        .await
        .unwrap();

    assert!(WidgetRepo::delete(&pool, carousel.id).await.unwrap());
    assert!(PageWidgetRepo::list_for_page(&pool, page.id).await.unwrap().is_empty());
    let items = marquee_db::repositories::CarouselItemRepo::list_for_widget(&pool, carousel.id)
        .await
        .unwrap();
    assert!(items.is_empty());
}

// ---------------------------------------------------------------------------
// Catalog basics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_crud(pool: PgPool) {
    let event = marquee_db::repositories::EventRepo::create(
        &pool,
        &marquee_db::models::event::CreateEvent {
            name: "Friday Night Laffs".to_string(),
            bio: "Every Friday!".to_string(),
            start_time: None,
            max_tickets: Some(80),
            ticket_price: Decimal::new(1000, 2),
            banner_url: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(event.tickets_sold, 0);
    assert_eq!(event.ticket_price, Decimal::new(1000, 2));

    let found = marquee_db::repositories::EventRepo::find_by_id(&pool, event.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Friday Night Laffs");
}
