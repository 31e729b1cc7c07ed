//! HTTP-level integration tests for the catalog endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use marquee_db::models::event::CreateEvent;
use marquee_db::models::house_team::CreateHouseTeam;
use marquee_db::models::person::CreatePerson;
use marquee_db::models::video::CreateVideo;
use marquee_db::repositories::{EventRepo, HouseTeamRepo, PersonRepo, VideoRepo};

use common::{body_json, get};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_detail_projection(pool: PgPool) {
    let event = EventRepo::create(
        &pool,
        &CreateEvent {
            name: "Friday Night Laffs".to_string(),
            bio: "Every Friday!".to_string(),
            start_time: Some(Utc::now() + Duration::days(1)),
            max_tickets: Some(80),
            ticket_price: Decimal::new(1000, 2),
            banner_url: Some("/media/banners/laffs.png".to_string()),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/events/{}", event.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Friday Night Laffs");
    assert_eq!(json["event_day"], "Tomorrow");
    assert_eq!(json["tickets_left"], 80);
    assert_eq!(json["banner_url"], "/media/banners/laffs.png");
    assert_eq!(
        json["name_with_date"],
        "Friday Night Laffs: Tomorrow"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_detail_includes_house_teams(pool: PgPool) {
    let team = HouseTeamRepo::create(
        &pool,
        &CreateHouseTeam {
            name: "The Goof Troop".to_string(),
            show_time: Some("Fridays at 8".to_string()),
        },
    )
    .await
    .unwrap();
    let person = PersonRepo::create(
        &pool,
        &CreatePerson {
            first_name: "Funnyboy".to_string(),
            last_name: "Jones".to_string(),
            bio: None,
            headshot_url: None,
            teaches: None,
            performs: None,
        },
    )
    .await
    .unwrap();
    PersonRepo::add_membership(&pool, person.id, team.id).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/people/{}", person.id)).await).await;
    assert_eq!(json["name"], "Funnyboy Jones");
    assert_eq!(json["path"], format!("/api/v1/people/{}", person.id));
    let teams = json["house_teams"].as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["name"], "The Goof Troop");
    assert_eq!(teams[0]["show_time"], "Fridays at 8");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_house_team_detail_nests_performers(pool: PgPool) {
    let team = HouseTeamRepo::create(
        &pool,
        &CreateHouseTeam {
            name: "The Goof Troop".to_string(),
            show_time: None,
        },
    )
    .await
    .unwrap();
    for (first, last) in [("Funnyboy", "Jones"), ("Lisa", "Crackemups")] {
        let person = PersonRepo::create(
            &pool,
            &CreatePerson {
                first_name: first.to_string(),
                last_name: last.to_string(),
                bio: None,
                headshot_url: None,
                teaches: None,
                performs: None,
            },
        )
        .await
        .unwrap();
        PersonRepo::add_membership(&pool, person.id, team.id).await.unwrap();
    }
    let video = VideoRepo::create(
        &pool,
        &CreateVideo {
            name: "Best of 2018".to_string(),
            description: Some("Highlights".to_string()),
            video_url: "/media/videos/best-of.mp4".to_string(),
        },
    )
    .await
    .unwrap();
    HouseTeamRepo::add_video(&pool, team.id, video.id).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/house-teams/{}", team.id)).await).await;
    let performers: Vec<_> = json["performers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(performers, vec!["Funnyboy Jones", "Lisa Crackemups"]);
    let videos = json["videos"].as_array().unwrap();
    assert_eq!(videos[0]["video_source"], "/media/videos/best-of.mp4");
    assert_eq!(videos[0]["name"], "Best of 2018");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_catalog_entities_return_404(pool: PgPool) {
    for uri in [
        "/api/v1/events/999999",
        "/api/v1/people/999999",
        "/api/v1/classes/999999",
        "/api/v1/house-teams/999999",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_endpoints_use_data_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/events").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}
