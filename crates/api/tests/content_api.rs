//! HTTP-level tests for admin CRUD and the public list pages.

mod common;

use axum::http::StatusCode;
use clubsite_core::collection::{BOARD_PAGE, TUTORIALS_PAGE};
use common::{
    admin_token, body_json, delete_auth, get, get_auth, member_token, post_json_auth,
    put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

async fn create(app: axum::Router, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, uri, body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Board members
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_board_member_appends_at_end(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = create(
        app.clone(),
        "/api/v1/admin/board-members",
        json!({ "name": "Ada", "role": "President" }),
    )
    .await;
    let second = create(
        app,
        "/api/v1/admin/board-members",
        json!({ "name": "Grace", "role": "Treasurer" }),
    )
    .await;

    assert_eq!(first["sort_order"], 0);
    assert_eq!(second["sort_order"], 1);
    assert_eq!(first["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_members_are_hidden_from_public_board(pool: PgPool) {
    let app = common::build_test_app(pool);

    let ada = create(
        app.clone(),
        "/api/v1/admin/board-members",
        json!({ "name": "Ada", "role": "President" }),
    )
    .await;
    let grace = create(
        app.clone(),
        "/api/v1/admin/board-members",
        json!({ "name": "Grace", "role": "Treasurer" }),
    )
    .await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/board-members/{}", grace["id"]),
        json!({ "is_active": false }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let public = body_json(get(app.clone(), "/api/v1/board").await).await;
    assert_eq!(public["data"].as_array().unwrap().len(), 1);
    assert_eq!(public["data"][0]["id"], ada["id"]);

    let admin = body_json(get_auth(app, "/api/v1/admin/board-members", &admin_token()).await).await;
    assert_eq!(admin["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_board_member_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/board-members",
        json!({ "name": "   ", "role": "President" }),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_cannot_create_board_member(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/board-members",
        json!({ "name": "Ada", "role": "President" }),
        &member_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_board_write_revalidates_cached_page(pool: PgPool) {
    let (app, state) = common::build_test_app_with_state(pool);

    get(app.clone(), "/api/v1/board").await;
    assert!(state.pages.get(BOARD_PAGE).await.is_some());

    create(
        app.clone(),
        "/api/v1/admin/board-members",
        json!({ "name": "Ada", "role": "President" }),
    )
    .await;
    assert!(state.pages.get(BOARD_PAGE).await.is_none());

    let public = body_json(get(app, "/api/v1/board").await).await;
    assert_eq!(public["data"][0]["name"], "Ada");
}

// ---------------------------------------------------------------------------
// Episodes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_episode_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let episode = create(
        app.clone(),
        "/api/v1/admin/episodes",
        json!({ "title": "Pilot", "duration_minutes": 42, "tag": "Interview" }),
    )
    .await;
    let id = episode["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/episodes/{id}"),
        json!({ "title": "Pilot (remastered)" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["title"], "Pilot (remastered)");
    assert_eq!(updated["data"]["duration_minutes"], 42);

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/admin/episodes/{id}"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let public = body_json(get(app, "/api/v1/episodes").await).await;
    assert!(public["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_episode_duration_must_be_positive(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/episodes",
        json!({ "title": "Pilot", "duration_minutes": 0, "tag": "Interview" }),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_episode_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/admin/episodes/999999",
        json!({ "title": "Ghost" }),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Episode with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_leaves_gap_in_ranks(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        let project = create(
            app.clone(),
            "/api/v1/admin/projects",
            json!({ "title": title, "category": "Systems" }),
        )
        .await;
        ids.push(project["id"].as_i64().unwrap());
    }

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/admin/projects/{}", ids[1]),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let public = body_json(get(app, "/api/v1/projects").await).await;
    let ranks: Vec<i64> = public["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sort_order"].as_i64().unwrap())
        .collect();
    assert_eq!(ranks, vec![0, 2]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/v1/admin/projects/999999", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_requires_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/projects",
        json!({ "title": "Compiler", "category": "" }),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Tutorials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tutorial_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let tutorial = create(
        app.clone(),
        "/api/v1/admin/tutorials",
        json!({
            "title": "Intro to Python",
            "url": "https://docs.python.org/3/tutorial/",
            "category": "Python"
        }),
    )
    .await;
    let id = tutorial["id"].as_i64().unwrap();
    assert_eq!(tutorial["sort_order"], 0);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/tutorials/{id}"),
        json!({ "category": "Python 3" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["category"], "Python 3");
    assert_eq!(updated["data"]["url"], "https://docs.python.org/3/tutorial/");

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/admin/tutorials/{id}"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let public = body_json(get(app, "/api/v1/tutorials").await).await;
    assert!(public["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tutorial_requires_url(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/tutorials",
        json!({ "title": "Ownership", "url": "", "category": "Rust" }),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_cannot_list_admin_tutorials(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/tutorials", &member_token()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tutorial_write_revalidates_cached_page(pool: PgPool) {
    let (app, state) = common::build_test_app_with_state(pool);

    get(app.clone(), "/api/v1/tutorials").await;
    assert!(state.pages.get(TUTORIALS_PAGE).await.is_some());

    create(
        app.clone(),
        "/api/v1/admin/tutorials",
        json!({ "title": "Borrowing", "url": "https://doc.rust-lang.org/book/", "category": "Rust" }),
    )
    .await;
    assert!(state.pages.get(TUTORIALS_PAGE).await.is_none());

    let public = body_json(get(app, "/api/v1/tutorials").await).await;
    assert_eq!(public["data"][0]["title"], "Borrowing");
}
