//! HTTP-level integration tests for the `/applications` endpoints.
//!
//! Applications are created through the API or the repository layer to set
//! up scenarios, then verified through the HTTP surface.

mod common;

use axum::http::{Method, StatusCode};
use chrono::{Months, NaiveDate, Utc};
use common::{
    body_json, build_test_app, delete, get, post_empty, post_json, professor_token, put_json,
    requester_token, send,
};
use serde_json::json;
use sqlx::PgPool;

use praxis_db::models::application::CreateApplication;
use praxis_db::repositories::ApplicationRepo;

const AUTHOR: i64 = 7;
const OTHER_USER: i64 = 8;
const PROFESSOR: i64 = 100;

fn months_from_now(months: u32) -> NaiveDate {
    Utc::now().date_naive() + Months::new(months)
}

fn new_application(title: &str) -> CreateApplication {
    CreateApplication {
        title: title.to_string(),
        short_description: "A short summary".to_string(),
        description: "A long description of the requested project".to_string(),
        deadline: months_from_now(7),
        faculty_ids: vec![1],
        project_type_ids: vec![1],
        problem_type_ids: vec![1],
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_application(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/applications",
        &requester_token(AUTHOR),
        json!({
            "title": "Thermal imaging drone",
            "short_description": "Drone-based heat mapping",
            "description": "Build a drone that maps heat loss in buildings",
            "deadline": months_from_now(7).to_string(),
            "faculty_ids": [1],
            "project_type_ids": [1, 2],
            "problem_type_ids": [2],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["author_id"], AUTHOR);
    assert_eq!(json["data"]["title"], "Thermal imaging drone");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_authentication(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(
        app,
        Method::POST,
        "/api/v1/applications",
        None,
        Some(json!({
            "title": "No token",
            "short_description": "s",
            "description": "d",
            "deadline": months_from_now(7).to_string(),
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_empty_title(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/applications",
        &requester_token(AUTHOR),
        json!({
            "title": "",
            "short_description": "s",
            "description": "d",
            "deadline": months_from_now(7).to_string(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_detail_includes_associations(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Detail"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/applications/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["faculty_ids"], json!([1]));
    assert_eq!(json["data"]["project_type_ids"], json!([1]));
    assert_eq!(json["data"]["problem_type_ids"], json!([1]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_application_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(
        app,
        "/api/v1/applications/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_applications_newest_first(pool: PgPool) {
    ApplicationRepo::create(&pool, AUTHOR, &new_application("First"))
        .await
        .unwrap();
    ApplicationRepo::create(&pool, AUTHOR, &new_application("Second"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/applications").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_author_updates_pending_application(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Before"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/applications/{}", created.id),
        &requester_token(AUTHOR),
        json!({ "title": "After", "faculty_ids": [2] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "After");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_pending_deadline_edit_follows_window(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Sliding deadline"))
        .await
        .unwrap();
    let current = created.deadline;

    let app = build_test_app(pool);

    // Backward moves and jumps of more than one month are rejected.
    for deadline in [current - Months::new(1), current + Months::new(2)] {
        let response = put_json(
            app.clone(),
            &format!("/api/v1/applications/{}", created.id),
            &requester_token(AUTHOR),
            json!({ "deadline": deadline.to_string() }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["code"], "BUSINESS_RULE_VIOLATION");
    }

    // One month forward is the upper bound and is accepted.
    let response = put_json(
        app,
        &format!("/api/v1/applications/{}", created.id),
        &requester_token(AUTHOR),
        json!({ "deadline": (current + Months::new(1)).to_string() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"]["deadline"],
        (current + Months::new(1)).to_string()
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_author_cannot_update(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Mine"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/applications/{}", created.id),
        &requester_token(OTHER_USER),
        json!({ "title": "Stolen" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_author_deletes_pending_application(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Doomed"))
        .await
        .unwrap();

    let app = build_test_app(pool.clone());
    let response = delete(
        app.clone(),
        &format!("/api/v1/applications/{}", created.id),
        &requester_token(AUTHOR),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/applications/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_author_cannot_delete(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Mine"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = delete(
        app,
        &format!("/api/v1/applications/{}", created.id),
        &requester_token(OTHER_USER),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_professor_rejects_pending_application(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Weak proposal"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = post_empty(
        app.clone(),
        &format!("/api/v1/applications/{}/reject", created.id),
        &professor_token(PROFESSOR),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "rejected");

    // Rejection is terminal: no edits, no second rejection.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/applications/{}", created.id),
        &requester_token(AUTHOR),
        json!({ "title": "Retry" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_empty(
        app,
        &format!("/api/v1/applications/{}/reject", created.id),
        &professor_token(PROFESSOR),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_requester_cannot_reject(pool: PgPool) {
    let created = ApplicationRepo::create(&pool, AUTHOR, &new_application("Proposal"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = post_empty(
        app,
        &format!("/api/v1/applications/{}/reject", created.id),
        &requester_token(OTHER_USER),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
